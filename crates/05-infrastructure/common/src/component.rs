//! 组件基础接口定义
//!
//! 提供所有可替换实现都必须实现的基础 trait

use std::fmt::Debug;

/// 组件基础 trait
///
/// 策略、形状、工作者和消息发送器都以此为基础，
/// 这样组合根可以在日志中用统一的名称描述它们。
pub trait Component: Send + Sync + Debug + 'static {
    /// 组件名称
    fn name(&self) -> &'static str;

    /// 组件类型名称（不包含模块路径）
    fn type_name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}

/// 获取简短的类型名称（不包含模块路径）
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestComponent;

    impl Component for TestComponent {
        fn name(&self) -> &'static str {
            "test_component"
        }
    }

    #[test]
    fn test_component_defaults() {
        let component = TestComponent;
        assert_eq!(component.name(), "test_component");
        assert_eq!(component.type_name(), "TestComponent");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<u32>(), "u32");
    }
}
