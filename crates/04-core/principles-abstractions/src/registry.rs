//! 策略注册表抽象接口

use std::sync::Arc;

/// 策略注册表 trait
///
/// 以字符串键关联能力实现。新的实现通过注册加入，分派逻辑保持不变。
pub trait StrategyRegistry<S: ?Sized>: Send + Sync {
    /// 注册策略，返回被替换的旧策略（如果有）
    fn register(&mut self, key: impl Into<String>, strategy: Arc<S>) -> Option<Arc<S>>
    where
        Self: Sized;

    /// 按键解析策略
    fn resolve(&self, key: &str) -> Option<Arc<S>>;

    /// 注销策略
    fn unregister(&mut self, key: &str) -> Option<Arc<S>>;

    /// 检查键是否已注册
    fn is_registered(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// 获取所有已注册的键（按字典序）
    fn keys(&self) -> Vec<String>;

    /// 已注册策略数量
    fn len(&self) -> usize {
        self.keys().len()
    }

    /// 是否没有任何注册
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
