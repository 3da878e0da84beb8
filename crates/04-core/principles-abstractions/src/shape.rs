//! 形状抽象接口

use solid_common::Component;

/// 形状 trait
///
/// 只依赖此能力的调用方，不论持有哪种具体形状，行为都一致。
pub trait Shape: Component {
    /// 计算面积
    fn calculate_area(&self) -> f64;
}
