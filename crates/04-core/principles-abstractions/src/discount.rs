//! 折扣策略抽象接口

use solid_common::Component;

/// 折扣策略 trait
///
/// 无状态的函数对象，把金额映射为折扣值。
pub trait DiscountStrategy: Component {
    /// 计算折扣
    fn calculate_discount(&self, amount: f64) -> f64;

    /// 折扣百分比，仅用于展示
    fn percent(&self) -> f64;
}
