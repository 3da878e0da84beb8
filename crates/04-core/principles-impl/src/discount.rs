//! 折扣策略与折扣计算器
//!
//! 新的客户类型通过 [`DiscountCalculator::register`] 加入，
//! [`DiscountCalculator::calculate_discount`] 的分派逻辑从不需要修改。

use principles_abstractions::{DiscountStrategy, StrategyRegistry};
use solid_common::Component;
use std::sync::Arc;
use tracing::{debug, info};

use crate::registry::KeyedRegistry;

/// 普通客户键
pub const REGULAR: &str = "Regular";
/// VIP 客户键
pub const VIP: &str = "VIP";
/// 高级客户键
pub const PREMIUM: &str = "Premium";

/// 按百分比计算折扣
///
/// 先乘后除，整数金额可以得到精确结果。
fn apply_percent(amount: f64, percent: f64) -> f64 {
    amount * percent / 100.0
}

/// 普通客户折扣，5%
#[derive(Debug, Default, Clone, Copy)]
pub struct RegularDiscount;

impl RegularDiscount {
    /// 折扣百分比
    pub const PERCENT: f64 = 5.0;
}

impl Component for RegularDiscount {
    fn name(&self) -> &'static str {
        "regular_discount"
    }
}

impl DiscountStrategy for RegularDiscount {
    fn calculate_discount(&self, amount: f64) -> f64 {
        let discount = apply_percent(amount, Self::PERCENT);
        info!(discount, "应用 5% 普通折扣");
        discount
    }

    fn percent(&self) -> f64 {
        Self::PERCENT
    }
}

/// VIP 客户折扣，15%
#[derive(Debug, Default, Clone, Copy)]
pub struct VipDiscount;

impl VipDiscount {
    /// 折扣百分比
    pub const PERCENT: f64 = 15.0;
}

impl Component for VipDiscount {
    fn name(&self) -> &'static str {
        "vip_discount"
    }
}

impl DiscountStrategy for VipDiscount {
    fn calculate_discount(&self, amount: f64) -> f64 {
        let discount = apply_percent(amount, Self::PERCENT);
        info!(discount, "应用 15% VIP 折扣");
        discount
    }

    fn percent(&self) -> f64 {
        Self::PERCENT
    }
}

/// 高级客户折扣，10%
#[derive(Debug, Default, Clone, Copy)]
pub struct PremiumDiscount;

impl PremiumDiscount {
    /// 折扣百分比
    pub const PERCENT: f64 = 10.0;
}

impl Component for PremiumDiscount {
    fn name(&self) -> &'static str {
        "premium_discount"
    }
}

impl DiscountStrategy for PremiumDiscount {
    fn calculate_discount(&self, amount: f64) -> f64 {
        let discount = apply_percent(amount, Self::PERCENT);
        info!(discount, "应用 10% 高级折扣");
        discount
    }

    fn percent(&self) -> f64 {
        Self::PERCENT
    }
}

/// 任意百分比的折扣，用于配置中定义的客户类型
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageDiscount {
    label: String,
    percent: f64,
}

impl PercentageDiscount {
    /// 创建百分比折扣
    pub fn new(label: impl Into<String>, percent: f64) -> Self {
        Self {
            label: label.into(),
            percent,
        }
    }

    /// 折扣标签
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Component for PercentageDiscount {
    fn name(&self) -> &'static str {
        "percentage_discount"
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn calculate_discount(&self, amount: f64) -> f64 {
        let discount = apply_percent(amount, self.percent);
        info!(label = %self.label, percent = self.percent, discount, "应用百分比折扣");
        discount
    }

    fn percent(&self) -> f64 {
        self.percent
    }
}

/// 折扣计算器
///
/// 按客户类型查找策略并委托计算。未注册的客户类型没有折扣。
#[derive(Debug, Clone)]
pub struct DiscountCalculator {
    strategies: KeyedRegistry<dyn DiscountStrategy>,
}

impl Default for DiscountCalculator {
    fn default() -> Self {
        Self::with_default_tiers()
    }
}

impl DiscountCalculator {
    /// 创建没有任何策略的计算器
    pub fn new() -> Self {
        Self {
            strategies: KeyedRegistry::new(),
        }
    }

    /// 创建注册了普通、VIP、高级三种客户类型的计算器
    pub fn with_default_tiers() -> Self {
        let mut calculator = Self::new();
        calculator.register(REGULAR, Arc::new(RegularDiscount));
        calculator.register(VIP, Arc::new(VipDiscount));
        calculator.register(PREMIUM, Arc::new(PremiumDiscount));
        calculator
    }

    /// 注册客户类型对应的策略，返回被替换的旧策略
    pub fn register(
        &mut self,
        customer_type: impl Into<String>,
        strategy: Arc<dyn DiscountStrategy>,
    ) -> Option<Arc<dyn DiscountStrategy>> {
        let customer_type = customer_type.into();
        debug!(
            customer_type = %customer_type,
            strategy = strategy.name(),
            type_name = strategy.type_name(),
            "注册折扣策略"
        );
        self.strategies.register(customer_type, strategy)
    }

    /// 注销客户类型
    pub fn unregister(&mut self, customer_type: &str) -> Option<Arc<dyn DiscountStrategy>> {
        self.strategies.unregister(customer_type)
    }

    /// 计算折扣，未知客户类型返回 0
    pub fn calculate_discount(&self, customer_type: &str, amount: f64) -> f64 {
        match self.strategies.resolve(customer_type) {
            Some(strategy) => strategy.calculate_discount(amount),
            None => {
                debug!(customer_type, "未知客户类型，不打折");
                0.0
            }
        }
    }

    /// 检查客户类型是否已注册
    pub fn is_registered(&self, customer_type: &str) -> bool {
        self.strategies.is_registered(customer_type)
    }

    /// 所有已注册的客户类型
    pub fn customer_types(&self) -> Vec<String> {
        self.strategies.keys()
    }
}
