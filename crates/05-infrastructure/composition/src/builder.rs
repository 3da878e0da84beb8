//! 组合根构建器

use crate::config::ShowcaseConfig;
use crate::showcase::Showcase;
use principles_abstractions::{Channel, DiscountStrategy, MessageSender};
use principles_impl::discount::{PREMIUM, REGULAR, VIP};
use principles_impl::{
    DiscountCalculator, EmailSender, NotificationService, PercentageDiscount, PremiumDiscount,
    RegularDiscount, SmsSender, VipDiscount,
};
use solid_common::{Component, LoggingConfig, ShowcaseError};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// 组合根构建器
///
/// 使用建造者模式把具体实现接到抽象上。这是整个工作区里唯一
/// 根据配置选择具体实现的地方。
pub struct ShowcaseBuilder {
    /// 组合根配置
    config: ShowcaseConfig,
    /// 显式注入的发送器，优先于配置中的渠道
    sender: Option<Arc<dyn MessageSender>>,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 显式的日志配置，优先于配置文件中的日志节
    logging_config: Option<LoggingConfig>,
}

impl ShowcaseBuilder {
    /// 创建使用默认配置的构建器
    pub fn new() -> Self {
        Self {
            config: ShowcaseConfig::default(),
            sender: None,
            logging_enabled: false, // 默认不启用日志初始化
            logging_config: None,
        }
    }

    /// 使用给定配置
    pub fn with_config(mut self, config: ShowcaseConfig) -> Self {
        self.config = config;
        self
    }

    /// 当前配置
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// 从 TOML 文件加载配置
    pub fn load_config<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ShowcaseError> {
        let path = path.as_ref();
        info!("加载 TOML 配置文件: {}", path.display());
        self.config = ShowcaseConfig::load(path)?;
        Ok(self)
    }

    /// 应用 `SOLID_` 前缀的环境变量覆盖
    pub fn with_env_overrides(mut self) -> Result<Self, ShowcaseError> {
        self.config = self.config.apply_env_overrides()?;
        Ok(self)
    }

    /// 显式注入消息发送器
    pub fn with_sender(mut self, sender: Arc<dyn MessageSender>) -> Self {
        debug!(sender = sender.name(), type_name = sender.type_name(), "注入消息发送器");
        self.sender = Some(sender);
        self
    }

    /// 启用日志初始化，使用配置文件中的日志节
    pub fn enable_logging(mut self) -> Self {
        self.logging_enabled = true;
        self
    }

    /// 启用日志初始化，使用显式的日志配置
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = Some(config);
        self.logging_enabled = true;
        self
    }

    /// 构建组合根
    pub fn build(self) -> Result<Showcase, ShowcaseError> {
        self.config.validate()?;

        // 只有在明确要求时才初始化日志，避免在测试中重复初始化
        if self.logging_enabled {
            let logging = match self.logging_config {
                Some(config) => config,
                None => self.config.logging_config()?,
            };
            logging.try_init()?;
        }

        info!("开始构建组合根");

        let mut calculator = DiscountCalculator::new();
        for (customer_type, percent) in &self.config.discounts {
            calculator.register(customer_type.clone(), strategy_for(customer_type, *percent));
        }

        let sender = match self.sender {
            Some(sender) => sender,
            None => sender_for(self.config.notification.channel),
        };
        info!(
            customer_types = calculator.customer_types().len(),
            sender = sender.name(),
            "组合根构建完成"
        );

        Ok(Showcase::new(
            self.config,
            calculator,
            NotificationService::new(sender),
        ))
    }
}

impl Default for ShowcaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 为客户类型选择折扣策略
///
/// 内置客户类型在百分比与默认值一致时使用内置策略，其余都是百分比折扣。
#[allow(clippy::float_cmp)]
pub fn strategy_for(customer_type: &str, percent: f64) -> Arc<dyn DiscountStrategy> {
    match customer_type {
        REGULAR if percent == RegularDiscount::PERCENT => Arc::new(RegularDiscount),
        VIP if percent == VipDiscount::PERCENT => Arc::new(VipDiscount),
        PREMIUM if percent == PremiumDiscount::PERCENT => Arc::new(PremiumDiscount),
        _ => Arc::new(PercentageDiscount::new(customer_type, percent)),
    }
}

/// 为消息渠道创建发送器
pub fn sender_for(channel: Channel) -> Arc<dyn MessageSender> {
    match channel {
        Channel::Email => Arc::new(EmailSender),
        Channel::Sms => Arc::new(SmsSender),
    }
}
