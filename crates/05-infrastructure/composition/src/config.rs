//! 组合根的类型化配置
//!
//! 配置来自一个可选的 TOML 文件，缺失的节使用默认值，
//! 随后可以被 `SOLID_` 前缀的环境变量覆盖。

use principles_abstractions::Channel;
use principles_impl::discount::{PREMIUM, REGULAR, VIP};
use principles_impl::{PremiumDiscount, RegularDiscount, VipDiscount};
use serde::{Deserialize, Serialize};
use solid_common::{parse_log_level, ConfigError, ConfigResult, LoggingConfig};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "SOLID_";

/// 邮件渠道的默认联系方式
pub const DEFAULT_EMAIL_CONTACT: &str = "johndoe@gmail.com";

/// 短信渠道的默认联系方式
pub const DEFAULT_SMS_CONTACT: &str = "+1234567890";

/// 日志配置节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// 日志级别
    pub level: String,
    /// 是否输出 JSON
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// 通知配置节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSection {
    /// 注入通知服务的消息渠道
    pub channel: Channel,
    /// 演示用的用户名
    pub user: String,
    /// 演示用的联系方式，未设置时按渠道取默认值
    pub contact: Option<String>,
    /// 演示用的消息
    pub message: String,
}

impl Default for NotificationSection {
    fn default() -> Self {
        Self {
            channel: Channel::Email,
            user: "John".to_string(),
            contact: None,
            message: "Your order has shipped!".to_string(),
        }
    }
}

impl NotificationSection {
    /// 实际使用的联系方式
    pub fn contact(&self) -> &str {
        match (&self.contact, self.channel) {
            (Some(contact), _) => contact,
            (None, Channel::Email) => DEFAULT_EMAIL_CONTACT,
            (None, Channel::Sms) => DEFAULT_SMS_CONTACT,
        }
    }
}

/// 组合根配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// 日志配置
    pub logging: LoggingSection,
    /// 客户类型到折扣百分比的映射
    pub discounts: BTreeMap<String, f64>,
    /// 通知配置
    pub notification: NotificationSection,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let discounts = BTreeMap::from([
            (REGULAR.to_string(), RegularDiscount::PERCENT),
            (VIP.to_string(), VipDiscount::PERCENT),
            (PREMIUM.to_string(), PremiumDiscount::PERCENT),
        ]);

        Self {
            logging: LoggingSection::default(),
            discounts,
            notification: NotificationSection::default(),
        }
    }
}

impl ShowcaseConfig {
    /// 从 TOML 文本解析并验证配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        debug!("加载 TOML 配置文件: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 应用进程环境变量覆盖
    pub fn apply_env_overrides(self) -> ConfigResult<Self> {
        self.apply_overrides(std::env::vars())
    }

    /// 应用键值覆盖
    ///
    /// 只识别 `SOLID_LOG_LEVEL`、`SOLID_LOG_JSON` 和 `SOLID_NOTIFICATION_CHANNEL`，
    /// 其余键被忽略。
    pub fn apply_overrides<I, K, V>(mut self, vars: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref();

            match name {
                "LOG_LEVEL" => self.logging.level = value.to_string(),
                "LOG_JSON" => self.logging.json = parse_flag(name, value)?,
                "NOTIFICATION_CHANNEL" => {
                    self.notification.channel = value
                        .parse::<Channel>()
                        .map_err(|message: String| ConfigError::validation(message))?;
                }
                _ => continue,
            }
            debug!(key = name, value, "应用环境变量覆盖");
        }

        self.validate()?;
        Ok(self)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if parse_log_level(&self.logging.level).is_none() {
            return Err(ConfigError::validation(format!(
                "未知的日志级别: {}",
                self.logging.level
            )));
        }

        for (customer_type, percent) in &self.discounts {
            if customer_type.trim().is_empty() {
                return Err(ConfigError::validation("客户类型不能为空"));
            }
            if !percent.is_finite() || !(0.0..=100.0).contains(percent) {
                return Err(ConfigError::validation(format!(
                    "折扣百分比超出范围 0..=100: {customer_type} = {percent}"
                )));
            }
        }

        Ok(())
    }

    /// 转换为日志配置
    pub fn logging_config(&self) -> ConfigResult<LoggingConfig> {
        let level = parse_log_level(&self.logging.level).ok_or_else(|| {
            ConfigError::validation(format!("未知的日志级别: {}", self.logging.level))
        })?;

        Ok(LoggingConfig::default()
            .with_level(level)
            .with_json_format(self.logging.json))
    }
}

/// 解析布尔型覆盖值
fn parse_flag(name: &str, value: &str) -> ConfigResult<bool> {
    value.parse().map_err(|_| ConfigError::TypeConversionError {
        message: format!("{ENV_PREFIX}{name} 不是布尔值: {value}"),
    })
}
