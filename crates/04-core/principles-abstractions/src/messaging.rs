//! 消息发送抽象接口

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solid_common::{Component, DeliveryResult};
use std::fmt;
use std::str::FromStr;

/// 消息渠道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// 电子邮件
    #[default]
    Email,
    /// 短信
    Sms,
}

impl Channel {
    /// 渠道名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            other => Err(format!("未知的消息渠道: {other}")),
        }
    }
}

/// 投递回执
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// 回执ID
    pub id: uuid::Uuid,
    /// 投递渠道
    pub channel: Channel,
    /// 收件人
    pub recipient: String,
    /// 消息内容
    pub message: String,
    /// 发送时间
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

impl Receipt {
    /// 创建新的投递回执
    pub fn new(channel: Channel, recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            channel,
            recipient: recipient.into(),
            message: message.into(),
            sent_at: chrono::Utc::now(),
        }
    }
}

/// 消息发送器 trait
///
/// 高层服务只持有此抽象，具体实现由调用方在构造时注入。
#[async_trait]
pub trait MessageSender: Component {
    /// 发送消息
    async fn send(&self, recipient: &str, message: &str) -> DeliveryResult<Receipt>;
}
