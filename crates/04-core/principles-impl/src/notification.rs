//! 依赖注入的通知服务
//!
//! [`NotificationService`] 从不自己构造消息发送器，发送器在构造时由调用方注入。
//! 从邮件切换到短信只需要注入不同的实现，服务本身不做任何修改。

use async_trait::async_trait;
use principles_abstractions::{Channel, MessageSender, Receipt};
use solid_common::{Component, DeliveryResult};
use std::sync::Arc;
use tracing::info;

/// 邮件发送器
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailSender;

impl Component for EmailSender {
    fn name(&self) -> &'static str {
        "email_sender"
    }
}

#[async_trait]
impl MessageSender for EmailSender {
    async fn send(&self, recipient: &str, message: &str) -> DeliveryResult<Receipt> {
        info!(recipient, message, "发送邮件");
        Ok(Receipt::new(Channel::Email, recipient, message))
    }
}

/// 短信发送器
#[derive(Debug, Default, Clone, Copy)]
pub struct SmsSender;

impl Component for SmsSender {
    fn name(&self) -> &'static str {
        "sms_sender"
    }
}

#[async_trait]
impl MessageSender for SmsSender {
    async fn send(&self, recipient: &str, message: &str) -> DeliveryResult<Receipt> {
        info!(recipient, message, "发送短信");
        Ok(Receipt::new(Channel::Sms, recipient, message))
    }
}

/// 通知服务
#[derive(Debug, Clone)]
pub struct NotificationService {
    sender: Arc<dyn MessageSender>,
}

impl NotificationService {
    /// 使用注入的发送器创建通知服务
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// 当前注入的发送器名称
    pub fn sender_name(&self) -> &'static str {
        self.sender.name()
    }

    /// 发送通知
    ///
    /// 记录处理步骤后原样委托给注入的发送器，结果不做任何转换。
    pub async fn send_notification(
        &self,
        user: &str,
        contact: &str,
        message: &str,
    ) -> DeliveryResult<Receipt> {
        info!(user, sender = self.sender.name(), "处理通知");
        self.sender.send(contact, message).await
    }
}
