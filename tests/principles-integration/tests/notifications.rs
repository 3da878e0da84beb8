//! 依赖注入通知服务的集成测试
use async_trait::async_trait;
use parking_lot::Mutex;
use principles_abstractions::{Channel, MessageSender, Receipt};
use principles_impl::{EmailSender, NotificationService, SmsSender};
use solid_common::{Component, DeliveryError};
use solid_composition::{sender_for, ShowcaseBuilder};
use std::sync::Arc;

/// 记录所有投递的测试发送器
#[derive(Debug, Default)]
struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
}

impl Component for RecordingSender {
    fn name(&self) -> &'static str {
        "recording_sender"
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(&self, recipient: &str, message: &str) -> Result<Receipt, DeliveryError> {
        self.sent
            .lock()
            .push((recipient.to_string(), message.to_string()));
        Ok(Receipt::new(Channel::Email, recipient, message))
    }
}

/// 总是失败的测试发送器
#[derive(Debug)]
struct FailingSender;

impl Component for FailingSender {
    fn name(&self) -> &'static str {
        "failing_sender"
    }
}

#[async_trait]
impl MessageSender for FailingSender {
    async fn send(&self, _recipient: &str, _message: &str) -> Result<Receipt, DeliveryError> {
        Err(DeliveryError::DeliveryFailed {
            channel: "test".to_string(),
            message: "gateway offline".to_string(),
        })
    }
}

#[tokio::test]
async fn test_email_and_sms_routing() {
    let email = NotificationService::new(Arc::new(EmailSender));
    let sms = NotificationService::new(Arc::new(SmsSender));

    let receipt = email
        .send_notification("John", "johndoe@gmail.com", "Your order has shipped!")
        .await
        .unwrap();
    assert_eq!(receipt.channel, Channel::Email);
    assert_eq!(receipt.recipient, "johndoe@gmail.com");

    let receipt = sms
        .send_notification("John", "+1234567890", "Your order has shipped!")
        .await
        .unwrap();
    assert_eq!(receipt.channel, Channel::Sms);
    assert_eq!(receipt.recipient, "+1234567890");
    assert_eq!(receipt.message, "Your order has shipped!");
}

#[tokio::test]
async fn test_service_delegates_exactly_once() {
    let sender = Arc::new(RecordingSender::default());
    let service = NotificationService::new(sender.clone());

    service
        .send_notification("John", "johndoe@gmail.com", "hello")
        .await
        .unwrap();

    let sent = sender.sent.lock();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], ("johndoe@gmail.com".to_string(), "hello".to_string()));
}

#[tokio::test]
async fn test_sender_error_is_returned_unchanged() {
    let service = NotificationService::new(Arc::new(FailingSender));

    let result = service.send_notification("John", "x", "hello").await;
    assert_eq!(
        result.unwrap_err(),
        DeliveryError::DeliveryFailed {
            channel: "test".to_string(),
            message: "gateway offline".to_string(),
        }
    );
}

#[tokio::test]
async fn test_built_in_senders_always_deliver() {
    for channel in [Channel::Email, Channel::Sms] {
        let service = NotificationService::new(sender_for(channel));
        for contact in ["", "   ", "+1234567890"] {
            let receipt = service
                .send_notification("John", contact, "hello")
                .await
                .unwrap();
            assert_eq!(receipt.channel, channel);
            assert_eq!(receipt.recipient, contact);
        }
    }
}

#[tokio::test]
async fn test_composition_root_injects_custom_sender() {
    let sender = Arc::new(RecordingSender::default());
    let showcase = ShowcaseBuilder::new()
        .with_sender(sender.clone())
        .build()
        .unwrap();

    let receipt = showcase.run_notifications().await.unwrap();
    assert_eq!(receipt.recipient, "johndoe@gmail.com");
    assert_eq!(showcase.notifications().sender_name(), "recording_sender");
    assert_eq!(sender.sent.lock().len(), 1);
}
