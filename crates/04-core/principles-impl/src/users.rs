//! 用户存储与邮件通知
//!
//! [`UserManager`] 只管理用户记录，[`EmailNotifier`] 只负责发送通知。
//! 通知方接收的是邮箱地址，从不接触用户ID。

use principles_abstractions::{NotificationOutcome, Notifier, UserStore};
use std::collections::HashMap;
use tracing::{info, warn};

/// 内存中的用户存储
#[derive(Debug, Default, Clone)]
pub struct UserManager {
    users: HashMap<String, String>,
}

impl UserManager {
    /// 创建空的用户存储
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for UserManager {
    fn add_user(&mut self, user_id: &str, email: &str) {
        info!(user_id, email, "添加用户");
        if let Some(previous) = self.users.insert(user_id.to_string(), email.to_string()) {
            info!(user_id, previous = %previous, "覆盖已有用户的邮箱地址");
        }
    }

    fn get_user_email(&self, user_id: &str) -> Option<&str> {
        self.users.get(user_id).map(String::as_str)
    }

    fn remove_user(&mut self, user_id: &str) -> Option<String> {
        let removed = self.users.remove(user_id);
        if removed.is_some() {
            info!(user_id, "删除用户");
        }
        removed
    }

    fn user_count(&self) -> usize {
        self.users.len()
    }
}

/// 模拟的邮件通知器
///
/// 不真正连接邮件服务器，只记录一次模拟发送。
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotifier;

impl EmailNotifier {
    /// 创建邮件通知器
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for EmailNotifier {
    fn send_notification_email(&self, email: Option<&str>, message: &str) -> NotificationOutcome {
        match email.filter(|address| !address.is_empty()) {
            Some(address) => {
                info!(recipient = address, message, "尝试发送邮件");
                info!("模拟邮件已发送");
                NotificationOutcome::Sent {
                    recipient: address.to_string(),
                }
            }
            None => {
                warn!("无法发送邮件: 邮箱地址不存在");
                NotificationOutcome::AddressMissing
            }
        }
    }
}
