//! 用户存储与通知抽象接口

/// 用户存储 trait
///
/// 只负责用户记录的增删查，不涉及任何通知逻辑。
pub trait UserStore: Send + Sync {
    /// 添加用户，已存在时覆盖邮箱地址
    fn add_user(&mut self, user_id: &str, email: &str);

    /// 查询用户邮箱
    fn get_user_email(&self, user_id: &str) -> Option<&str>;

    /// 删除用户，返回被删除的邮箱地址；用户不存在时为空操作
    fn remove_user(&mut self, user_id: &str) -> Option<String>;

    /// 已存储的用户数量
    fn user_count(&self) -> usize;
}

/// 邮件通知 trait
///
/// 直接接收邮箱地址而不是用户ID，与用户存储没有任何耦合。
pub trait Notifier: Send + Sync {
    /// 发送通知邮件
    fn send_notification_email(&self, email: Option<&str>, message: &str) -> NotificationOutcome;
}

/// 通知结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// 已发送
    Sent {
        /// 收件地址
        recipient: String,
    },
    /// 没有可用的邮箱地址，未发送
    AddressMissing,
}

impl NotificationOutcome {
    /// 是否已发送
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}
