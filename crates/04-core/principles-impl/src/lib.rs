//! # Principles Implementations
//!
//! 提供各能力抽象的具体实现，以及持有这些实现并委托调用的组合对象。
//!
//! - [`users`] - 用户存储与邮件通知，职责分离
//! - [`discount`] - 按键注册的折扣策略与折扣计算器
//! - [`shapes`] - 互不继承可变状态的矩形与正方形
//! - [`workers`] - 按能力子集声明的工作者
//! - [`notification`] - 依赖注入的通知服务与消息发送器

pub mod discount;
pub mod notification;
pub mod registry;
pub mod shapes;
pub mod users;
pub mod workers;

pub use discount::{
    DiscountCalculator, PercentageDiscount, PremiumDiscount, RegularDiscount, VipDiscount,
};
pub use notification::{EmailSender, NotificationService, SmsSender};
pub use registry::KeyedRegistry;
pub use shapes::{print_area, Rectangle, Square};
pub use users::{EmailNotifier, UserManager};
pub use workers::{run_shift, HumanWorker, RobotWorker};
