//! # Principles Abstractions
//!
//! 能力抽象层，定义各个示例中可替换实现所依赖的核心接口。
//!
//! ## 核心接口
//!
//! - [`UserStore`] / [`Notifier`] - 用户存储与邮件通知，各自只有一个变更原因
//! - [`StrategyRegistry`] / [`DiscountStrategy`] - 按键注册、按键分派的策略
//! - [`Shape`] - 可互相替换的面积计算
//! - [`Workable`] / [`Eatable`] / [`Sleepable`] / [`Worker`] - 分离的工作者能力
//! - [`MessageSender`] - 由调用方注入的消息发送器

pub mod discount;
pub mod messaging;
pub mod registry;
pub mod shape;
pub mod users;
pub mod worker;

pub use discount::*;
pub use messaging::*;
pub use registry::*;
pub use shape::*;
pub use users::*;
pub use worker::*;
