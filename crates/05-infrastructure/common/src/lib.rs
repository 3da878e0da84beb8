//! # Solid Common
//!
//! 这个 crate 提供了 Solid Showcase 各层共用的 traits 和工具。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait，所有可替换的实现都以它为基础
//! - [`ConfigError`] / [`DeliveryError`] / [`ShowcaseError`] - 错误类型
//! - [`LoggingConfig`] - 日志配置与初始化
//!
//! ## 设计原则
//!
//! - 高层只依赖抽象，具体实现通过注入获得
//! - 基于 Rust 类型系统的编译时能力约束
//! - 扩展通过注册完成，而不是修改分派逻辑

pub mod component;
pub mod errors;
pub mod logging;

pub use component::*;
pub use errors::*;
pub use logging::*;
