//! # Showcase Composition
//!
//! 这个 crate 是整个工作区的组合层，负责把各个能力抽象接到具体实现上，
//! 并运行五个互相独立的示例。
//!
//! ## 主要功能
//!
//! - **类型化配置**: TOML 配置文件与 `SOLID_` 环境变量覆盖
//! - **组合根构建器**: 使用构建者模式选择并注入具体实现
//! - **演示运行**: 每个示例返回一份可断言的结果
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use solid_composition::Showcase;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut showcase = Showcase::builder()
//!         .load_config("config/showcase.toml")?
//!         .with_env_overrides()?
//!         .enable_logging()
//!         .build()?;
//!
//!     let report = showcase.run_all().await?;
//!     println!("通知已通过 {} 投递", report.receipt.channel);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod showcase;

// 重新导出主要类型
pub use builder::{sender_for, strategy_for, ShowcaseBuilder};
pub use config::{
    LoggingSection, NotificationSection, ShowcaseConfig, DEFAULT_EMAIL_CONTACT, DEFAULT_SMS_CONTACT,
    ENV_PREFIX,
};
pub use showcase::{
    AreaLine, DiscountLine, Showcase, ShowcaseReport, UserReport, DEMO_AMOUNT,
    UNKNOWN_CUSTOMER_TYPE,
};

// 重新导出错误类型
pub use solid_common::ShowcaseError;
