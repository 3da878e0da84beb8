//! # 演示程序
//!
//! 构建组合根并运行五个互相独立的示例

use anyhow::Context;
use clap::{Parser, Subcommand};
use solid_common::parse_log_level;
use solid_composition::{Showcase, DEMO_AMOUNT};
use std::path::PathBuf;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "solid-demo")]
#[command(about = "Solid Showcase 示例程序")]
struct Args {
    /// 配置文件路径（TOML）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，优先于配置文件
    #[arg(long)]
    log_level: Option<String>,

    /// 输出 JSON 格式日志
    #[arg(long)]
    json_logs: bool,

    /// 要运行的示例
    #[command(subcommand)]
    demo: Option<Demo>,
}

/// 可运行的示例
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Demo {
    /// 用户存储与邮件通知
    Users,
    /// 按客户类型计算折扣
    Discounts,
    /// 形状面积
    Shapes,
    /// 工作者能力
    Workers,
    /// 注入发送器的通知服务
    Notifications,
    /// 全部示例
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut showcase = build_showcase(&args)?;
    info!("启动 Solid Showcase 示例程序");

    match args.demo.unwrap_or(Demo::All) {
        Demo::Users => {
            showcase.run_user_management();
        }
        Demo::Discounts => {
            showcase.run_discounts(DEMO_AMOUNT);
        }
        Demo::Shapes => {
            showcase.run_shapes();
        }
        Demo::Workers => {
            showcase.run_workers();
        }
        Demo::Notifications => {
            showcase.run_notifications().await?;
        }
        Demo::All => {
            showcase.run_all().await?;
        }
    }

    info!("示例运行完成");
    Ok(())
}

/// 构建组合根
fn build_showcase(args: &Args) -> anyhow::Result<Showcase> {
    let mut builder = Showcase::builder();

    if let Some(path) = &args.config {
        builder = builder
            .load_config(path)
            .with_context(|| format!("无法加载配置文件 {}", path.display()))?;
    }
    builder = builder.with_env_overrides()?;

    // 命令行参数优先于配置文件和环境变量
    let mut logging = builder.config().logging_config()?;
    if let Some(level) = &args.log_level {
        let level =
            parse_log_level(level).with_context(|| format!("未知的日志级别: {level}"))?;
        logging = logging.with_level(level);
    }
    if args.json_logs {
        logging = logging.with_json_format(true);
    }

    Ok(builder.with_logging(logging).build()?)
}
