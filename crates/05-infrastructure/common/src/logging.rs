//! 日志配置与初始化

use crate::errors::ShowcaseError;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 设置日志级别
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    /// 设置是否使用 JSON 格式
    pub fn with_json_format(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }

    /// 初始化全局日志订阅器
    ///
    /// `RUST_LOG` 存在时优先于配置中的级别。重复初始化返回错误而不是 panic，
    /// 测试中可以安全地多次调用。
    pub fn try_init(&self) -> Result<(), ShowcaseError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str().to_lowercase()));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(self.show_target)
            .with_thread_ids(self.show_thread_ids)
            .with_file(self.show_file)
            .with_line_number(self.show_line_number);

        let result = if self.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        };
        result.map_err(|e| ShowcaseError::LoggingInitFailed {
            message: e.to_string(),
        })?;

        info!(level = %self.level, json = self.json_format, "日志系统初始化完成");
        Ok(())
    }
}

/// 解析日志级别
///
/// 不区分大小写，无法识别时返回 `None`。
pub fn parse_log_level(level: &str) -> Option<tracing::Level> {
    tracing::Level::from_str(level.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_returns_error() {
        let config = LoggingConfig::default().with_level(tracing::Level::DEBUG);

        assert!(config.try_init().is_ok());
        assert!(matches!(
            config.try_init(),
            Err(ShowcaseError::LoggingInitFailed { .. })
        ));
    }

    #[test]
    fn test_builder_setters() {
        let config = LoggingConfig::default()
            .with_level(tracing::Level::WARN)
            .with_json_format(true);
        assert_eq!(config.level, tracing::Level::WARN);
        assert!(config.json_format);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level(" WARN "), Some(tracing::Level::WARN));
        assert_eq!(parse_log_level("verbose"), None);
    }
}
