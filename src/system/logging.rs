//! Logging setup
//!
//! One `tracing` subscriber for the whole process, writing through a
//! non-blocking `tracing-appender` worker.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

const DEFAULT_LOG_FILE: &str = "golinks.log";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    File(String),
    Rolling { dir: String, prefix: String },
}

/// 根据配置选择输出目标
pub fn log_target(config: &LoggingConfig) -> LogTarget {
    let Some(file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
        return LogTarget::Stdout;
    };

    if !config.enable_rotation {
        return LogTarget::File(file.to_string());
    }

    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE);

    LogTarget::Rolling {
        dir,
        prefix: name.trim_end_matches(".log").to_string(),
    }
}

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `logging.level`. The returned guard must
/// be held until exit so buffered lines are flushed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let target = log_target(config);
    let to_console = target == LogTarget::Stdout;

    let writer: Box<dyn std::io::Write + Send + Sync> = match target {
        LogTarget::Stdout => Box::new(std::io::stdout()),
        LogTarget::File(file) => Box::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&file)
                .with_context(|| format!("Failed to open log file {}", file))?,
        ),
        LogTarget::Rolling { dir, prefix } => Box::new(
            rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(&dir)
                .with_context(|| format!("Failed to create rolling log appender in {}", dir))?,
        ),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console);

    let result = if config.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(file: Option<&str>, rotation: bool) -> LoggingConfig {
        LoggingConfig {
            file: file.map(String::from),
            enable_rotation: rotation,
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_stdout_without_file() {
        assert_eq!(log_target(&logging(None, true)), LogTarget::Stdout);
        assert_eq!(log_target(&logging(Some(""), true)), LogTarget::Stdout);
    }

    #[test]
    fn test_plain_file() {
        assert_eq!(
            log_target(&logging(Some("logs/golinks.log"), false)),
            LogTarget::File("logs/golinks.log".to_string())
        );
    }

    #[test]
    fn test_rolling_file() {
        assert_eq!(
            log_target(&logging(Some("/var/log/golinks/app.log"), true)),
            LogTarget::Rolling {
                dir: "/var/log/golinks".to_string(),
                prefix: "app".to_string(),
            }
        );
        assert_eq!(
            log_target(&logging(Some("golinks.log"), true)),
            LogTarget::Rolling {
                dir: ".".to_string(),
                prefix: "golinks".to_string(),
            }
        );
    }
}
