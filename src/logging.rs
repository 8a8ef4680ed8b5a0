//! Logging setup for the binrelease binary
//!
//! Library code only emits `tracing` events; this module installs the
//! subscriber that writes them to stderr or to a daily-rolling log file.

use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install logger: {0}")]
    Init(String),
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Level applied to this crate when `RUST_LOG` is not set
    pub level: Level,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Write to a daily-rolling file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            file: None,
        }
    }
}

impl LogConfig {
    /// Create logging configuration from CLI arguments
    pub fn from_cli(verbose: u8, json: bool, file: Option<PathBuf>) -> Self {
        let level = match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, json, file }
    }

    /// Filter directive used when `RUST_LOG` is absent
    pub fn default_directive(&self) -> String {
        format!("binrelease={}", self.level)
    }
}

/// Install the global subscriber
///
/// The returned guard flushes buffered events on drop and must be held for
/// the lifetime of the program.
pub fn init_logging(config: &LogConfig) -> Result<WorkerGuard, LoggingError> {
    let (writer, guard) = match &config.file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| LoggingError::InvalidPath(path.clone()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            std::fs::create_dir_all(&dir)?;
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(config.file.is_none());

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };
    result.map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(guard)
}
