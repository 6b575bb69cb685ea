//! Logging bootstrap for driftfs processes.
//!
//! Call [`init_logging`] once at startup. Log output goes to the console
//! and, when a directory is configured, to a daily-rotated file. The
//! returned guard must stay alive for the life of the process so the
//! non-blocking file writer flushes on exit.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Re-export tracing macros so callers need only this crate.
pub use tracing::{debug, error, info, trace, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level filter when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rotated log files; console-only when absent.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Emit JSON-formatted records instead of the human format.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
            log_dir: None,
            json: false,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Returns the file-writer guard when file logging is enabled.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if config.json {
        Box::new(fmt::layer().json())
    } else {
        Box::new(fmt::layer())
    };

    let (file, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = rolling::daily(dir, "driftfs.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if config.json {
                Box::new(fmt::layer().json().with_writer(writer))
            } else {
                Box::new(fmt::layer().with_writer(writer))
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    guard
}
