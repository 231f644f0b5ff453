//! Logging and tracing setup.
//!
//! Two layers share one filter:
//!
//! - a human-readable layer on stderr (stdout stays clean for report output
//!   and the MCP stdio transport)
//! - an optional JSONL file layer, written through a non-blocking appender
//!
//! The file layer is enabled by `SEO_SCORE_LOG_PATH` (exact file),
//! `SEO_SCORE_LOG_DIR` (daily-rolling files in that directory), or the
//! `log_dir` config key, in that order of precedence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable naming an exact log file.
pub const LOG_PATH_ENV: &str = "SEO_SCORE_LOG_PATH";

/// Environment variable naming a log directory.
pub const LOG_DIR_ENV: &str = "SEO_SCORE_LOG_DIR";

/// File name prefix for rolling logs.
const LOG_FILE_PREFIX: &str = "seo-score.jsonl";

/// Where (if anywhere) to write the JSONL log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file; never rotated.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to the config file's `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = non_empty_env(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = non_empty_env(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    fn destination(&self) -> Option<LogDestination> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();
            let file_name = path.file_name()?.to_os_string().into();
            return Some(LogDestination::File { dir, file_name });
        }
        self.log_dir
            .clone()
            .map(|dir| LogDestination::Rolling { dir })
    }
}

/// Resolved JSONL log target.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogDestination {
    /// One fixed file.
    File { dir: PathBuf, file_name: PathBuf },
    /// Daily-rolling files in a directory.
    Rolling { dir: PathBuf },
}

impl LogDestination {
    fn dir(&self) -> &Path {
        match self {
            Self::File { dir, .. } | Self::Rolling { dir } => dir,
        }
    }

    fn appender(&self) -> RollingFileAppender {
        match self {
            Self::File { dir, file_name } => rolling::never(dir, file_name),
            Self::Rolling { dir } => rolling::daily(dir, LOG_FILE_PREFIX),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Build the log filter.
///
/// `-q` forces `error`; `-v` forces `debug`; `-vv` and up force `trace`.
/// Otherwise `RUST_LOG` applies if set, else `default_level`.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let forced = if quiet {
        Some("error")
    } else {
        match verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    };

    match forced {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is enabled; keep it
/// alive until exit so buffered lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.destination() {
        Some(destination) => {
            let dir = destination.dir();
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(destination.appender());
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(guard)
}
