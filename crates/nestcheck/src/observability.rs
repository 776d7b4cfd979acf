//! Logging and tracing bootstrap.
//!
//! Console logging goes to stderr through an env-filter derived from the
//! CLI flags, the configured default level, and `RUST_LOG`. Optional JSONL
//! file logging is enabled by `NESTCHECK_LOG_PATH`, `NESTCHECK_LOG_DIR`, or
//! the `log_dir` config key; the returned guard must be held for the
//! process lifetime so the non-blocking writer flushes on exit.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where file logs should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`NESTCHECK_LOG_PATH`).
    pub log_path: Option<PathBuf>,
    /// Log directory (`NESTCHECK_LOG_DIR` or the `log_dir` config key).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as the lowest-precedence fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("NESTCHECK_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("NESTCHECK_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the console env filter.
///
/// An explicit `RUST_LOG` wins outright. Otherwise `--quiet` forces
/// errors-only and each `-v` raises the level above the configured default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber.
///
/// Returns the file writer's guard when file logging is active; dropping it
/// stops the background flush thread.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {e}"))?;

    Ok(guard)
}

/// Open the log file as a non-blocking writer, creating parent directories
/// as needed. Returns `None` when no file destination is configured.
fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<(NonBlocking, WorkerGuard)>> {
    let path = match (&config.log_path, &config.log_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join("nestcheck.jsonl"),
        (None, None) => return Ok(None),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    Ok(Some((writer, guard)))
}
