//! Tracing setup. The terminal UI logs to a rolling file; `--print` logs to
//! stderr. `RUST_LOG` overrides the default filter.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,menu_board=debug";

fn env_filter() -> Result<EnvFilter> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    EnvFilter::try_new(&level).with_context(|| format!("invalid log filter '{level}'"))
}

/// Log to a daily-rolling file; the terminal belongs to the UI while it runs.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_file_logger(log_dir: &Path) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("menu-board")
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("failed to open log directory {}", log_dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}

/// Log to stderr, used for one-shot printing where stdout carries the menu.
pub fn init_stderr_logger() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("failed to install log subscriber")
}
