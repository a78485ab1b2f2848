use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Nothing is written. Used by the TUI, which owns the terminal.
    Off,
}

/// Installs the global subscriber. Keep the returned guard alive until exit so
/// buffered file output is flushed.
pub fn init(level: &str, target: LogTarget<'_>) -> Result<Option<WorkerGuard>> {
    let filter = |level: &str| {
        EnvFilter::try_new(level).with_context(|| format!("invalid log filter '{level}'"))
    };

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter(level)?)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("log path {} has no file name", path.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter(level)?)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        LogTarget::Off => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("off")?)
                .with_writer(std::io::sink)
                .init();
            Ok(None)
        }
    }
}
