// ABOUTME: Log sink setup: an append-only file written through tracing.
// ABOUTME: The returned guard owns the sink; dropping it flushes and closes the file.

use crate::error::{Error, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`.
///
/// The file is opened in append mode and created (with its directory) if
/// missing. See [`filter_directives`] for level precedence. Keep the guard
/// alive until the process is about to exit.
pub fn init(path: &Path, level: &str, verbose: bool) -> Result<WorkerGuard> {
    let sink_error = |reason: String| Error::LogSink {
        path: path.to_path_buf(),
        reason,
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| sink_error("path has no file name".to_string()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| sink_error(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directives = filter_directives(std::env::var(EnvFilter::DEFAULT_ENV).ok(), level, verbose);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| sink_error(e.to_string()))?;

    Ok(guard)
}

/// Pick the filter directives: a non-empty `RUST_LOG` wins, then `--verbose`,
/// then the configured level.
fn filter_directives(rust_log: Option<String>, level: &str, verbose: bool) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "debug".to_string(),
        _ => level.to_string(),
    }
}

/// Record a run-aborting error.
pub fn fatal(error: &Error) {
    let id = match error {
        Error::Retention(e) if e.is_fatal() => e.image_id(),
        _ => None,
    };
    match id {
        Some(id) => tracing::error!(fatal = true, id = %id, "{}", error),
        None => tracing::error!(fatal = true, "{}", error),
    }
}
