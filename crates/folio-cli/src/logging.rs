use std::env;
use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIO_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the filter from a `FOLIO_LOG` value; a missing or invalid value means `info`.
fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn env_filter() -> EnvFilter {
    filter_from(env::var(LOG_ENV).ok().as_deref())
}

/// One-shot commands log to stderr so stdout stays clean for output and JSON.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// The TUI owns the terminal, so interactive sessions log to `<dir>/folio.log`.
/// The returned guard flushes the writer when dropped.
pub fn init_file(dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(guard)
}
