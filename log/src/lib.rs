//! Logging setup for the diffable tools: a log file plus optional stdout.
//!
//! Logs always go to a file at `warn` level, or at the level asked for through the
//! environment. Stdout logging is enabled when `DIFFABLE_LOG` or `RUST_LOG` is set,
//! or in debug builds.
//!
//! ## Environment Variables
//!
//! 1. **`DIFFABLE_LOG`** (highest priority): a bare level applies to every diffable
//!    crate, anything else is used as a filter directive
//! 2. **`RUST_LOG`**: standard tracing filter
//! 3. **Default**: `warn` globally, `info` for diffable crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/diffable/logs/diffable-<pid>.log`
//! - macOS: `~/Library/Application Support/diffable/logs/diffable-12345.log`
//! - Linux: `~/.local/share/diffable/logs/diffable-12345.log`
//!
//! Override with `--log-file <path>` or `DIFFABLE_LOG_FILE`.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CRATES: [&str; 3] = ["diffable", "diffable_bin", "diffable_log"];

/// Returned from [`init`]; hold it for as long as logs should reach the file.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default, Clone)]
pub struct LogConfig {
    /// A file, or a directory to put the default file name in.
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// Filters follow `DIFFABLE_LOG` > `RUST_LOG` > defaults, see the module docs.
/// Dropping the returned [`LogGuard`] flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, BoxError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_file_filter());

    let stdout_layer = stdout_enabled().then(|| fmt::layer().with_filter(create_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Stdout-only logging for tests.
///
/// Safe to call from every test: a second initialization is ignored.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

fn stdout_enabled() -> bool {
    env::var("DIFFABLE_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions)
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("diffable-{}.log", std::process::id());

    match override_path.or_else(|| env::var_os("DIFFABLE_LOG_FILE").map(PathBuf::from)) {
        Some(path) if path.extension().is_some() => {
            let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or(filename);
            (dir, name)
        },
        Some(dir) => (dir, filename),
        None => {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("diffable")
                .join("logs");
            (dir, filename)
        },
    }
}

/// File filter: whatever the environment asks for, `warn` otherwise.
fn create_file_filter() -> EnvFilter {
    if env::var("DIFFABLE_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    EnvFilter::new("warn")
}

fn create_filter() -> EnvFilter {
    if let Ok(level) = env::var("DIFFABLE_LOG") {
        return EnvFilter::new(expand_diffable_log(&level));
    }
    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }
    EnvFilter::new(expand_diffable_log("info"))
}

/// Expand a bare level such as `debug` to every diffable crate.
///
/// Values that already look like directives (`diffable=trace,diffable_bin=info`) are
/// used as they are.
fn expand_diffable_log(value: &str) -> String {
    if value.contains(['=', ':', ',']) {
        return value.to_string();
    }
    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={value}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_expands_to_crates() {
        assert_eq!(
            expand_diffable_log("debug"),
            "warn,diffable=debug,diffable_bin=debug,diffable_log=debug"
        );
        assert_eq!(expand_diffable_log("diffable=trace"), "diffable=trace");
    }

    #[test]
    fn log_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.log");
        assert_eq!(
            resolve_log_path(Some(file)),
            (dir.path().to_path_buf(), "session.log".to_string())
        );

        let (resolved, name) = resolve_log_path(Some(dir.path().to_path_buf()));
        assert_eq!(resolved, dir.path());
        assert!(name.starts_with("diffable-") && name.ends_with(".log"));
    }
}
