// src/logging.rs
//
// Logging bootstrap for the binary
//
// The library only emits through the `log` facade. A process that wants the
// output calls `init_logging` once and keeps the returned handle alive.
// Messages use a `key=value` layout (`event=... table=... id=...`).

use flexi_logger::{Logger, LoggerHandle};
use log::info;

use crate::error::{AppError, AppResult};

/// Starts a stderr logger driven by `RUST_LOG`, or `default_level` when unset.
///
/// Dropping the returned handle flushes and stops the logger.
pub fn init_logging(default_level: &str) -> AppResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_level)
        .map_err(|err| AppError::config(format!("invalid log level `{default_level}`: {err}")))?
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|err| AppError::config(format!("failed to start logger: {err}")))?;

    info!(
        "event=app_start status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

/// `debug` for debug builds, `info` otherwise
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
