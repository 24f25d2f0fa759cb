//! Logger setup for binaries.
//!
//! The library only emits through the `log` facade; a binary calls
//! `init_logging` once and keeps the returned handle alive.

use flexi_logger::{opt_format, FlexiLoggerError, Logger, LoggerHandle};

/// Start a stderr logger. `RUST_LOG` wins over `fallback` (e.g. `"info"`
/// or `"duel_draft=debug"`).
pub fn init_logging(fallback: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(fallback)?
        .log_to_stderr()
        .format(opt_format)
        .start()
}
