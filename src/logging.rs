//! File logging for the terminal binary.
//!
//! The game owns the terminal while running, so log records go to a rotating
//! file instead of stderr. The level comes from `RUST_LOG` (default `info`).

use std::path::Path;

use anyhow::Result;
use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

/// Start logging into `dir`. Keep the returned handle alive for the whole run.
pub fn setup_logging(dir: &Path) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(dir).basename("tui-2048"))
        .format(opt_format)
        .rotate(
            Criterion::Size(1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()?;
    Ok(handle)
}
