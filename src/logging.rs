//! Tracing/logging initialization.
//!
//! The terminal belongs to the UI, so logs can only go to a file.  Without
//! `--log-file` no subscriber is installed and every `tracing` macro is a
//! no-op.
//!
//! Filter directives come from `STOREFRONT_LOG`, then `RUST_LOG`, and default
//! to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives, e.g. `storefront=debug`.
pub const LOG_ENV: &str = "STOREFRONT_LOG";

/// Build the filter from the environment.
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `log_file` if given.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn unwritable_log_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("storefront.log");

        let err = init(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
