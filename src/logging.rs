//! Log file setup.
//!
//! The TUI owns stdout, so logs go to `triluna.log` in the data directory.
//! The filter comes from `RUST_LOG` and defaults to `triluna=info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::GameError;

pub const LOG_FILE: &str = "triluna.log";
pub const DEFAULT_FILTER: &str = "triluna=info";

/// Filter from `RUST_LOG`, or [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, appending to `data_dir/triluna.log`.
///
/// Returns the log path. Calling it twice keeps the first subscriber.
pub fn init(data_dir: &Path) -> Result<PathBuf, GameError> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data");
        let path = init(&nested).unwrap();
        assert_eq!(path, nested.join(LOG_FILE));
        assert!(path.exists());
    }
}
