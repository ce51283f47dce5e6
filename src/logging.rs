//! Logging setup.
//!
//! The game owns the terminal, so log output cannot go to stderr. Logging is
//! off unless `FLAPPY_LOG` names a file; records are appended there with an
//! `info` default that `RUST_LOG` can override.

use crate::error::GameError;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Environment variable holding the log file path.
pub const LOG_FILE_VAR: &str = "FLAPPY_LOG";

/// Install the global logger if `FLAPPY_LOG` is set.
/// Returns the log file path when logging was enabled.
pub fn init() -> Result<Option<PathBuf>, GameError> {
    let Some(path) = std::env::var_os(LOG_FILE_VAR).map(PathBuf::from) else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| GameError::LogFile {
            path: path.clone(),
            source,
        })?;

    // A logger may already be installed (tests); keep the existing one.
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();

    Ok(Some(path))
}
