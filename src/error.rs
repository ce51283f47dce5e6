use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Everything here ends the process; the simulation itself
/// has no failure modes.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to load sprite {}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to open log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
