use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the runtime around the game: terminal, score file, logging.
///
/// Game rules themselves never fail; ignored inputs are dropped silently.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("score file {} could not be accessed: {source}", .path.display())]
    ScoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("score file {} is malformed: {source}", .path.display())]
    ScoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
