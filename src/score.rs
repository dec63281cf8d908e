use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Best-score persistence across sessions; disabled stores do nothing.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: Option<PathBuf>,
}

impl ScoreStore {
    /// Store backed by the platform data directory.
    #[must_use]
    pub fn platform_default() -> Self {
        Self::at(scores_path())
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Store that never touches the filesystem.
    #[must_use]
    pub fn disabled() -> Self {
        Self { path: None }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the best score.
    ///
    /// Returns `Ok(0)` when disabled or when the file does not yet exist.
    /// Returns `Err` when the file exists but cannot be read or parsed, so the
    /// caller can surface a warning before entering raw terminal mode.
    pub fn load(&self) -> Result<u32> {
        match &self.path {
            Some(path) => load_best_score_from_path(path),
            None => Ok(0),
        }
    }

    /// Saves the best score, creating parent directories when needed.
    pub fn save(&self, score: u32) -> Result<()> {
        match &self.path {
            Some(path) => save_best_score_to_path(path, score),
            None => Ok(()),
        }
    }
}

fn load_best_score_from_path(path: &Path) -> Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(source) => {
            return Err(Error::ScoreFile {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.best_score)
        .map_err(|source| Error::ScoreFormat {
            path: path.to_path_buf(),
            source,
        })
}

fn save_best_score_to_path(path: &Path, score: u32) -> Result<()> {
    let file_error = |source: io::Error| Error::ScoreFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(file_error)?;
    }

    let payload = ScoreFile { best_score: score };
    let json = serde_json::to_string_pretty(&payload).map_err(|source| Error::ScoreFormat {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(file_error)
}
