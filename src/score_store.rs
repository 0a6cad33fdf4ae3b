//! High score persistence: one decimal number in `~/.flappy/highscore`.

use crate::constants::{DATA_DIR_NAME, HIGHSCORE_FILE_NAME};
use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Durable storage for the single best score.
pub trait ScoreStore {
    /// Stored high score, or 0 when nothing usable is stored.
    fn read(&self) -> u32;

    /// Store `score` if it beats the stored value. Returns whether it was written.
    fn write(&self, score: u32) -> io::Result<bool>;
}

/// Parse a stored record. Anything but a plain decimal number reads as 0.
pub fn parse_score(text: &str) -> u32 {
    text.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

/// Data directory shared by the score file and the log file (`~/.flappy`).
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;

    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// High score kept as a decimal text file.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Store at `~/.flappy/highscore`.
    pub fn new() -> io::Result<Self> {
        Ok(Self::at(data_dir()?.join(HIGHSCORE_FILE_NAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_score(&text),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!("Could not read {}: {}", self.path.display(), e);
                }
                0
            }
        }
    }

    fn write(&self, score: u32) -> io::Result<bool> {
        if score <= self.read() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, score.to_string())?;
        Ok(true)
    }
}

/// In-process store, used when no home directory is available.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    best: Cell<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            best: Cell::new(score),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> u32 {
        self.best.get()
    }

    fn write(&self, score: u32) -> io::Result<bool> {
        if score <= self.best.get() {
            return Ok(false);
        }
        self.best.set(score);
        Ok(true)
    }
}
