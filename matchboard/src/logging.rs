//! File logger setup.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::paths;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no cache directory available for logs")]
    NoCacheDir,
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Log to `latest.log` in the platform cache directory.
pub fn init(level: LevelFilter) -> Result<PathBuf, LoggingError> {
    let dir = paths::cache_dir().ok_or(LoggingError::NoCacheDir)?;
    init_in(&dir, level)
}

/// Log to `latest.log` in `dir`, rotating any previous one. Returns the path
/// of the new log file.
pub fn init_in(dir: &Path, level: LevelFilter) -> Result<PathBuf, LoggingError> {
    fs::create_dir_all(dir)?;
    paths::rotate_logs(dir);

    let path = dir.join(paths::LATEST_LOG);
    let file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("[logging] writing to {}", path.display());
    Ok(path)
}
