use std::{
    fmt,
    io::{Error, ErrorKind},
    path::PathBuf,
};

use chrono::NaiveDate;

use crate::{
    config,
    types::{CacheRecord, NamedPhase},
    utils::{self, DATE_FORMAT},
};

#[derive(Debug)]
pub enum CacheError {
    IoError(Error),
}

impl From<Error> for CacheError {
    fn from(err: Error) -> Self {
        CacheError::IoError(err)
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::IoError(e) => write!(f, "phase cache I/O failed: {}", e),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::IoError(e) => Some(e),
        }
    }
}

/// Single-slot cache holding the last resolved `(date, phase)` pair.
///
/// The file holds one line, `<YYYY-MM-DD>,<Phase Name>`, and is replaced
/// whole on every write.
pub struct PhaseCacheManager {
    path: PathBuf,
}

impl PhaseCacheManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses the configured save file (`MOONPHASE_SAVE_FILE` or `~/.moonphase`).
    pub fn from_config() -> Self {
        Self::new(config::save_file())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads the cached record. A missing or unreadable file, or content that
    /// does not parse, is reported as `None`.
    pub async fn load(&self) -> Option<CacheRecord> {
        let content = async_fs::read_to_string(&self.path).await.ok()?;
        parse_record(&content)
    }

    /// Returns the cached phase only if it was recorded for `date`.
    pub async fn lookup(&self, date: NaiveDate) -> Option<NamedPhase> {
        self.load()
            .await
            .filter(|record| record.date == date)
            .map(|record| record.phase)
    }

    /// Removes the cache file. Returns `false` if there was nothing to remove.
    pub async fn clear(&self) -> Result<bool, CacheError> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::IoError(e)),
        }
    }

    pub async fn persist(&self, record: &CacheRecord) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent).await?;
        }

        async_fs::write(&self.path, render_record(record)).await?;
        Ok(())
    }
}

pub fn parse_record(content: &str) -> Option<CacheRecord> {
    let (date, phase) = content.trim().split_once(',')?;
    let date = utils::parse_date(date).ok()?;
    let phase = phase.parse::<NamedPhase>().ok()?;
    Some(CacheRecord { date, phase })
}

pub fn render_record(record: &CacheRecord) -> String {
    format!("{},{}\n", record.date.format(DATE_FORMAT), record.phase)
}
