// File-backed response cache.
// Keeps one JSON file per request key, with optional expiry and atomic writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{CatalogError, Result};

use super::ResponseCache;
use super::paths::{cache_dir, entry_path};

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// The request key this entry was stored under.
    pub key: String,
    /// The cached payload.
    pub data: T,
    /// When the payload was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(key: impl Into<String>, data: T) -> Self {
        Self {
            key: key.into(),
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check if this entry is older than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed > ttl
    }
}

/// Cache that persists payloads under a directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
    expiry: Option<Duration>,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            expiry: None,
        }
    }

    /// Cache rooted at the platform cache directory.
    pub fn open_default() -> Result<Self> {
        cache_dir()
            .map(Self::new)
            .ok_or_else(|| CatalogError::Cache("no cache directory available".to_string()))
    }

    /// Treat entries older than `ttl` as absent.
    pub fn with_expiry(mut self, ttl: Duration) -> Self {
        self.expiry = Some(ttl);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Delete every cached entry.
    pub fn clear(&self) -> Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir).map_err(|e| fault(&self.dir, e))?;
        }
        Ok(())
    }
}

impl ResponseCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = entry_path(&self.dir, key);
        let Some(cached) = read_cached(&path)? else {
            return Ok(None);
        };

        if cached.key != key {
            trace!(key, path = %path.display(), "Entry belongs to another key");
            return Ok(None);
        }

        if let Some(ttl) = self.expiry {
            if cached.is_expired(ttl) {
                trace!(key, "Entry expired");
                fs::remove_file(&path).map_err(|e| fault(&path, e))?;
                return Ok(None);
            }
        }

        Ok(Some(cached.data))
    }

    fn store(&self, key: &str, value: &Value) -> Result<()> {
        let path = entry_path(&self.dir, key);
        write_cached(&path, &CachedData::new(key, value))
    }
}

fn read_cached(path: &Path) -> Result<Option<CachedData<Value>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| fault(path, e))?;
    let cached = serde_json::from_str(&contents).map_err(|e| fault(path, e))?;
    Ok(Some(cached))
}

fn write_cached(path: &Path, cached: &CachedData<&Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fault(parent, e))?;
    }

    let json = serde_json::to_string(cached).map_err(|e| fault(path, e))?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| fault(&temp_path, e))?;
    file.write_all(json.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| fault(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| fault(path, e))?;

    Ok(())
}

fn fault(path: &Path, err: impl std::fmt::Display) -> CatalogError {
    CatalogError::Cache(format!("{}: {}", path.display(), err))
}
