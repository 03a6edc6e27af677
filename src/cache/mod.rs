// Response cache collaborators.
// Stores decoded API payloads keyed by request identity.

pub mod memory;
pub mod paths;
pub mod store;

use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{CatalogError, Result};

pub use memory::MemoryCache;
pub use paths::cache_dir;
pub use store::{CachedData, FileCache};

/// Key-value store for successful response payloads.
///
/// Both operations have default bodies that fail with a cache error, so a
/// collaborator that only provides one of them reports the gap at call time
/// instead of silently acting as a miss.
pub trait ResponseCache {
    /// Look up a payload, returning `None` on a miss.
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let _ = key;
        Err(unsupported("get"))
    }

    /// Store a payload under `key`, replacing any previous entry.
    fn store(&self, key: &str, value: &Value) -> Result<()> {
        let _ = (key, value);
        Err(unsupported("store"))
    }
}

fn unsupported(operation: &str) -> CatalogError {
    CatalogError::Cache(format!(
        "cache object passed in does not support `{}`",
        operation
    ))
}

impl<C: ResponseCache + ?Sized> ResponseCache for Box<C> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn store(&self, key: &str, value: &Value) -> Result<()> {
        (**self).store(key, value)
    }
}

impl<C: ResponseCache + ?Sized> ResponseCache for Rc<C> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn store(&self, key: &str, value: &Value) -> Result<()> {
        (**self).store(key, value)
    }
}

impl<C: ResponseCache + ?Sized> ResponseCache for Arc<C> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn store(&self, key: &str, value: &Value) -> Result<()> {
        (**self).store(key, value)
    }
}
