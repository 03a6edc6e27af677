// Cache key derivation.
// Turns a request URL and caller parameters into a stable, human-readable key.

use std::fmt;

use super::types::Params;

/// Identity of a logical request: the URL plus its sorted, encoded parameters.
///
/// Built from caller-supplied parameters only. Authentication fields are
/// added later, so requests made at different times share one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn build(url: &str, params: &Params) -> Self {
        let mut key = url.to_string();
        if !params.is_empty() {
            key.push('?');
            key.push_str(&params.encode());
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
