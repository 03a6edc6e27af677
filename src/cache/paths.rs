// Cache path utilities.
// Locates the cache directory and maps request keys to entry files.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use md5::{Digest, Md5};

/// Get the base cache directory (~/.cache/comics-catalog on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "comics-catalog").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// File name for a cache entry. Keys carry full URLs, so they are digested
/// into a fixed-length name; the entry itself records the original key.
pub fn entry_file_name(key: &str) -> String {
    format!("{}.json", hex::encode(Md5::digest(key.as_bytes())))
}

/// Path to the entry file for `key` inside `dir`.
pub fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(entry_file_name(key))
}
