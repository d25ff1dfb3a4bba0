use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::constants::cache as cache_constants;

/// Response cache TTL: `LEADSHEET_CACHE_TTL_MS` override, else 5 minutes.
pub fn default_cache_ttl() -> Duration {
    Duration::from_millis(
        env::var(cache_constants::CACHE_TTL_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(cache_constants::DEFAULT_CACHE_TTL_MS),
    )
}

fn resolve_key_path(base: &Path, key: &str) -> PathBuf {
    base.join(key.trim_start_matches('/'))
}

/// Read a cached entry. An entry older than `ttl` is removed on the spot and
/// reported absent; freshness comes from the file's modification time.
pub fn read_cache_text(base: &Path, key: &str, ttl: Duration) -> io::Result<Option<String>> {
    let path = resolve_key_path(base, key);
    if !path.exists() {
        return Ok(None);
    }

    if is_expired(&path, ttl) {
        fs::remove_file(&path)?;
        return Ok(None);
    }

    fs::read_to_string(path).map(Some)
}

fn is_expired(path: &Path, ttl: Duration) -> bool {
    let stored_at = match fs::metadata(path).and_then(|meta| meta.modified()) {
        Ok(modified) => modified,
        Err(_) => return true,
    };
    match SystemTime::now().duration_since(stored_at) {
        Ok(elapsed) => elapsed >= ttl,
        // Clock went backwards since the write; the entry is at worst fresh.
        Err(_) => false,
    }
}

/// Store an entry, overwriting any previous value for the key.
pub fn write_cache_text(base: &Path, key: &str, contents: &str) -> io::Result<()> {
    let path = resolve_key_path(base, key);
    ensure_parent_dir(&path)?;
    fs::write(path, contents)
}

/// Remove every cached entry.
pub fn clear_cache(base: &Path) -> io::Result<()> {
    if base.exists() {
        fs::remove_dir_all(base)?;
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
