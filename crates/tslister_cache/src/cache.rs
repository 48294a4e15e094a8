//! The content-addressed cache of engine run results.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tslister_common::Fingerprint;

use crate::error::CacheError;

/// File extension of cache entries.
const ENTRY_EXT: &str = "json";

/// Default cap on the number of entries kept in the cache directory.
pub const DEFAULT_MAX_ENTRIES: usize = 99;

/// Fingerprint-keyed cache of engine run results.
///
/// An entry maps the fingerprint of an assembled script to the JSON document
/// the engine produced for it. Entries are never rewritten: content identity
/// is guaranteed by the fingerprint, so existence is the only validation a
/// hit needs. Reads degrade to misses on any failure; writes are
/// best-effort and purge old entries so the directory stays bounded.
pub struct ScriptCache {
    /// Flat directory holding the `<fingerprint>.json` entries.
    cache_dir: PathBuf,

    /// Entries older than this are purged on store. Zero disables age-based
    /// purging; the entry cap alone drives eviction.
    max_age: Duration,

    /// Upper bound on entries kept after a store, oldest evicted first.
    max_entries: usize,
}

impl ScriptCache {
    /// Creates a cache over `cache_dir` with the default purge policy
    /// (no age limit, [`DEFAULT_MAX_ENTRIES`] entry cap).
    pub fn new(cache_dir: &Path) -> Self {
        Self::with_policy(cache_dir, Duration::ZERO, DEFAULT_MAX_ENTRIES)
    }

    /// Creates a cache with an explicit purge policy.
    pub fn with_policy(cache_dir: &Path, max_age: Duration, max_entries: usize) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            max_age,
            max_entries,
        }
    }

    /// Returns the entry path for a fingerprint.
    pub fn entry_path(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.cache_dir.join(format!("{fingerprint}.{ENTRY_EXT}"))
    }

    /// Looks up the cached JSON document for `fingerprint`.
    ///
    /// Returns `None` on any failure (missing entry, unreadable file); a
    /// cache read problem is always a miss, never an error. The returned
    /// text is not validated here; the caller decodes it and treats a decode
    /// failure as a miss too.
    pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<String> {
        let path = self.entry_path(fingerprint);
        match std::fs::read_to_string(&path) {
            Ok(json) => {
                tracing::debug!(%fingerprint, "cache hit");
                Some(json)
            }
            Err(_) => {
                tracing::debug!(%fingerprint, "cache miss");
                None
            }
        }
    }

    /// Stores the JSON document for `fingerprint`, best-effort.
    ///
    /// Creates the cache directory if absent, writes the entry atomically
    /// (temp file + rename, so racing writers of the same fingerprint leave
    /// a valid file), then purges per the configured policy. A failure is
    /// logged and swallowed; the caller keeps its freshly computed result
    /// either way.
    pub fn store(&self, fingerprint: &Fingerprint, json: &str) {
        if let Err(e) = self.try_store(fingerprint, json) {
            tracing::warn!(%fingerprint, error = %e, "failed to write cache entry");
        }
    }

    fn try_store(&self, fingerprint: &Fingerprint, json: &str) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.cache_dir).map_err(|e| CacheError::Io {
            path: self.cache_dir.clone(),
            source: e,
        })?;

        let path = self.entry_path(fingerprint);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.cache_dir).map_err(|e| {
            CacheError::Io {
                path: self.cache_dir.clone(),
                source: e,
            }
        })?;
        tmp.write_all(json.as_bytes()).map_err(|e| CacheError::Io {
            path: tmp.path().to_path_buf(),
            source: e,
        })?;
        tmp.persist(&path).map_err(|e| CacheError::Io {
            path: path.clone(),
            source: e.error,
        })?;

        // Purging after the write makes the entry cap a true upper bound;
        // the fresh entry is the newest, so oldest-first eviction spares it.
        self.purge();
        Ok(())
    }

    /// Applies the purge policy: drop entries older than `max_age` (when
    /// nonzero), then evict oldest entries until at most `max_entries`
    /// remain. Individual deletions are best-effort; an entry a concurrent
    /// reader holds open just survives until the next purge.
    ///
    /// Returns the number of entries removed.
    pub fn purge(&self) -> usize {
        let mut entries = self.scan_entries();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut removed = 0;
        if self.max_age > Duration::ZERO {
            let now = SystemTime::now();
            entries.retain(|(path, modified)| {
                let expired = now
                    .duration_since(*modified)
                    .map(|age| age > self.max_age)
                    .unwrap_or(false);
                if expired && std::fs::remove_file(path).is_ok() {
                    removed += 1;
                    return false;
                }
                true
            });
        }

        while entries.len() > self.max_entries {
            let (path, _) = entries.remove(0);
            if std::fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    /// Removes every entry from the cache directory.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&self) -> Result<usize, CacheError> {
        let mut removed = 0;
        for (path, _) in self.scan_entries() {
            std::fs::remove_file(&path).map_err(|e| CacheError::Io { path, source: e })?;
            removed += 1;
        }
        Ok(removed)
    }

    /// Enumerates cache entries as `(path, modified)` pairs.
    ///
    /// Fail-safe: an unreadable directory yields an empty list, and entries
    /// without a readable modification time sort as oldest.
    fn scan_entries(&self) -> Vec<(PathBuf, SystemTime)> {
        let Ok(dir) = std::fs::read_dir(&self.cache_dir) else {
            return Vec::new();
        };
        dir.filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXT) {
                return None;
            }
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            Some((path, modified))
        })
        .collect()
    }
}
