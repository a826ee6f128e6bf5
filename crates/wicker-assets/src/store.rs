//! Persistent asset cache storage.
//!
//! An [`AssetStore`] is a named key→bytes cache persisted on disk, shared by
//! every resolver in the process. It implements nothing beyond `put` and
//! `lookup`: there is no eviction, expiry, or versioning, and a
//! cache hit is returned verbatim regardless of staleness. Assets are
//! treated as immutable at their key - content that changes must change its
//! key.
//!
//! Writes are unsynchronized. The only writers are resolvers storing the
//! bytes they just fetched for the same key, so last-write-wins is an
//! acceptable outcome.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::error::{Error, Result};

/// A named, disk-persisted key→bytes cache.
///
/// Stores are rooted under the platform cache directory (or an explicit
/// directory via [`open_in`](Self::open_in)); each store name maps to its
/// own subdirectory, and keys are hashed to filenames.
///
/// # Example
///
/// ```no_run
/// use wicker_assets::AssetStore;
///
/// let store = AssetStore::open("icons")?;
/// store.put("https://assets.example/sun.svg", b"<svg/>")?;
/// assert!(store.lookup("https://assets.example/sun.svg")?.is_some());
/// # Ok::<(), wicker_assets::Error>(())
/// ```
#[derive(Debug)]
pub struct AssetStore {
    name: String,
    dir: PathBuf,
}

impl AssetStore {
    /// Open (creating if needed) a named store under the platform cache
    /// directory.
    pub fn open(name: &str) -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "wicker").ok_or_else(|| {
            Error::NoCacheDir {
                name: name.to_string(),
            }
        })?;
        Self::open_in(dirs.cache_dir(), name)
    }

    /// Open (creating if needed) a named store under an explicit root
    /// directory.
    pub fn open_in(root: impl AsRef<Path>, name: &str) -> Result<Self> {
        let dir = root.as_ref().join(name);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        tracing::debug!(target: "wicker_assets::store", store = %name, dir = %dir.display(), "opened asset store");
        Ok(Self {
            name: name.to_string(),
            dir,
        })
    }

    /// The store's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store bytes under a key, replacing any previous entry.
    pub fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.entry_path(key);
        fs::write(&path, bytes).map_err(|e| Error::io(&path, e))?;
        tracing::trace!(
            target: "wicker_assets::store",
            store = %self.name,
            key = %key,
            len = bytes.len(),
            "stored asset"
        );
        Ok(())
    }

    /// Look up the bytes stored under a key.
    ///
    /// A hit is returned verbatim; absence is `Ok(None)`.
    pub fn lookup(&self, key: &str) -> Result<Option<Bytes>> {
        let path = self.entry_path(key);
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::trace!(
                    target: "wicker_assets::store",
                    store = %self.name,
                    key = %key,
                    len = bytes.len(),
                    "cache hit"
                );
                Ok(Some(Bytes::from(bytes)))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::io(path, err)),
        }
    }

    /// Keys are hashed so arbitrary locator strings map to valid filenames.
    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = blake3::hash(key.as_bytes());
        self.dir.join(digest.to_hex().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, AssetStore) {
        let root = tempfile::tempdir().expect("tempdir");
        let store = AssetStore::open_in(root.path(), "icons").expect("open store");
        (root, store)
    }

    #[test]
    fn test_lookup_miss() {
        let (_root, store) = temp_store();
        assert_eq!(store.lookup("https://assets.example/sun.svg").unwrap(), None);
    }

    #[test]
    fn test_put_then_lookup() {
        let (_root, store) = temp_store();
        store.put("https://assets.example/sun.svg", b"sun-bytes").unwrap();

        let hit = store.lookup("https://assets.example/sun.svg").unwrap();
        assert_eq!(hit, Some(Bytes::from_static(b"sun-bytes")));
    }

    #[test]
    fn test_put_overwrites() {
        let (_root, store) = temp_store();
        store.put("key", b"first").unwrap();
        store.put("key", b"second").unwrap();

        assert_eq!(store.lookup("key").unwrap(), Some(Bytes::from_static(b"second")));
    }

    #[test]
    fn test_keys_do_not_collide() {
        let (_root, store) = temp_store();
        store.put("https://a.example/icon.svg", b"a").unwrap();
        store.put("https://b.example/icon.svg", b"b").unwrap();

        assert_eq!(
            store.lookup("https://a.example/icon.svg").unwrap(),
            Some(Bytes::from_static(b"a"))
        );
        assert_eq!(
            store.lookup("https://b.example/icon.svg").unwrap(),
            Some(Bytes::from_static(b"b"))
        );
    }

    #[test]
    fn test_stores_are_isolated_by_name() {
        let root = tempfile::tempdir().expect("tempdir");
        let icons = AssetStore::open_in(root.path(), "icons").unwrap();
        let fonts = AssetStore::open_in(root.path(), "fonts").unwrap();

        icons.put("key", b"icon").unwrap();
        assert_eq!(fonts.lookup("key").unwrap(), None);
    }

    #[test]
    fn test_persists_across_reopen() {
        let root = tempfile::tempdir().expect("tempdir");
        {
            let store = AssetStore::open_in(root.path(), "icons").unwrap();
            store.put("key", b"persisted").unwrap();
        }
        let reopened = AssetStore::open_in(root.path(), "icons").unwrap();
        assert_eq!(
            reopened.lookup("key").unwrap(),
            Some(Bytes::from_static(b"persisted"))
        );
    }

}
