//! File-backed store - one file per key.

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};
use crate::storage::BackingStore;

/// A directory-backed [`BackingStore`].
///
/// # Layout
/// Each key is stored as one file directly inside the store directory, with
/// the key as the file name and the value as the file contents:
/// ```text
/// store_dir/
/// ├── user:1        ← value of key "user:1"
/// ├── user:2
/// └── session-abc
/// ```
///
/// Keys must be usable as file names: non-empty, no path separators, no NUL,
/// and not `.`/`..`. Anything else is rejected with `Error::InvalidKey`
/// before touching the filesystem.
///
/// # Durability
/// Every write is followed by `fsync()`, so `set` is durable by the time it
/// returns `Ok` as the store contract requires.
///
/// # Thread Safety
/// `FileStore` is **single-threaded**; the caller serializes access, the
/// same way a cache engine serializes access to its store.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        log::debug!("file store opened at {}", dir.display());

        Ok(Self { dir })
    }

    /// The directory this store lives in.
    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Map a key to its file path, rejecting keys that can't be file names.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let escapes = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\', '\0']);
        if escapes {
            return Err(Error::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(key))
    }
}

impl BackingStore for FileStore {
    fn get(&mut self, key: &str) -> Result<String> {
        let path = self.key_path(key)?;

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(key.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut value = String::new();
        file.read_to_string(&mut value)?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        let mut file = File::create(&path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?; // fsync for durability

        Ok(())
    }
}
