// Manages locked, atomic file writes for the config and the generated
// calendar files.
use anyhow::Result;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LocalStorage;

impl LocalStorage {
    fn get_lock_path(path: &Path) -> PathBuf {
        path.with_extension("lock")
    }

    /// Runs `f` while holding an exclusive lock on a sidecar lock file, so
    /// concurrent invocations never interleave writes to the same path.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        if let Some(parent) = lock_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a .tmp file then rename.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Saves a serialized calendar document. An empty string means the source
    /// document produced nothing; no file is written and `false` comes back.
    pub fn write_calendar(path: &Path, ics: &str) -> Result<bool> {
        if ics.is_empty() {
            return Ok(false);
        }
        Self::with_lock(path, || Self::atomic_write(path, ics))?;
        Ok(true)
    }
}
