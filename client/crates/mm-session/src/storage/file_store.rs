use crate::{KeyValueStore, StorageError, StorageErrorResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

const KEY_SUFFIX: &str = "json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value store keeping one file per key in a directory.
///
/// Writes go through a temp file, fsync and rename, so a crash mid-write
/// leaves either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageErrorResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::invalid_key(key));
        }

        Ok(self.dir.join(format!("{key}.{KEY_SUFFIX}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageErrorResult<Option<String>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::file_read(path, e))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageErrorResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.{KEY_SUFFIX}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Stored '{key}' at {final_path:?}");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageErrorResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }

    fn clear(&mut self) -> StorageErrorResult<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        let entries =
            fs::read_dir(&self.dir).map_err(|e| StorageError::file_read(self.dir.clone(), e))?;

        for entry in entries {
            let path = entry
                .map_err(|e| StorageError::file_read(self.dir.clone(), e))?
                .path();
            if is_owned(&path) {
                fs::remove_file(&path).map_err(|e| StorageError::file_remove(path.clone(), e))?;
            }
        }

        Ok(())
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.<timestamp>`.
    fn quarantine(&mut self, key: &str) -> StorageErrorResult<()> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{key}.{KEY_SUFFIX}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .map_err(|e| StorageError::atomic_rename(path, backup_path.clone(), e))?;

        warn!("Backed up unreadable '{key}' to {backup_path:?}");
        Ok(())
    }
}

/// Key files plus their quarantined and in-flight siblings.
fn is_owned(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let marker = format!(".{KEY_SUFFIX}");
    name.ends_with(&marker)
        || name.contains(&format!("{marker}.corrupted."))
        || name.contains(&format!("{marker}.tmp."))
}
