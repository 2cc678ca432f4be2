use crate::key_value_store::validate_key;
use crate::{KeyValueStore, Result as SessionResult, SessionError};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Slots stored as `<dir>/<key>.json`, one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> SessionResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| SessionError::invalid_encoding(path, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No record at {path:?}");
                Ok(None)
            }
            Err(e) => Err(SessionError::file_read(path, e)),
        }
    }

    /// Writes via temp file, fsync and rename so a crash mid-write never
    /// leaves a half-written record behind.
    fn write(&self, key: &str, value: &str) -> SessionResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote record {final_path:?}");
        Ok(())
    }

    fn delete(&self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed record {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_write(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    fn quarantine(&self, key: &str) -> SessionResult<Option<PathBuf>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{key}.json.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(|e| SessionError::backup_failed(path, e))?;

        warn!("Backed up corrupted record to {backup_path:?}");
        Ok(Some(backup_path))
    }
}
