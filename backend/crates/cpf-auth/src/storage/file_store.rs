use crate::{AuthError, KeyValueStore, Result as AuthResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const FILE_EXTENSION: &str = "json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory-backed store: one `<key>.json` file per key.
///
/// Writes go through a temp file, fsync, and rename so a crash mid-write
/// never leaves a half-written record behind.
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

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> AuthResult<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }

    /// Renames the file backing `key` to `<key>.json.corrupted.<timestamp>`.
    ///
    /// Returns the backup path, or `None` if nothing was stored.
    pub fn backup_corrupted(&self, key: &str) -> AuthResult<Option<PathBuf>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{key}.{FILE_EXTENSION}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .map_err(|e| AuthError::backup_failed(path.clone(), e))?;

        warn!("Backed up corrupted '{key}' to {backup_path:?}");
        Ok(Some(backup_path))
    }

    #[track_caller]
    fn validate_key(key: &str) -> AuthResult<()> {
        if key.is_empty() {
            return Err(AuthError::invalid_key(key, "key cannot be empty"));
        }

        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AuthError::invalid_key(
                key,
                "only ASCII letters, digits, '_' and '-' are allowed",
            ));
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for '{key}' at {path:?}");
                Ok(None)
            }
            Err(e) => Err(AuthError::file_read(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| AuthError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.dir.join(format!(
            "{key}.{FILE_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        debug!("Stored '{key}' at {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> AuthResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed '{key}' at {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::file_remove(path, e)),
        }
    }

    fn quarantine(&self, key: &str) -> AuthResult<()> {
        if let Some(backup) = self.backup_corrupted(key)? {
            info!("Quarantined '{key}' as {backup:?}");
        }
        Ok(())
    }
}
