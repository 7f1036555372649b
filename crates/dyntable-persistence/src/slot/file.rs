//! Directory-backed slot.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::DurableSlot;
use crate::error::{PersistenceError, Result};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temp file that is synced and then renamed over the target,
/// so an interrupted write leaves the previous snapshot in place.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl DurableSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(value.as_bytes())
            .map_err(|e| PersistenceError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| PersistenceError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_key() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert!(slot.read("tableData").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("nested"));

        slot.write("tableData", "{\"a\":1}").unwrap();
        slot.write("tableData", "{\"a\":2}").unwrap();

        assert_eq!(slot.read("tableData").unwrap().as_deref(), Some("{\"a\":2}"));
        assert!(!dir.path().join("nested/tableData.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let slot = FileSlot::new("/tmp");
        assert!(matches!(
            slot.path_for("../escape"),
            Err(PersistenceError::InvalidKey(_))
        ));
        assert!(matches!(slot.path_for(""), Err(PersistenceError::InvalidKey(_))));
    }
}
