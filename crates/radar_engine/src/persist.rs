use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use radar_logging::{radar_debug, radar_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory missing or not writable: {0}")]
    StateDir(String),
    #[error("failed to encode storage: {0}")]
    Encode(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the state directory exists; create if missing.
pub fn ensure_state_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::StateDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_state_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

/// String key-value storage kept in one RON file, in the manner of browser local storage.
///
/// Reads never fail: a missing, unreadable, or corrupt file behaves as empty.
pub struct LocalStorage {
    dir: PathBuf,
    filename: String,
}

impl LocalStorage {
    pub const DEFAULT_FILENAME: &'static str = ".radar_storage.ron";

    pub fn new(dir: PathBuf) -> Self {
        Self::with_filename(dir, Self::DEFAULT_FILENAME)
    }

    pub fn with_filename(dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            dir,
            filename: filename.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut items = self.read_all();
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    pub fn remove_item(&self, key: &str) -> Result<(), PersistError> {
        let mut items = self.read_all();
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(err) => {
                radar_warn!("Failed to read storage {:?}: {}", path, err);
                return BTreeMap::new();
            }
        };
        match ron::from_str(&content) {
            Ok(items) => items,
            Err(err) => {
                radar_warn!("Failed to parse storage {:?}: {}", path, err);
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), PersistError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(items, pretty)
            .map_err(|e| PersistError::Encode(e.to_string()))?;
        let path = AtomicFileWriter::new(self.dir.clone()).write(&self.filename, &content)?;
        radar_debug!("Wrote storage {:?}", path);
        Ok(())
    }
}
