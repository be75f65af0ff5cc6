use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{MemoryError, MemoryResult};
use crate::record::MemoryRecord;

/// File name used when none is given.
pub const DEFAULT_FILE_NAME: &str = "stickman_memory.json";

/// Reads and writes the memory record at a fixed path.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for `file_name` in the directory of the running
    /// executable, falling back to the working directory.
    pub fn beside_executable(file_name: &str) -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Self::new(dir.join(file_name))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record from disk.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn try_load(&self) -> MemoryResult<Option<MemoryRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(MemoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        Ok(Some(MemoryRecord::from_json(&text)?))
    }

    /// Load the record, falling back to the default on any failure.
    pub fn load(&self) -> MemoryRecord {
        match self.try_load() {
            Ok(Some(record)) => {
                log::info!(
                    "Loaded memory from {} ({} windows seen, {} clicks)",
                    self.path.display(),
                    record.windows_seen.len(),
                    record.clicks
                );
                record
            }
            Ok(None) => {
                log::info!("No memory at {}, starting fresh", self.path.display());
                MemoryRecord::default()
            }
            Err(e) => {
                log::warn!("Failed to load memory, resetting: {e}");
                MemoryRecord::default()
            }
        }
    }

    /// Stamp `last_saved` and overwrite the file with pretty-printed JSON.
    pub fn save(&self, record: &mut MemoryRecord, now: f64) -> MemoryResult<()> {
        record.last_saved = Some(now);
        let json = record.to_json_pretty()?;
        fs::write(&self.path, json).map_err(|source| MemoryError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Save, logging instead of returning failures.
    ///
    /// Returns `true` if the record reached disk.
    pub fn flush(&self, record: &mut MemoryRecord, now: f64) -> bool {
        match self.save(record, now) {
            Ok(()) => {
                log::debug!("Saved memory to {}", self.path.display());
                true
            }
            Err(e) => {
                log::warn!("Failed to save memory: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> MemoryStore {
        MemoryStore::new(dir.path().join(DEFAULT_FILE_NAME))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.try_load().unwrap().is_none());
        assert_eq!(store.load(), MemoryRecord::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ \"clicks\": 3, oops").unwrap();

        assert!(store.try_load().is_err());
        assert_eq!(store.load(), MemoryRecord::default());
    }

    #[test]
    fn wrongly_typed_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"clicks": 3, "windows_seen": ["a"]}"#).unwrap();
        assert_eq!(store.load(), MemoryRecord::default());
    }

    #[test]
    fn partial_file_is_backfilled() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"clicks": 9, "windows_seen": {"Editor": 2}}"#).unwrap();

        let record = store.load();
        assert_eq!(record.clicks, 9);
        assert_eq!(record.windows_seen.get("Editor"), 2);
        assert_eq!(record.last_mood, "neutral");
        assert!((record.personality.curiosity - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut record = MemoryRecord::default();
        record.observe_window("Editor");
        record.record_click();
        record.last_mood = "curious".to_string();
        store.save(&mut record, 1234.5).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, record);
        assert_eq!(loaded.last_saved, Some(1234.5));
    }

    #[test]
    fn save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut record = MemoryRecord::default();
        store.save(&mut record, 10.0).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n  \"clicks\": 0,"));
        assert!(text.contains("\"last_saved\": 10.0"));
    }

    #[test]
    fn flush_to_unwritable_path_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::new(dir.path().join("missing").join("memory.json"));
        let mut record = MemoryRecord::default();

        assert!(store.save(&mut record, 1.0).is_err());
        assert!(!store.flush(&mut record, 2.0));
        assert_eq!(record.last_saved, Some(2.0));
    }

    #[test]
    fn beside_executable_uses_file_name() {
        let store = MemoryStore::beside_executable("custom.json");
        assert_eq!(store.path().file_name().unwrap(), "custom.json");
    }
}
