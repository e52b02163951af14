use radar_core::{RepoId, StarredIds, StarredStore};
use radar_engine::LocalStorage;
use radar_logging::{radar_debug, radar_error, radar_warn};

/// Storage key holding the JSON array of starred repository ids.
pub(crate) const STARRED_REPOS_KEY: &str = "STARRED_REPOS";

/// Starred-id persistence on top of the file-backed local storage.
pub(crate) struct FileStarredStore {
    storage: LocalStorage,
}

impl FileStarredStore {
    pub(crate) fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }
}

impl StarredStore for FileStarredStore {
    fn load_starred_ids(&self) -> StarredIds {
        let Some(raw) = self.storage.get_item(STARRED_REPOS_KEY) else {
            return StarredIds::new();
        };
        match serde_json::from_str::<Vec<RepoId>>(&raw) {
            Ok(ids) => {
                radar_debug!("Loaded {} starred ids", ids.len());
                ids.into_iter().collect()
            }
            Err(err) => {
                radar_warn!("Ignoring corrupt {} value: {}", STARRED_REPOS_KEY, err);
                StarredIds::new()
            }
        }
    }

    fn save_starred_ids(&self, ids: &StarredIds) {
        let encoded = match serde_json::to_string(ids) {
            Ok(text) => text,
            Err(err) => {
                radar_error!("Failed to encode starred ids: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set_item(STARRED_REPOS_KEY, &encoded) {
            radar_error!(
                "Failed to write starred ids to {:?}: {}",
                self.storage.path(),
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> FileStarredStore {
        FileStarredStore::new(LocalStorage::new(temp.path().to_path_buf()))
    }

    #[test]
    fn missing_storage_loads_empty() {
        let temp = TempDir::new().unwrap();
        assert!(store(&temp).load_starred_ids().is_empty());
    }

    #[test]
    fn saved_ids_are_json_array_under_key() {
        let temp = TempDir::new().unwrap();
        let starred = store(&temp);
        starred.save_starred_ids(&StarredIds::from([30, 4]));

        let storage = LocalStorage::new(temp.path().to_path_buf());
        assert_eq!(storage.get_item(STARRED_REPOS_KEY).as_deref(), Some("[4,30]"));
        assert_eq!(store(&temp).load_starred_ids(), StarredIds::from([4, 30]));
    }

    #[test]
    fn corrupt_value_loads_empty() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().to_path_buf());
        storage.set_item(STARRED_REPOS_KEY, "[1, \"two\"").unwrap();
        assert!(store(&temp).load_starred_ids().is_empty());
    }

    #[test]
    fn unwritable_storage_does_not_panic() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocked");
        fs::write(&blocker, "file, not a directory").unwrap();

        let starred = FileStarredStore::new(LocalStorage::new(blocker));
        starred.save_starred_ids(&StarredIds::from([1]));
        assert!(starred.load_starred_ids().is_empty());
    }
}
