use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{validate_key, KeyValueStore, StorageError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a uniquely named temporary file in the same directory and
/// are renamed into place, so a reader never observes a half-written value
/// and concurrent writers to one key each succeed; the last rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        fs::create_dir_all(&self.dir)?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(self.path(key)).map_err(|e| e.error)?;

        debug!(key = key, bytes = value.len(), "Wrote storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("cache")).unwrap();

        assert_eq!(store.get("completed_daily_plans").unwrap(), None);
        store.set("completed_daily_plans", r#"{"1":[1,2]}"#).unwrap();
        assert_eq!(
            store.get("completed_daily_plans").unwrap().as_deref(),
            Some(r#"{"1":[1,2]}"#)
        );
        assert!(store.dir().join("completed_daily_plans.json").exists());
        assert_eq!(fs::read_dir(store.dir()).unwrap().count(), 1);
    }

    #[test]
    fn test_concurrent_writers_to_one_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        let values = [r#"[{"writer":"a"}]"#, r#"[{"writer":"b"}]"#];

        for _ in 0..50 {
            std::thread::scope(|s| {
                let handles: Vec<_> = values
                    .iter()
                    .map(|v| {
                        let store = &store;
                        s.spawn(move || store.set("user_roadmaps", v))
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap().unwrap();
                }
            });

            let stored = store.get("user_roadmaps").unwrap().unwrap();
            assert!(values.contains(&stored.as_str()), "torn value: {}", stored);
        }
        assert_eq!(fs::read_dir(store.dir()).unwrap().count(), 1);
    }

    #[test]
    fn test_overwrite_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("user_roadmaps", "[1]").unwrap();
        store.set("user_roadmaps", "[]").unwrap();
        assert_eq!(store.get("user_roadmaps").unwrap().as_deref(), Some("[]"));

        store.remove("user_roadmaps").unwrap();
        assert_eq!(store.get("user_roadmaps").unwrap(), None);
        // Removing twice is fine
        store.remove("user_roadmaps").unwrap();
    }

    #[test]
    fn test_second_handle_sees_writes() {
        let dir = tempfile::tempdir().unwrap();
        let a = FileStore::new(dir.path().to_path_buf()).unwrap();
        let b = FileStore::new(dir.path().to_path_buf()).unwrap();

        a.set("user_roadmaps", "[]").unwrap();
        assert_eq!(b.get("user_roadmaps").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert!(matches!(
            store.get("../session"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
