use super::{finish_load, DataStore};
use crate::error::{IbError, Result};
use crate::items::ItemStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = ".ibstorage.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/<file_name>`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(IbError::Io)?;
            }
        }
        Ok(())
    }

    fn remove_previous(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IbError::Io(e)),
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<ItemStore> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no storage file yet, starting empty");
                return Ok(ItemStore::new());
            }
            Err(e) => return Err(IbError::Io(e)),
        };
        let items: ItemStore = serde_json::from_str(&content)
            .map_err(|e| IbError::corrupt(&self.path, e.to_string()))?;
        let items = finish_load(items, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            items = items.items().len(),
            sequence = items.sequence().current(),
            "loaded storage file"
        );
        Ok(items)
    }

    fn save(&mut self, items: &ItemStore) -> Result<()> {
        let content = serde_json::to_string_pretty(items).map_err(IbError::Serialization)?;
        self.ensure_parent()?;
        self.remove_previous()?;
        fs::write(&self.path, content).map_err(IbError::Io)?;

        tracing::debug!(
            path = %self.path.display(),
            items = items.items().len(),
            "saved storage file"
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BucketKey;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path(), DEFAULT_FILE_NAME);
        (dir, store)
    }

    #[test]
    fn load_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        let items = store.load().unwrap();
        assert!(items.items().is_empty());
        assert_eq!(items.sequence().current(), 0);
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_round_trips_items() {
        let (_dir, mut store) = temp_store();
        let mut items = ItemStore::new();
        items.create_item("Buy milk", BucketKey::General).unwrap();
        items.create_item("Ship release", BucketKey::Today).unwrap();
        items.create_item("Read paper", BucketKey::General).unwrap();
        items.toggle_done(2).unwrap();

        store.save(&items).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.items(), items.items());
        assert_eq!(loaded.sequence().current(), 3);
        assert_eq!(loaded.buckets(), items.buckets());
    }

    #[test]
    fn save_replaces_existing_file() {
        let (_dir, mut store) = temp_store();
        let mut items = ItemStore::new();
        items.create_item("First", BucketKey::General).unwrap();
        store.save(&items).unwrap();

        let mut fewer = ItemStore::new();
        fewer.create_item("Only", BucketKey::Today).unwrap();
        store.save(&fewer).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.items().len(), 1);
        assert_eq!(loaded.items()[0].title, "Only");
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(&dir.path().join("nested/deeper"), DEFAULT_FILE_NAME);
        store.save(&ItemStore::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_into_unwritable_location_is_io_error() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let mut store = FileStore::in_dir(&blocker, DEFAULT_FILE_NAME);

        let err = store.save(&ItemStore::new()).unwrap_err();
        assert!(matches!(err, IbError::Io(_)));
    }

    #[test]
    fn garbage_file_is_corrupt_state() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, IbError::CorruptState { .. }));
    }

    #[test]
    fn wrong_shape_is_corrupt_state() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"{"ItemList": [{"Id": "one"}]}"#).unwrap();
        assert!(matches!(store.load(), Err(IbError::CorruptState { .. })));
    }

    #[test]
    fn duplicate_ids_are_corrupt_state() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"{
                "ItemSequence": {"Id": 2},
                "ItemList": [
                    {"Id": 1, "BucketId": 1, "Title": "a", "CreationDate": "2024-01-01T00:00:00Z"},
                    {"Id": 1, "BucketId": 2, "Title": "b", "CreationDate": "2024-01-01T00:00:00Z"}
                ]
            }"#,
        )
        .unwrap();
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("duplicate item id 1"));
    }

    #[test]
    fn loads_files_written_by_earlier_releases() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"ItemSequence":{"Id":4,"Mux":{}},"ItemList":[{"Id":2,"BucketId":2,"Title":"Gym","Description":null,"CreationDate":"2023-06-01T08:00:00.5-03:00","DoneDate":"2023-06-01T19:30:00-03:00"},{"Id":4,"BucketId":1,"Title":"Taxes","Description":null,"CreationDate":"2023-06-02T08:00:00-03:00","DoneDate":null}],"ItemDoneList":null,"BucketList":[{"Id":1,"Name":"renamed"},{"Id":2,"Name":"today"},{"Id":3,"Name":"extra"}]}"#,
        )
        .unwrap();

        let mut items = store.load().unwrap();
        assert_eq!(items.items().len(), 2);
        assert!(items.find_item(2).unwrap().1.is_done());
        // Persisted buckets are ignored in favour of the fixed pair.
        assert_eq!(items.buckets().len(), 2);
        assert_eq!(items.find_bucket_by_key("general").unwrap().id, 1);
        assert_eq!(items.create_item("Next", "general").unwrap().id, 5);
    }

    #[test]
    fn null_item_list_loads_as_empty() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"ItemSequence":{"Id":0,"Mux":{}},"ItemList":null,"ItemDoneList":null,"BucketList":null}"#,
        )
        .unwrap();
        let items = store.load().unwrap();
        assert!(items.items().is_empty());
        assert_eq!(items.buckets().len(), 2);
    }

    #[test]
    fn lagging_sequence_is_raised_on_load() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"ItemSequence":{"Id":1},"ItemList":[{"Id":6,"BucketId":1,"Title":"a","CreationDate":"2024-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();
        let items = store.load().unwrap();
        assert_eq!(items.sequence().current(), 6);
    }

    #[test]
    fn exhausted_sequence_loads_but_refuses_new_items() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"{"ItemSequence":{"Id":9223372036854775807},"ItemList":[]}"#,
        )
        .unwrap();

        let mut items = store.load().unwrap();
        let err = items.create_item("x", "general").unwrap_err();
        assert!(matches!(err, IbError::SequenceExhausted(i64::MAX)));
        assert!(items.items().is_empty());
        assert_eq!(items.sequence().current(), i64::MAX);
    }

    #[test]
    fn unreadable_path_is_io_error_not_empty() {
        let (dir, _store) = temp_store();
        // A directory where the storage file should be cannot be read as a file.
        let store = FileStore::new(dir.path());

        let err = store.load().unwrap_err();
        assert!(matches!(err, IbError::Io(_)));
    }
}
