use super::{finish_load, DataStore};
use crate::error::{IbError, Result};
use crate::items::ItemStore;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Saves go through JSON so tests see the same format rules as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store as if `items` had been saved earlier.
    pub fn with_items(items: &ItemStore) -> Result<Self> {
        let mut store = Self::new();
        store.snapshot = Some(serde_json::to_string(items)?);
        Ok(store)
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<ItemStore> {
        match &self.snapshot {
            None => Ok(ItemStore::new()),
            Some(json) => {
                let items: ItemStore = serde_json::from_str(json)
                    .map_err(|e| IbError::corrupt(self.location(), e.to_string()))?;
                finish_load(items, &self.location())
            }
        }
    }

    fn save(&mut self, items: &ItemStore) -> Result<()> {
        self.snapshot = Some(serde_json::to_string(items)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(":memory:")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BucketKey;

    pub struct StoreFixture {
        pub items: ItemStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                items: ItemStore::new(),
            }
        }

        pub fn with_items(mut self, count: usize, bucket: BucketKey) -> Self {
            for i in 0..count {
                let title = format!("Test Item {}", i + 1);
                self.items.create_item(title, bucket).unwrap();
            }
            self
        }

        pub fn with_item(mut self, title: &str, bucket: BucketKey) -> Self {
            self.items.create_item(title, bucket).unwrap();
            self
        }

        pub fn with_done_item(mut self, title: &str, bucket: BucketKey) -> Self {
            let id = self.items.create_item(title, bucket).unwrap().id;
            self.items.toggle_done(id).unwrap();
            self
        }

        pub fn store(&self) -> InMemoryStore {
            InMemoryStore::with_items(&self.items).expect("fixture items serialize")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::BucketKey;

    #[test]
    fn unsaved_store_loads_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().items().is_empty());
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut store = InMemoryStore::new();
        let fixture = StoreFixture::new()
            .with_item("Plan week", BucketKey::Today)
            .with_done_item("Inbox zero", BucketKey::General);

        store.save(&fixture.items).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.items(), fixture.items.items());
        assert_eq!(loaded.sequence().current(), 2);
        assert_eq!(store.save_count(), 1);
        assert!(store.snapshot().unwrap().contains("\"ItemList\""));
    }

    #[test]
    fn seeded_store_loads_without_counting_a_save() {
        let fixture = StoreFixture::new().with_items(3, BucketKey::General);
        let store = InMemoryStore::with_items(&fixture.items).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.items().len(), 3);
        assert_eq!(loaded.sequence().current(), 3);
        assert_eq!(store.save_count(), 0);
    }
}
