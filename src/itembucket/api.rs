//! # API Facade
//!
//! The single entry point for every itembucket operation, whatever the UI.
//!
//! `ItemBucketApi<S: DataStore>` loads the [`ItemStore`] once when it is
//! built, then each method runs one command against it:
//! - `list_items` never saves;
//! - mutating methods save the whole store after the command succeeds;
//! - a failed command saves nothing, so no edit is ever half applied on disk.
//!
//! [`storage_path`] and [`config`] are free functions: they only need the
//! storage location, so they work even when the storage file cannot be loaded.
//!
//! Bucket keys arrive as plain strings and are parsed here, so an unknown key
//! surfaces as `UnknownBucket` before anything is touched.
//!
//! API tests check dispatch and the save-on-success rule; command behaviour
//! is tested in `commands/*.rs`.

use crate::commands;
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;
use crate::store::DataStore;

pub struct ItemBucketApi<S: DataStore> {
    store: S,
    items: ItemStore,
}

impl<S: DataStore> ItemBucketApi<S> {
    pub fn new(store: S) -> Result<Self> {
        let items = store.load()?;
        Ok(Self { store, items })
    }

    pub fn add_item(&mut self, title: &str, bucket: &str) -> Result<commands::CmdResult> {
        let bucket: BucketKey = bucket.parse()?;
        self.mutate(|items| commands::add::run(items, title, bucket))
    }

    pub fn list_items(&self, bucket: Option<&str>) -> Result<commands::CmdResult> {
        let bucket = bucket.map(str::parse::<BucketKey>).transpose()?;
        commands::list::run(&self.items, bucket)
    }

    pub fn toggle_item(&mut self, id: i64) -> Result<commands::CmdResult> {
        self.mutate(|items| commands::toggle::run(items, id))
    }

    pub fn move_item(&mut self, id: i64, bucket: &str) -> Result<commands::CmdResult> {
        let bucket: BucketKey = bucket.parse()?;
        self.mutate(|items| commands::move_item::run(items, id, bucket))
    }

    pub fn edit_item(&mut self, id: i64, text: &str) -> Result<commands::CmdResult> {
        self.mutate(|items| commands::edit::run(items, id, text))
    }

    pub fn delete_item(&mut self, id: i64) -> Result<commands::CmdResult> {
        self.mutate(|items| commands::delete::run(items, id))
    }

    pub fn empty_today(&mut self) -> Result<commands::CmdResult> {
        self.mutate(commands::empty_today::run)
    }

    pub fn cleanup(&mut self) -> Result<commands::CmdResult> {
        self.mutate(commands::cleanup::run)
    }

    pub fn compact(&mut self) -> Result<commands::CmdResult> {
        self.mutate(commands::compact::run)
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn mutate<F>(&mut self, command: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut ItemStore) -> Result<commands::CmdResult>,
    {
        let result = command(&mut self.items)?;
        self.store.save(&self.items)?;
        Ok(result)
    }
}

pub fn storage_path(paths: &StoragePaths) -> Result<commands::CmdResult> {
    commands::paths::run(paths)
}

pub fn config(paths: &StoragePaths, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(paths, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BucketListing, CmdMessage, CmdResult, MessageLevel, StoragePaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IbConfig;
    use crate::error::IbError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn paths() -> StoragePaths {
        StoragePaths::new(PathBuf::from("/tmp/ib-api-test"), &IbConfig::default())
    }

    fn api() -> ItemBucketApi<InMemoryStore> {
        ItemBucketApi::new(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn loads_existing_state_on_construction() {
        let fixture = StoreFixture::new().with_items(2, BucketKey::Today);
        let api = ItemBucketApi::new(fixture.store()).unwrap();
        assert_eq!(api.items().items().len(), 2);
    }

    #[test]
    fn add_saves_and_parses_bucket() {
        let mut api = api();
        let result = api.add_item("Stretch", "today").unwrap();
        assert_eq!(result.listed_buckets(), vec![BucketKey::Today]);
        assert_eq!(api.store().save_count(), 1);

        let reloaded = api.store().load().unwrap();
        assert_eq!(reloaded.items()[0].title, "Stretch");
    }

    #[test]
    fn unknown_bucket_is_rejected_before_saving() {
        let mut api = api();
        let err = api.add_item("Stretch", "tomorrow").unwrap_err();
        assert!(matches!(err, IbError::UnknownBucket(_)));
        assert!(matches!(api.list_items(Some("x")), Err(IbError::UnknownBucket(_))));
        assert!(matches!(api.move_item(1, "x"), Err(IbError::UnknownBucket(_))));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn failed_mutation_does_not_save() {
        let mut api = api();
        assert!(matches!(api.toggle_item(4), Err(IbError::ItemNotFound(4))));
        assert!(matches!(api.edit_item(4, "x"), Err(IbError::ItemNotFound(4))));
        assert!(matches!(api.delete_item(4), Err(IbError::ItemNotFound(4))));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn listing_never_saves() {
        let fixture = StoreFixture::new().with_item("A", BucketKey::General);
        let api = ItemBucketApi::new(fixture.store()).unwrap();
        let result = api.list_items(None).unwrap();
        assert_eq!(result.listings.len(), 2);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn each_mutation_dispatches_and_saves() {
        let mut api = api();
        api.add_item("A", "general").unwrap();
        api.add_item("B", "general").unwrap();
        api.add_item("C", "today").unwrap();
        api.toggle_item(1).unwrap();
        api.move_item(2, "today").unwrap();
        api.edit_item(2, "B2").unwrap();
        api.empty_today().unwrap();
        api.cleanup().unwrap();
        api.delete_item(3).unwrap();
        api.compact().unwrap();
        assert_eq!(api.store().save_count(), 10);

        let reloaded = api.store().load().unwrap();
        let titles: Vec<&str> = reloaded.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B2"]);
        assert_eq!(reloaded.items()[0].id, 1);
        assert_eq!(reloaded.sequence().current(), 1);
    }

    #[test]
    fn storage_path_reports_file() {
        let result = storage_path(&paths()).unwrap();
        assert_eq!(
            result.storage_path,
            Some(PathBuf::from("/tmp/ib-api-test/.ibstorage.json"))
        );
    }

    #[test]
    fn config_dispatches_to_the_storage_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = StoragePaths::new(dir.path().to_path_buf(), &IbConfig::default());

        config(
            &paths,
            ConfigAction::Set("file-name".into(), "work.json".into()),
        )
        .unwrap();
        let result = config(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().file_name, "work.json");
    }
}
