//! # Storage Layer
//!
//! Persistence for an [`ItemStore`]. The [`DataStore`] trait lets the API work
//! against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file
//!   (`~/.ibstorage.json` by default).
//! - [`memory::InMemoryStore`]: Keeps the last saved snapshot in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "ItemSequence": { "Id": 3 },
//!   "ItemList": [ { "Id": 1, "BucketId": 1, "Title": "...", ... } ],
//!   "BucketList": [ { "Id": 1, "Name": "general" }, { "Id": 2, "Name": "today" } ]
//! }
//! ```
//!
//! The field names are fixed: files written by earlier releases must keep
//! loading. The bucket list is written for those readers but never trusted on
//! load; `finish_load` replaces it with the canonical pair.
//!
//! ## Concurrency
//!
//! There is no cross-process lock. Two invocations racing on the same file
//! both load, and the later save wins.

use crate::error::{IbError, Result};
use crate::items::ItemStore;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving the item store.
pub trait DataStore {
    /// Load the store. A store that was never saved loads as empty.
    fn load(&self) -> Result<ItemStore>;

    /// Persist the whole store, replacing whatever was saved before.
    fn save(&mut self, items: &ItemStore) -> Result<()>;

    /// Where the data lives (for file-based stores, the file path).
    fn location(&self) -> PathBuf;
}

/// Shared post-load step: reset buckets, check invariants, catch the
/// sequence up with the highest id.
pub(crate) fn finish_load(mut items: ItemStore, source: &Path) -> Result<ItemStore> {
    items.reset_buckets();
    items
        .check_integrity()
        .map_err(|reason| IbError::corrupt(source, reason))?;
    if items.repair_sequence() {
        tracing::warn!(
            path = %source.display(),
            sequence = items.sequence().current(),
            "sequence was behind the highest item id; raised it"
        );
    }
    Ok(items)
}
