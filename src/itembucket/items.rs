//! # Item/Bucket Store
//!
//! [`ItemStore`] is the whole in-memory state of an itembucket file: the id
//! [`Sequence`], the item collection and the two buckets. It knows nothing
//! about files; see [`crate::store`] for persistence.
//!
//! Every mutation is a single method that looks the item up and changes it in
//! one step, so callers never hold a position across two calls.
//!
//! ## Listing order
//!
//! [`ItemStore::list_items`] returns pending items before done items, each
//! group by ascending id. Creating A, B, C (ids 1, 2, 3) and marking 1 done
//! lists as `[2, 3, 1]`.

use crate::error::{IbError, Result};
use crate::model::{Bucket, BucketKey, Item};
use crate::sequence::Sequence;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStore {
    #[serde(rename = "ItemSequence", default, deserialize_with = "null_as_default")]
    sequence: Sequence,
    #[serde(rename = "ItemList", default, deserialize_with = "null_as_default")]
    items: Vec<Item>,
    #[serde(rename = "BucketList", default, deserialize_with = "null_as_default")]
    buckets: Vec<Bucket>,
}

// Older files write empty collections as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            sequence: Sequence::default(),
            items: Vec::new(),
            buckets: Bucket::canonical(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn find_bucket_by_key(&self, key: &str) -> Result<&Bucket> {
        self.buckets
            .iter()
            .find(|bucket| bucket.name == key)
            .ok_or_else(|| IbError::UnknownBucket(key.to_string()))
    }

    /// The bucket an item currently lives in.
    pub fn bucket_key_of(&self, id: i64) -> Result<BucketKey> {
        let (_, item) = self.find_item(id).ok_or(IbError::ItemNotFound(id))?;
        BucketKey::from_id(item.bucket_id)
            .ok_or_else(|| IbError::UnknownBucket(item.bucket_id.to_string()))
    }

    pub fn create_item(
        &mut self,
        title: impl Into<String>,
        bucket_key: impl AsRef<str>,
    ) -> Result<Item> {
        let bucket_id = self.find_bucket_by_key(bucket_key.as_ref())?.id;
        let item = Item::new(self.sequence.next()?, bucket_id, title);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Linear scan by id, returning the position alongside the item.
    pub fn find_item(&self, id: i64) -> Option<(usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.id == id)
    }

    fn item_mut(&mut self, id: i64) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(IbError::ItemNotFound(id))
    }

    /// Replace the item with `id` wholesale. The replacement keeps `id` so
    /// ids stay unique; its bucket must exist.
    pub fn edit_item(&mut self, id: i64, mut replacement: Item) -> Result<()> {
        if BucketKey::from_id(replacement.bucket_id).is_none() {
            return Err(IbError::UnknownBucket(replacement.bucket_id.to_string()));
        }
        let slot = self.item_mut(id)?;
        replacement.id = id;
        *slot = replacement;
        Ok(())
    }

    pub fn set_title(&mut self, id: i64, title: impl Into<String>) -> Result<&Item> {
        let item = self.item_mut(id)?;
        item.title = title.into();
        Ok(item)
    }

    pub fn toggle_done(&mut self, id: i64) -> Result<&Item> {
        let item = self.item_mut(id)?;
        item.toggle_done();
        Ok(item)
    }

    pub fn move_item(&mut self, id: i64, target: impl AsRef<str>) -> Result<&Item> {
        let bucket_id = self.find_bucket_by_key(target.as_ref())?.id;
        let item = self.item_mut(id)?;
        item.bucket_id = bucket_id;
        Ok(item)
    }

    pub fn delete_item(&mut self, id: i64) -> Result<Item> {
        let (idx, _) = self.find_item(id).ok_or(IbError::ItemNotFound(id))?;
        Ok(self.items.remove(idx))
    }

    /// Move everything in today back to general. Returns how many moved.
    pub fn empty_today(&mut self) -> usize {
        let (today, general) = (BucketKey::Today.id(), BucketKey::General.id());
        let mut moved = 0;
        for item in self.items.iter_mut().filter(|item| item.bucket_id == today) {
            item.bucket_id = general;
            moved += 1;
        }
        moved
    }

    /// Drop every done item, keeping pending items in their current order.
    /// Returns the removed items.
    pub fn cleanup_done(&mut self) -> Vec<Item> {
        let (done, pending): (Vec<Item>, Vec<Item>) =
            self.items.drain(..).partition(Item::is_done);
        self.items = pending;
        done
    }

    /// Renumber items 1..=n in ascending id order and rewind the sequence to n.
    pub fn compact_ids(&mut self) {
        self.items.sort_by_key(|item| item.id);
        for (idx, item) in self.items.iter_mut().enumerate() {
            item.id = idx as i64 + 1;
        }
        self.sequence.reset_to(self.items.len() as i64);
    }

    /// Items in one bucket: pending first, then done, each by ascending id.
    pub fn list_items(&self, bucket_key: impl AsRef<str>) -> Result<Vec<Item>> {
        let bucket_id = self.find_bucket_by_key(bucket_key.as_ref())?.id;
        let (mut done, mut pending): (Vec<Item>, Vec<Item>) = self
            .items
            .iter()
            .filter(|item| item.bucket_id == bucket_id)
            .cloned()
            .partition(Item::is_done);

        pending.sort_by_key(|item| item.id);
        done.sort_by_key(|item| item.id);
        pending.extend(done);
        Ok(pending)
    }

    /// Buckets are a fixed lookup table; whatever was persisted is replaced.
    pub(crate) fn reset_buckets(&mut self) {
        self.buckets = Bucket::canonical();
    }

    /// Check the data-model invariants after a load.
    pub(crate) fn check_integrity(&self) -> std::result::Result<(), String> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(format!("duplicate item id {}", item.id));
            }
            if BucketKey::from_id(item.bucket_id).is_none() {
                return Err(format!(
                    "item {} references unknown bucket {}",
                    item.id, item.bucket_id
                ));
            }
        }
        Ok(())
    }

    /// Raise the sequence to the highest item id if it fell behind.
    pub(crate) fn repair_sequence(&self) -> bool {
        let max_id = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        self.sequence.ensure_at_least(max_id)
    }
}
