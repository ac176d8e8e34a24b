use crate::commands::BucketListing;
use crate::error::{IbError, Result};
use crate::items::ItemStore;
use crate::model::BucketKey;

pub fn listings_for(items: &ItemStore, buckets: &[BucketKey]) -> Result<Vec<BucketListing>> {
    buckets
        .iter()
        .map(|&bucket| {
            Ok(BucketListing {
                bucket,
                items: items.list_items(bucket)?,
            })
        })
        .collect()
}

/// Listing of whichever bucket the item is in now.
pub fn listing_of_item(items: &ItemStore, id: i64) -> Result<Vec<BucketListing>> {
    let bucket = items.bucket_key_of(id)?;
    listings_for(items, &[bucket])
}

pub fn require_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(IbError::Api("Title cannot be empty".into()));
    }
    Ok(title.to_string())
}
