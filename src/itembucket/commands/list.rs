use crate::commands::CmdResult;
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;

use super::helpers::listings_for;

/// List one bucket, or both (general first) when none is given.
pub fn run(items: &ItemStore, bucket: Option<BucketKey>) -> Result<CmdResult> {
    let buckets = match bucket {
        Some(bucket) => vec![bucket],
        None => BucketKey::ALL.to_vec(),
    };
    Ok(CmdResult::default().with_listings(listings_for(items, &buckets)?))
}
