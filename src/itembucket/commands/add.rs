use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;

use super::helpers::{listings_for, require_title};

pub fn run(items: &mut ItemStore, title: &str, bucket: BucketKey) -> Result<CmdResult> {
    let title = require_title(title)?;
    let item = items.create_item(title, bucket)?;
    tracing::info!(id = item.id, %bucket, "item created");

    let mut result = CmdResult::default().with_listings(listings_for(items, &[bucket])?);
    result.add_message(CmdMessage::success(format!(
        "Item added to {} ({}): {}",
        bucket, item.id, item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IbError;

    #[test]
    fn adds_to_requested_bucket_and_lists_only_it() {
        let mut items = ItemStore::new();
        let result = run(&mut items, "Book flights", BucketKey::Today).unwrap();

        assert_eq!(result.affected_items[0].id, 1);
        assert_eq!(result.listed_buckets(), vec![BucketKey::Today]);
        assert_eq!(result.listings[0].items[0].title, "Book flights");
        assert_eq!(items.bucket_key_of(1).unwrap(), BucketKey::Today);
    }

    #[test]
    fn trims_title() {
        let mut items = ItemStore::new();
        run(&mut items, "  Call mom \n", BucketKey::General).unwrap();
        assert_eq!(items.items()[0].title, "Call mom");
    }

    #[test]
    fn rejects_blank_title_without_consuming_an_id() {
        let mut items = ItemStore::new();
        let err = run(&mut items, "   ", BucketKey::General).unwrap_err();
        assert!(matches!(err, IbError::Api(_)));
        assert_eq!(items.sequence().current(), 0);
    }
}
