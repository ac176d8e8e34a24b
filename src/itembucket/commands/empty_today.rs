use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;

use super::helpers::listings_for;

pub fn run(items: &mut ItemStore) -> Result<CmdResult> {
    let moved = items.empty_today();
    tracing::info!(moved, "today emptied");

    let mut result =
        CmdResult::default().with_listings(listings_for(items, &[BucketKey::General])?);
    if moved == 0 {
        result.add_message(CmdMessage::info("Today is already empty."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Moved {} item(s) from today to general.",
            moved
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn moves_today_into_general() {
        let mut items = StoreFixture::new()
            .with_item("A", BucketKey::Today)
            .with_done_item("B", BucketKey::Today)
            .with_item("C", BucketKey::General)
            .items;

        let result = run(&mut items).unwrap();
        assert_eq!(result.listed_buckets(), vec![BucketKey::General]);
        let ids: Vec<i64> = result.listings[0].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert!(items.list_items(BucketKey::Today).unwrap().is_empty());
    }

    #[test]
    fn empty_today_is_a_noop() {
        let mut items = StoreFixture::new().with_item("A", BucketKey::General).items;
        let result = run(&mut items).unwrap();
        assert!(result.messages[0].content.contains("already empty"));
    }
}
