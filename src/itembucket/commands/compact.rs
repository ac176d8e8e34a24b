use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;

use super::helpers::listings_for;

pub fn run(items: &mut ItemStore) -> Result<CmdResult> {
    let before = items.sequence().current();
    items.compact_ids();
    let after = items.sequence().current();
    tracing::info!(before, after, "ids compacted");

    let mut result = CmdResult::default().with_listings(listings_for(items, &BucketKey::ALL)?);
    result.add_message(CmdMessage::success(format!(
        "Renumbered {} item(s); next id is {}.",
        items.items().len(),
        after + 1
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renumbers_after_cleanup() {
        let mut items = StoreFixture::new()
            .with_item("A", BucketKey::General)
            .with_done_item("B", BucketKey::Today)
            .with_item("C", BucketKey::Today)
            .items;
        items.cleanup_done();

        let result = run(&mut items).unwrap();
        let ids: Vec<i64> = items.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(items.find_item(2).unwrap().1.title, "C");
        assert!(result.messages[0].content.contains("next id is 3"));
    }
}
