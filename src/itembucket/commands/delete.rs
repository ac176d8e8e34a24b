use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;

use super::helpers::listings_for;

pub fn run(items: &mut ItemStore, id: i64) -> Result<CmdResult> {
    let removed = items.delete_item(id)?;
    tracing::info!(id, "item deleted");

    let mut result = CmdResult::default().with_listings(listings_for(items, &BucketKey::ALL)?);
    result.add_message(CmdMessage::success(format!(
        "Item deleted ({}): {}",
        id, removed.title
    )));
    result.affected_items.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IbError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_one_item() {
        let mut items = StoreFixture::new().with_items(2, BucketKey::General).items;
        let result = run(&mut items, 1).unwrap();
        assert_eq!(result.affected_items[0].title, "Test Item 1");
        assert_eq!(items.items().len(), 1);
        assert!(matches!(run(&mut items, 1), Err(IbError::ItemNotFound(1))));
    }
}
