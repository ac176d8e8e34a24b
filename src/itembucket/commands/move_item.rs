use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;

use super::helpers::listings_for;

pub fn run(items: &mut ItemStore, id: i64, target: BucketKey) -> Result<CmdResult> {
    let item = items.move_item(id, target)?.clone();
    tracing::info!(id, %target, "item moved");

    let mut result =
        CmdResult::default().with_listings(listings_for(items, &BucketKey::ALL)?);
    result.add_message(CmdMessage::success(format!(
        "Item moved to {} ({}): {}",
        target, id, item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}
