use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;

use super::helpers::listing_of_item;

pub fn run(items: &mut ItemStore, id: i64) -> Result<CmdResult> {
    let item = items.toggle_done(id)?.clone();
    tracing::info!(id, done = item.is_done(), "item toggled");

    let verb = if item.is_done() { "done" } else { "reopened" };
    let mut result = CmdResult::default().with_listings(listing_of_item(items, id)?);
    result.add_message(CmdMessage::success(format!(
        "Item {} ({}): {}",
        verb, id, item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}
