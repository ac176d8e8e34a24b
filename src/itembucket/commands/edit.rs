use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;

use super::helpers::{listing_of_item, require_title};

pub fn run(items: &mut ItemStore, id: i64, text: &str) -> Result<CmdResult> {
    let title = require_title(text)?;
    let item = items.set_title(id, title)?.clone();
    tracing::info!(id, "item retitled");

    let mut result = CmdResult::default().with_listings(listing_of_item(items, id)?);
    result.add_message(CmdMessage::success(format!(
        "Item updated ({}): {}",
        id, item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}
