use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::BucketKey;

use super::helpers::listings_for;

pub fn run(items: &mut ItemStore) -> Result<CmdResult> {
    let removed = items.cleanup_done();
    tracing::info!(removed = removed.len(), "done items cleaned up");

    let mut result = CmdResult::default().with_listings(listings_for(items, &BucketKey::ALL)?);
    if removed.is_empty() {
        result.add_message(CmdMessage::info("No done items to remove."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} done item(s).",
            removed.len()
        )));
    }
    Ok(result.with_affected_items(removed))
}
