use crate::commands::{CmdMessage, CmdResult, StoragePaths};
use crate::error::Result;

pub fn run(paths: &StoragePaths) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_storage_path(paths.file.clone());
    result.add_message(CmdMessage::info(format!(
        "IB storage file: {}, you can back this up.",
        paths.file.display()
    )));
    Ok(result)
}
