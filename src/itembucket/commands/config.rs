use crate::commands::{CmdMessage, CmdResult, StoragePaths};
use crate::config::{unknown_key, IbConfig};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StoragePaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.dir;
    match action {
        ConfigAction::ShowAll => {
            let config = IbConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = IbConfig::load(dir)?;
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = IbConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            tracing::info!(%key, "config updated");

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}
