use crate::config::IbConfig;
use crate::model::{BucketKey, Item};
use std::path::PathBuf;

pub mod add;
pub mod cleanup;
pub mod compact;
pub mod config;
pub mod delete;
pub mod edit;
pub mod empty_today;
pub mod helpers;
pub mod list;
pub mod move_item;
pub mod paths;
pub mod toggle;

/// Where this invocation reads and writes.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    /// Directory holding the storage file and `.ibconfig.json`
    pub dir: PathBuf,
    /// The storage file itself
    pub file: PathBuf,
}

impl StoragePaths {
    pub fn new(dir: PathBuf, config: &IbConfig) -> Self {
        let file = dir.join(config.get_file_name());
        Self { dir, file }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// One bucket's items in listing order.
#[derive(Debug, Clone)]
pub struct BucketListing {
    pub bucket: BucketKey,
    pub items: Vec<Item>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listings: Vec<BucketListing>,
    pub storage_path: Option<PathBuf>,
    pub config: Option<IbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listings(mut self, listings: Vec<BucketListing>) -> Self {
        self.listings = listings;
        self
    }

    pub fn with_storage_path(mut self, path: PathBuf) -> Self {
        self.storage_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: IbConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Buckets listed in this result, in order.
    pub fn listed_buckets(&self) -> Vec<BucketKey> {
        self.listings.iter().map(|l| l.bucket).collect()
    }
}
