use colored::Colorize;
use itembucket::api::{BucketListing, CmdMessage, MessageLevel};
use itembucket::config::IbConfig;
use itembucket::model::{BucketKey, Item};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_listings(listings: &[BucketListing]) {
    for listing in listings {
        println!("{}", bucket_heading(listing.bucket).bold());
        for item in &listing.items {
            let line = item_line(item);
            if item.is_done() {
                println!("{}", line.dimmed());
            } else {
                println!("{}", line);
            }
        }
        println!();
    }
}

pub(super) fn print_config(config: &IbConfig) {
    for (key, value) in config.entries() {
        println!("{}: {}", key, value);
    }
}

pub(super) fn bucket_heading(bucket: BucketKey) -> String {
    format!("{}:", bucket.as_str().to_uppercase())
}

/// `<id>-[x]-<title>` for done items, `<id>-[ ]-<title>` otherwise.
pub(super) fn item_line(item: &Item) -> String {
    let mark = if item.is_done() { 'x' } else { ' ' };
    format!("{}-[{}]-{}", item.id, mark, item.title)
}
