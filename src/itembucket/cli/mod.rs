//! # CLI Layer
//!
//! One possible UI client for itembucket. This is the only place that parses
//! arguments, writes to stdout/stderr, installs logging, or decides the exit
//! code; everything else goes through [`itembucket::api::ItemBucketApi`].
//!
//! - `setup`: clap argument model, version string, logging setup
//! - `commands`: `run()` dispatch and per-command handlers
//! - `render`: turning a `CmdResult` into terminal text

mod commands;
mod render;
mod setup;

pub use commands::run;
