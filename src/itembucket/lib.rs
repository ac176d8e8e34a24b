//! # Itembucket Architecture
//!
//! Itembucket is a small todo library with two fixed buckets, `general` and
//! `today`. The `ib` binary is one client of it; nothing below the CLI layer
//! knows about terminals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, installs logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses bucket keys, runs one command, saves on success   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on an ItemStore, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save the whole ItemStore         │
//! │  - FileStore (JSON file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Item ids come from a single [`sequence::Sequence`] persisted with the
//! items. Ids only grow, with one exception: `compact` renumbers every item
//! from 1 and rewinds the sequence to match.
//!
//! ## Testing
//!
//! Business rules are tested on [`items::ItemStore`] and in `commands/*.rs`.
//! The API tests check dispatch and the save-on-success rule against
//! `InMemoryStore`. `tests/cli_integration.rs` drives the real binary
//! against a temporary storage directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`items`]: The item collection and its invariants
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: `Item`, `Bucket`, `BucketKey`
//! - [`sequence`]: Id allocation
//! - [`config`]: Storage location and `.ibconfig.json`
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod items;
pub mod model;
pub mod sequence;
pub mod store;
