//! Watcher for UniFi Network Application GA releases
//!
//! Resolves the newest GA version from the UI community API, compares it
//! against a local ledger of processed versions, and keeps the Dockerfile
//! version pin and the ledger in sync.

pub mod checker;
pub mod config;
pub mod output;
pub mod release;
pub mod store;
