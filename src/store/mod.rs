//! Local state touched by the watcher
//!
//! Two files live here: the append-only versions ledger and the
//! Dockerfile that pins the deployed version.
//!
//! - [`ledger`]: load and idempotent append of seen version strings
//! - [`pin`]: rewrite of the `ARG` version pin
//! - [`error`]: error types for both files

pub mod error;
pub mod ledger;
pub mod pin;
