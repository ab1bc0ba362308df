//! Release discovery layer for the UI community API
//!
//! This module answers one question: what is the newest GA release of the
//! configured product line right now?
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Resolver   │────▶│    Client    │────▶│  Community   │
//! │ (two stages) │     │  (GraphQL)   │     │     API      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`client`]: GraphQL transport and response envelope handling
//! - [`resolver`]: Group lookup followed by the GA scan of its history
//! - [`types`]: Wire types shared by both queries
//! - [`error`]: Error type covering transport, protocol, and lookup failures

pub mod client;
pub mod error;
pub mod resolver;
pub mod types;
