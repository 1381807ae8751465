//! Typed records produced by an import.
//!
//! # Structure
//!
//! - `ServerRecord` - a fully normalized server configuration, ready to store
//! - `ServerType` - how the server is reached (local process or remote URL)
//! - `ImportOutcome` - per-entry success/failure of one import batch

mod server;

pub use server::{ImportOutcome, ServerRecord, ServerType};
