//! Port definitions for collaborators outside the import core.
//!
//! Normalization needs a fresh opaque identifier per record. The generator is
//! injected so callers can plug in their store's id scheme and tests can use
//! deterministic ids.

mod id_generator;

pub use id_generator::{IdGenerationError, IdGenerator, UuidGenerator};

#[cfg(test)]
pub use id_generator::{FailingIds, SequentialIds};
