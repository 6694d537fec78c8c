//! Unique-id generation for registrations and their sub-records.
//!
//! The store never mints ids itself: it asks an injected [`IdGenerator`],
//! so tests can substitute a deterministic source.

use uuid::Uuid;

/// Capability for minting unique identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
