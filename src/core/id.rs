//! Identifier generation for stored entities
//!
//! Keys are opaque strings generated outside the store. The store itself
//! does not guarantee uniqueness; the generator must.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique entity identifiers.
///
/// Implementations must produce keys with negligible collision probability.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier.
    fn generate(&self) -> String;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: "id-1", "id-2", ...
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    counter: AtomicU64,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{}", n)
    }
}

/// Shared handle used by the services.
pub type SharedIdGenerator = Arc<dyn IdGenerator>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_distinct_ids() {
        let ids = UuidGenerator;
        assert_ne!(ids.generate(), ids.generate());
    }

    #[test]
    fn test_sequence_generator_is_deterministic() {
        let ids = SequenceGenerator::new();
        assert_eq!(ids.generate(), "id-1");
        assert_eq!(ids.generate(), "id-2");
    }
}
