//! Identifier generator port.

use thiserror::Error;

/// Failure to produce an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct IdGenerationError(pub String);

/// Source of opaque unique identifiers for new records.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier.
    fn next_id(&self) -> Result<String, IdGenerationError>;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Result<String, IdGenerationError> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic generator yielding `id-1`, `id-2`, ...
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Result<String, IdGenerationError> {
        let n = self
            .next
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Ok(format!("id-{}", n + 1))
    }
}

/// Generator that fails on the listed call numbers (1-based).
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FailingIds {
    calls: std::sync::atomic::AtomicUsize,
    fail_on: Vec<usize>,
}

#[cfg(test)]
impl FailingIds {
    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            calls: std::sync::atomic::AtomicUsize::new(0),
            fail_on: calls.to_vec(),
        }
    }
}

#[cfg(test)]
impl IdGenerator for FailingIds {
    fn next_id(&self) -> Result<String, IdGenerationError> {
        let call = self
            .calls
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            + 1;
        if self.fail_on.contains(&call) {
            return Err(IdGenerationError("id pool exhausted".to_string()));
        }
        Ok(format!("id-{call}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_yields_distinct_ids() {
        let ids = UuidGenerator;
        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::default();
        assert_eq!(ids.next_id().unwrap(), "id-1");
        assert_eq!(ids.next_id().unwrap(), "id-2");
    }

    #[test]
    fn test_failing_ids() {
        let ids = FailingIds::failing_on(&[2]);
        assert!(ids.next_id().is_ok());
        assert_eq!(ids.next_id().unwrap_err().to_string(), "id pool exhausted");
        assert_eq!(ids.next_id().unwrap(), "id-3");
    }
}
