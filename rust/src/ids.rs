//! Identifier allocation for new records.
//!
//! The scheduler never mints ids itself. Callers pass an allocator so that
//! tests can use deterministic ids and production can use random UUIDs.

use uuid::Uuid;

/// Source of fresh, unique record identifiers.
pub trait IdAllocator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAllocator;

impl IdAllocator for UuidAllocator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-<n>` identifiers, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialAllocator {
    prefix: String,
    next: u64,
}

impl SequentialAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for SequentialAllocator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdAllocator for SequentialAllocator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<A: IdAllocator + ?Sized> IdAllocator for &mut A {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialAllocator::new("session");
        assert_eq!(ids.next_id(), "session-1");
        assert_eq!(ids.next_id(), "session-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidAllocator;
        let seen: FxHashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 100);
        assert!(seen.iter().all(|id| Uuid::parse_str(id).is_ok()));
    }

    #[test]
    fn test_allocator_through_mut_ref() {
        fn mint<A: IdAllocator>(mut ids: A) -> String {
            ids.next_id()
        }

        let mut ids = SequentialAllocator::default();
        assert_eq!(mint(&mut ids), "id-1");
        assert_eq!(mint(&mut ids), "id-2");
        assert_eq!(ids.issued(), 2);
    }
}
