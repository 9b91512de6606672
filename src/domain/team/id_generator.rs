//! Logical ID generation for new teams

use std::sync::atomic::{AtomicU64, Ordering};

use super::entity::TeamId;

/// Source of logical IDs for newly created teams
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    fn next(&self) -> TeamId;
}

/// Counter rendered as a decimal string, starting at "1".
///
/// The counter lives as long as the generator, so IDs repeat after a restart.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next(&self) -> TeamId {
        let value = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        TeamId(value.to_string())
    }
}

/// Random UUID v4 IDs, unique across restarts
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next(&self) -> TeamId {
        TeamId(uuid::Uuid::new_v4().to_string())
    }
}

/// Supported ID strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
            Self::Uuid => Box::new(UuidIdGenerator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequential_starts_at_one() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next().as_str(), "1");
        assert_eq!(ids.next().as_str(), "2");
        assert_eq!(ids.next().as_str(), "3");
    }

    #[test]
    fn test_sequential_generators_are_independent() {
        let a = SequentialIdGenerator::new();
        let b = SequentialIdGenerator::new();

        a.next();
        a.next();
        assert_eq!(b.next().as_str(), "1");
    }

    #[test]
    fn test_sequential_is_unique_across_threads() {
        let ids = Arc::new(SequentialIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || {
                    (0..250).map(|_| ids.next().to_string()).collect::<Vec<_>>()
                })
            })
            .collect();

        let all: HashSet<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(all.len(), 1000);
    }

    #[test]
    fn test_uuid_generator() {
        let ids = UuidIdGenerator;
        let first = ids.next();
        let second = ids.next();

        assert_ne!(first, second);
        assert!(uuid::Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn test_strategy_build() {
        assert_eq!(IdStrategy::default().build().next().as_str(), "1");
        assert_eq!(IdStrategy::Uuid.build().next().as_str().len(), 36);
    }
}
