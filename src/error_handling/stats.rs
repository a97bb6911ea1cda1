//! Search statistics tracking.
//!
//! This module provides thread-safe counters for search outcomes over the
//! lifetime of a session.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LookupErrorKind;

/// Thread-safe search statistics tracker.
///
/// Counts started, displayed and superseded searches plus failures by kind.
/// All failure kinds are initialized to zero on creation, so the map is never
/// written after construction and can be shared across tasks with `Arc`.
pub struct SearchStats {
    started: AtomicUsize,
    displayed: AtomicUsize,
    superseded: AtomicUsize,
    failures: HashMap<LookupErrorKind, AtomicUsize>,
}

impl SearchStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in LookupErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        SearchStats {
            started: AtomicUsize::new(0),
            displayed: AtomicUsize::new(0),
            superseded: AtomicUsize::new(0),
            failures,
        }
    }

    pub fn record_started(&self) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_displayed(&self) {
        self.displayed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a failure counter.
    pub fn record_failure(&self, kind: LookupErrorKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                kind
            );
        }
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn displayed(&self) -> usize {
        self.displayed.load(Ordering::SeqCst)
    }

    pub fn superseded(&self) -> usize {
        self.superseded.load(Ordering::SeqCst)
    }

    /// Get the count for a failure kind.
    pub fn failure_count(&self, kind: LookupErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all kinds.
    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_stats_initialization() {
        let stats = SearchStats::new();
        for kind in LookupErrorKind::iter() {
            assert_eq!(stats.failure_count(kind), 0);
        }
        assert_eq!(stats.started(), 0);
        assert_eq!(stats.displayed(), 0);
        assert_eq!(stats.superseded(), 0);
    }

    #[test]
    fn test_search_stats_totals() {
        let stats = SearchStats::new();
        stats.record_started();
        stats.record_started();
        stats.record_started();
        stats.record_displayed();
        stats.record_failure(LookupErrorKind::NotFound);
        stats.record_failure(LookupErrorKind::ServiceUnavailable);
        stats.record_failure(LookupErrorKind::NotFound);

        assert_eq!(stats.started(), 3);
        assert_eq!(stats.displayed(), 1);
        assert_eq!(stats.failure_count(LookupErrorKind::NotFound), 2);
        assert_eq!(stats.total_failures(), 3);
    }
}
