//! Completion Ledger: completed-task counts keyed by creation day.

use crate::date_key::DateKey;
use crate::store::TaskStore;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLedger {
    counts: BTreeMap<DateKey, u64>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(counts: BTreeMap<DateKey, u64>) -> Self {
        Self { counts }
    }

    /// Recounts completed tasks per creation day from scratch.
    pub fn derive(store: &TaskStore) -> Self {
        let mut ledger = Self::new();
        for task in store.iter().filter(|task| task.completed) {
            ledger.increment(task.created_at);
        }
        ledger
    }

    pub fn increment(&mut self, day: DateKey) {
        let count = self.counts.entry(day).or_default();
        *count = count.saturating_add(1);
    }

    /// Floors at zero; an unseen day stays at zero.
    pub fn decrement(&mut self, day: DateKey) {
        let count = self.counts.entry(day).or_default();
        *count = count.saturating_sub(1);
    }

    pub fn get(&self, day: DateKey) -> u64 {
        self.counts.get(&day).copied().unwrap_or_default()
    }

    /// True when both ledgers agree on every day, treating absent days as zero.
    pub fn agrees_with(&self, other: &CompletionLedger) -> bool {
        self.counts
            .keys()
            .chain(other.counts.keys())
            .all(|day| self.get(*day) == other.get(*day))
    }

    pub fn counts(&self) -> &BTreeMap<DateKey, u64> {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    #[test]
    fn unseen_days_read_zero() {
        let ledger = CompletionLedger::new();
        assert_eq!(ledger.get(day("2024-06-01")), 0);
    }

    #[test]
    fn increments_and_decrements_per_day() {
        let mut ledger = CompletionLedger::new();
        ledger.increment(day("2024-06-01"));
        ledger.increment(day("2024-06-01"));
        ledger.increment(day("2024-06-02"));
        ledger.decrement(day("2024-06-01"));
        assert_eq!(ledger.get(day("2024-06-01")), 1);
        assert_eq!(ledger.get(day("2024-06-02")), 1);
    }

    #[test]
    fn decrement_never_goes_below_zero() {
        let mut ledger = CompletionLedger::new();
        ledger.decrement(day("2024-06-01"));
        ledger.decrement(day("2024-06-01"));
        assert_eq!(ledger.get(day("2024-06-01")), 0);
        ledger.increment(day("2024-06-01"));
        assert_eq!(ledger.get(day("2024-06-01")), 1);
    }

    #[test]
    fn zero_entries_do_not_break_agreement() {
        let mut left = CompletionLedger::new();
        left.increment(day("2024-06-01"));
        left.decrement(day("2024-06-01"));
        assert!(left.agrees_with(&CompletionLedger::new()));
        assert!(CompletionLedger::new().agrees_with(&left));

        left.increment(day("2024-06-03"));
        assert!(!left.agrees_with(&CompletionLedger::new()));
    }

    #[test]
    fn derive_counts_completed_tasks_by_creation_day() {
        let mut store = TaskStore::new();
        let a = store.add_task("a", day("2024-06-01")).unwrap();
        let b = store.add_task("b", day("2024-06-01")).unwrap();
        store.add_task("c", day("2024-06-01")).unwrap();
        let d = store.add_task("d", day("2024-06-02")).unwrap();
        for id in [a.id, b.id, d.id] {
            store.toggle_complete(id).unwrap();
        }

        let ledger = CompletionLedger::derive(&store);
        assert_eq!(ledger.get(day("2024-06-01")), 2);
        assert_eq!(ledger.get(day("2024-06-02")), 1);
        assert_eq!(ledger.get(day("2024-06-03")), 0);
    }
}
