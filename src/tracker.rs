//! Tracker: the one caller that drives the task store and keeps the
//! completion ledger in step with it.
//!
//! # Invariants
//! - For every day `d`, `ledger.get(d)` equals the number of tasks with
//!   `created_at == d` and `completed == true`, after every command.
//! - Ledger updates are keyed by the task's own creation day, never by the
//!   day the command is issued.
//! - A failed command changes neither the store nor the ledger.

use crate::date_key::DateKey;
use crate::errors::TrackerError;
use crate::ledger::CompletionLedger;
use crate::models::{Snapshot, Task, TaskId, Transition};
use crate::store::TaskStore;

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    store: TaskStore,
    ledger: CompletionLedger,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the tracker exactly as exported; the ledger is not recounted.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            store: TaskStore::from_tasks(snapshot.tasks),
            ledger: CompletionLedger::from_counts(snapshot.completion_data),
        }
    }

    pub fn export(&self) -> Snapshot {
        Snapshot {
            tasks: self.store.iter().cloned().collect(),
            completion_data: self.ledger.counts().clone(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn ledger(&self) -> &CompletionLedger {
        &self.ledger
    }

    /// Whether the stored ledger matches a recount of the task store.
    pub fn ledger_is_consistent(&self) -> bool {
        self.ledger.agrees_with(&CompletionLedger::derive(&self.store))
    }

    pub fn add_task(&mut self, text: &str, day: DateKey) -> Result<Task, TrackerError> {
        self.store.add_task(text, day)
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> Result<(Task, Transition), TrackerError> {
        let (task, transition) = self.store.toggle_complete(id)?;
        match transition {
            Transition::BecameComplete => self.ledger.increment(task.created_at),
            Transition::BecameIncomplete => self.ledger.decrement(task.created_at),
        }
        Ok((task, transition))
    }

    pub fn rename(&mut self, id: TaskId, new_text: &str) -> Result<Task, TrackerError> {
        self.store.rename(id, new_text)
    }

    pub fn set_notes(&mut self, id: TaskId, notes: &str) -> Result<Task, TrackerError> {
        self.store.set_notes(id, notes)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, TrackerError> {
        let task = self.store.remove(id)?;
        if task.completed {
            self.ledger.decrement(task.created_at);
        }
        Ok(task)
    }

    pub fn list_by_day(&self, day: DateKey) -> Vec<Task> {
        self.store.list_by_day(day)
    }

    pub fn completions_on(&self, day: DateKey) -> u64 {
        self.ledger.get(day)
    }
}
