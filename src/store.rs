//! Task Store.
//!
//! # Responsibility
//! - Own every task, in insertion order.
//! - Validate and apply task commands atomically.
//!
//! # Invariants
//! - `id` is unique and increases with every created task.
//! - `created_at` is set once by `add_task` and never rewritten.
//! - The store never touches the completion ledger; `toggle_complete` and
//!   `remove` hand back what the caller needs to update it.

use crate::date_key::DateKey;
use crate::errors::TrackerError;
use crate::models::{Task, TaskId, Transition};

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from persisted tasks, keeping their order.
    ///
    /// New ids continue after the largest loaded id.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|task| task.id.saturating_add(1))
            .max()
            .unwrap_or_default();
        Self { tasks, next_id }
    }

    pub fn add_task(&mut self, text: &str, day: DateKey) -> Result<Task, TrackerError> {
        let text = validated_text(text)?;
        let task = Task {
            id: self.next_id,
            text,
            completed: false,
            created_at: day,
            notes: String::new(),
        };
        self.next_id = self.next_id.saturating_add(1);
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> Result<(Task, Transition), TrackerError> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        let transition = if task.completed {
            Transition::BecameComplete
        } else {
            Transition::BecameIncomplete
        };
        Ok((task.clone(), transition))
    }

    pub fn rename(&mut self, id: TaskId, new_text: &str) -> Result<Task, TrackerError> {
        let text = validated_text(new_text)?;
        let task = self.find_mut(id)?;
        task.text = text;
        Ok(task.clone())
    }

    /// Notes are stored verbatim; blank notes are allowed.
    pub fn set_notes(&mut self, id: TaskId, notes: &str) -> Result<Task, TrackerError> {
        let task = self.find_mut(id)?;
        task.notes = notes.to_string();
        Ok(task.clone())
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, TrackerError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TrackerError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn list_by_day(&self, day: DateKey) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.created_at == day)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, TrackerError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TrackerError::NotFound(id))
    }
}

fn validated_text(raw: &str) -> Result<String, TrackerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(
            "task text must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
