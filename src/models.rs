use crate::date_key::DateKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type TaskId = u64;

/// A task is filed under the day it was created and stays there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateKey,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    BecameComplete,
    BecameIncomplete,
}

/// Everything the persistence layer needs to rebuild a tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub completion_data: BTreeMap<DateKey, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCell {
    pub date: NaiveDate,
    pub date_key: DateKey,
    pub count: u64,
    pub is_future: bool,
    pub bucket: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityGrid {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub weeks: Vec<Vec<ActivityCell>>,
}

#[derive(Debug, Deserialize)]
pub struct TaskTextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub task: Task,
    pub transition: Transition,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionCountResponse {
    pub date: DateKey,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: DateKey,
    pub completed: usize,
    pub total: usize,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: DateKey,
    pub count: u64,
    pub completed: Vec<Task>,
    pub pending: Vec<Task>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub date: DateKey,
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OverallPoint {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub today: ProgressPoint,
    pub overall: OverallPoint,
}
