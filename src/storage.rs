use crate::errors::AppError;
use crate::models::Snapshot;
use crate::tracker::Tracker;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

/// Loads the saved tracker; a missing or unreadable file yields an empty one.
pub async fn load_tracker(path: &Path) -> Tracker {
    let tracker = Tracker::from_snapshot(load_snapshot(path).await);
    if !tracker.ledger_is_consistent() {
        warn!(
            "completion counts in {} disagree with saved task states",
            path.display()
        );
    }
    tracker
}

pub async fn load_snapshot(path: &Path) -> Snapshot {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!("failed to parse data file: {err}");
                set_aside(path).await;
                Snapshot::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Snapshot::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Snapshot::default()
        }
    }
}

/// Moves an unreadable data file to `<name>.corrupt` so the next save cannot overwrite it.
async fn set_aside(path: &Path) {
    let mut aside = path.as_os_str().to_owned();
    aside.push(".corrupt");
    match fs::rename(path, &aside).await {
        Ok(()) => warn!("moved unreadable data file to {}", Path::new(&aside).display()),
        Err(err) => error!("failed to move unreadable data file aside: {err}"),
    }
}

pub async fn persist_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(snapshot).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_key::DateKey;
    use std::path::PathBuf;

    fn unique_path(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("task_tracker_{label}_{}_{nanos}.json", std::process::id()));
        path
    }

    fn day(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let tracker = load_tracker(&unique_path("missing")).await;
        assert!(tracker.store().is_empty());
        assert!(tracker.ledger().counts().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty_and_is_kept_aside() {
        let path = unique_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        assert_eq!(load_snapshot(&path).await, Snapshot::default());

        let mut aside = path.clone().into_os_string();
        aside.push(".corrupt");
        assert_eq!(fs::read(&aside).await.unwrap(), b"{ not json");
        assert!(fs::metadata(&path).await.is_err());

        persist_snapshot(&path, &Snapshot::default()).await.unwrap();
        assert_eq!(fs::read(&aside).await.unwrap(), b"{ not json");
        let _ = fs::remove_file(&path).await;
        let _ = fs::remove_file(&aside).await;
    }

    #[tokio::test]
    async fn saved_state_loads_back() {
        let path = unique_path("saved");
        let mut tracker = Tracker::new();
        let task = tracker.add_task("Buy milk", day("2024-06-01")).unwrap();
        tracker.toggle_complete(task.id).unwrap();
        tracker.set_notes(task.id, "2%").unwrap();

        persist_snapshot(&path, &tracker.export()).await.unwrap();
        let loaded = load_tracker(&path).await;
        assert_eq!(loaded.export(), tracker.export());
        assert_eq!(loaded.completions_on(day("2024-06-01")), 1);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn saved_file_uses_exported_shape() {
        let path = unique_path("shape");
        let mut tracker = Tracker::new();
        tracker.add_task("read", day("2024-06-01")).unwrap();
        persist_snapshot(&path, &tracker.export()).await.unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        let task = &raw["tasks"][0];
        assert_eq!(task["text"], "read");
        assert_eq!(task["completed"], false);
        assert_eq!(task["createdAt"], "2024-06-01");
        assert_eq!(task["notes"], "");
        assert!(raw["completion_data"].is_object());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn tasks_without_notes_still_load() {
        let path = unique_path("legacy");
        let body = r#"{
            "tasks": [{"id": 1717200000000, "text": "old", "completed": true, "createdAt": "2024-06-01"}],
            "completion_data": {"2024-06-01": 1}
        }"#;
        fs::write(&path, body).await.unwrap();

        let tracker = load_tracker(&path).await;
        let tasks = tracker.list_by_day(day("2024-06-01"));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].notes, "");
        assert!(tracker.ledger_is_consistent());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn drifted_counts_load_as_saved() {
        let path = unique_path("drift");
        let body = r#"{
            "tasks": [
                {"id": 1, "text": "done", "completed": true, "createdAt": "2024-06-01", "notes": ""},
                {"id": 2, "text": "open", "completed": false, "createdAt": "2024-06-02", "notes": ""}
            ],
            "completion_data": {"2024-06-01": 0, "2024-06-02": 2}
        }"#;
        fs::write(&path, body).await.unwrap();

        let tracker = load_tracker(&path).await;
        assert_eq!(tracker.completions_on(day("2024-06-01")), 0);
        assert_eq!(tracker.completions_on(day("2024-06-02")), 2);
        assert_eq!(tracker.store().len(), 2);
        assert!(!tracker.ledger_is_consistent());
        let _ = fs::remove_file(&path).await;
    }
}
