use crate::date_key::DateKey;
use crate::errors::AppError;
use crate::grid::generate;
use crate::models::{
    ActivityGrid, CompletionCountResponse, DaySummary, NotesRequest, Snapshot, StatsResponse,
    Task, TaskId, TaskTextRequest, TodayResponse, ToggleResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats, day_summary};
use crate::storage::persist_snapshot;
use crate::tracker::Tracker;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{debug, error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = DateKey::today();
    let tracker = state.tracker.lock().await;
    let tasks = tracker.list_by_day(today);
    Html(render_index(today, &tasks))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let today = DateKey::today();
    let tracker = state.tracker.lock().await;
    let tasks = tracker.list_by_day(today);
    Json(TodayResponse {
        date: today,
        completed: tasks.iter().filter(|task| task.completed).count(),
        total: tasks.len(),
        tasks,
    })
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DaySummary>, AppError> {
    let day: DateKey = date.parse()?;
    let tracker = state.tracker.lock().await;
    Ok(Json(day_summary(day, &tracker)))
}

pub async fn get_completions(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<CompletionCountResponse>, AppError> {
    let day: DateKey = date.parse()?;
    let tracker = state.tracker.lock().await;
    Ok(Json(CompletionCountResponse {
        date: day,
        count: tracker.completions_on(day),
    }))
}

pub async fn get_activity(State(state): State<AppState>) -> Json<ActivityGrid> {
    let today = DateKey::today();
    let tracker = state.tracker.lock().await;
    Json(generate(today.date(), tracker.ledger()))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let tracker = state.tracker.lock().await;
    Json(build_stats(&tracker))
}

pub async fn export(State(state): State<AppState>) -> Json<Snapshot> {
    let tracker = state.tracker.lock().await;
    Json(tracker.export())
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskTextRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let today = DateKey::today();
    let mut tracker = state.tracker.lock().await;
    let task = tracker.add_task(&payload.text, today)?;
    info!(id = task.id, day = %task.created_at, "task added");
    save(&state, &tracker).await;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let (task, transition) = tracker.toggle_complete(id)?;
    let count = tracker.completions_on(task.created_at);
    debug!(id, ?transition, count, "task toggled");
    save(&state, &tracker).await;
    Ok(Json(ToggleResponse {
        task,
        transition,
        count,
    }))
}

pub async fn rename_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(payload): Json<TaskTextRequest>,
) -> Result<Json<Task>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let task = tracker.rename(id, &payload.text)?;
    save(&state, &tracker).await;
    Ok(Json(task))
}

pub async fn set_notes(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(payload): Json<NotesRequest>,
) -> Result<Json<Task>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let task = tracker.set_notes(id, &payload.notes)?;
    save(&state, &tracker).await;
    Ok(Json(task))
}

pub async fn remove_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let task = tracker.remove(id)?;
    info!(id, completed = task.completed, "task removed");
    save(&state, &tracker).await;
    Ok(Json(task))
}

// In-memory state stays authoritative when the write fails.
async fn save(state: &AppState, tracker: &Tracker) {
    if let Err(err) = persist_snapshot(&state.data_path, &tracker.export()).await {
        error!("failed to save data file: {}", err.message);
    }
}
