use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/days/:date", get(handlers::get_day))
        .route("/api/tasks", post(handlers::add_task))
        .route("/api/tasks/:id", put(handlers::rename_task).delete(handlers::remove_task))
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/tasks/:id/notes", put(handlers::set_notes))
        .route("/api/completions/:date", get(handlers::get_completions))
        .route("/api/activity", get(handlers::get_activity))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/export", get(handlers::export))
        .with_state(state)
}
