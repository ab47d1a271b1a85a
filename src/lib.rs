pub mod app;
pub mod config;
pub mod date_key;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use date_key::{from_key, to_key, DateKey};
pub use errors::TrackerError;
pub use grid::generate;
pub use ledger::CompletionLedger;
pub use state::AppState;
pub use storage::load_tracker;
pub use store::TaskStore;
pub use tracker::Tracker;
