pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod summary;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_tracker, resolve_data_path};
