use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/meal/add", post(handlers::add_meal_form))
        .route("/workout/add", post(handlers::add_workout_form))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/items", get(handlers::get_items))
        .route("/api/meal", post(handlers::add_meal))
        .route("/api/workout", post(handlers::add_workout))
        .route("/api/meal/:id", delete(handlers::remove_meal))
        .route("/api/workout/:id", delete(handlers::remove_workout))
        .route("/api/limit", post(handlers::set_limit))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
