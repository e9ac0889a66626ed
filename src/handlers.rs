use crate::errors::AppError;
use crate::models::{
    Entry, EntryCreatedResponse, EntryKind, ItemsResponse, LimitRequest, NewEntryForm,
    NewEntryRequest, RemoveResponse, Summary,
};
use crate::state::AppState;
use crate::storage::persist_tracker;
use crate::summary::build_summary;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    Html(render_index(&tracker))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<Summary> {
    let tracker = state.tracker.lock().await;
    Json(build_summary(&tracker))
}

pub async fn get_items(State(state): State<AppState>) -> Json<ItemsResponse> {
    let tracker = state.tracker.lock().await;
    Json(ItemsResponse {
        meals: tracker.meals.clone(),
        workouts: tracker.workouts.clone(),
    })
}

pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<EntryCreatedResponse>, AppError> {
    let entry = validated_entry(&payload.name, payload.calories)?;
    let response = apply_add(&state, EntryKind::Meal, entry).await?;
    Ok(Json(response))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<EntryCreatedResponse>, AppError> {
    let entry = validated_entry(&payload.name, payload.calories)?;
    let response = apply_add(&state, EntryKind::Workout, entry).await?;
    Ok(Json(response))
}

pub async fn add_meal_form(
    State(state): State<AppState>,
    Form(form): Form<NewEntryForm>,
) -> Result<Redirect, AppError> {
    let entry = validated_entry(&form.name, parse_calories_field(&form.calories)?)?;
    apply_add(&state, EntryKind::Meal, entry).await?;
    Ok(Redirect::to("/"))
}

pub async fn add_workout_form(
    State(state): State<AppState>,
    Form(form): Form<NewEntryForm>,
) -> Result<Redirect, AppError> {
    let entry = validated_entry(&form.name, parse_calories_field(&form.calories)?)?;
    apply_add(&state, EntryKind::Workout, entry).await?;
    Ok(Redirect::to("/"))
}

pub async fn remove_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>, AppError> {
    let response = apply_remove(&state, EntryKind::Meal, &id).await?;
    Ok(Json(response))
}

pub async fn remove_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>, AppError> {
    let response = apply_remove(&state, EntryKind::Workout, &id).await?;
    Ok(Json(response))
}

pub async fn set_limit(
    State(state): State<AppState>,
    Json(payload): Json<LimitRequest>,
) -> Result<Json<Summary>, AppError> {
    if payload.limit < 1 {
        return Err(AppError::bad_request(
            "calorie limit must be a positive whole number",
        ));
    }

    let mut tracker = state.tracker.lock().await;
    tracker.set_limit(payload.limit);
    persist_tracker(&state.data_path, &tracker).await?;
    Ok(Json(build_summary(&tracker)))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<Summary>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.reset();
    persist_tracker(&state.data_path, &tracker).await?;
    Ok(Json(build_summary(&tracker)))
}

async fn apply_add(
    state: &AppState,
    kind: EntryKind,
    entry: Entry,
) -> Result<EntryCreatedResponse, AppError> {
    let mut tracker = state.tracker.lock().await;
    match kind {
        EntryKind::Meal => tracker.add_meal(entry.clone()),
        EntryKind::Workout => tracker.add_workout(entry.clone()),
    }

    persist_tracker(&state.data_path, &tracker).await?;

    Ok(EntryCreatedResponse {
        entry,
        summary: build_summary(&tracker),
    })
}

async fn apply_remove(
    state: &AppState,
    kind: EntryKind,
    id: &str,
) -> Result<RemoveResponse, AppError> {
    let mut tracker = state.tracker.lock().await;
    let removed = match kind {
        EntryKind::Meal => tracker.remove_meal(id),
        EntryKind::Workout => tracker.remove_workout(id),
    };

    if removed {
        persist_tracker(&state.data_path, &tracker).await?;
    }

    Ok(RemoveResponse {
        removed,
        summary: build_summary(&tracker),
    })
}

fn validated_entry(name: &str, calories: i64) -> Result<Entry, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("please fill in all fields"));
    }
    if calories < 0 || calories > i64::from(u32::MAX) {
        return Err(AppError::bad_request(
            "calories must be a non-negative whole number",
        ));
    }

    Ok(Entry::new(name, calories as u32))
}

fn parse_calories_field(raw: &str) -> Result<i64, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::bad_request("please fill in all fields"));
    }
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request("calories must be a non-negative whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let err = validated_entry("   ", 200).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn negative_calories_are_rejected_not_coerced() {
        let err = validated_entry("Snack", -50).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn valid_input_builds_a_trimmed_entry_with_a_hex_id() {
        let entry = validated_entry("  Salad  ", 180).unwrap();
        assert_eq!(entry.name, "Salad");
        assert_eq!(entry.calories, 180);
        assert_eq!(entry.id.len(), 32);
        assert!(entry.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn calories_form_field_must_be_numeric() {
        assert!(parse_calories_field("abc").is_err());
        assert!(parse_calories_field("").is_err());
        assert_eq!(parse_calories_field(" 250 ").unwrap(), 250);
    }
}
