use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged item: a meal or a workout. The two are structurally
/// identical; which tracker list holds an entry decides the sign of its
/// calorie contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub logged_at: DateTime<Local>,
}

impl Entry {
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            calories,
            logged_at: Local::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Meal,
    Workout,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Meal => "meal",
            EntryKind::Workout => "workout",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub name: String,
    pub calories: i64,
}

/// Form fields arrive as raw text; the handler parses calories itself so a
/// blank or non-numeric value gets a 400 instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    pub name: String,
    pub calories: String,
}

#[derive(Debug, Deserialize)]
pub struct LimitRequest {
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_calories: i64,
    pub calorie_limit: i64,
    pub consumed: i64,
    pub burned: i64,
    pub remaining: i64,
    pub progress_pct: f64,
    pub bar_width_pct: f64,
    pub over_limit: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub meals: Vec<Entry>,
    pub workouts: Vec<Entry>,
}

#[derive(Debug, Serialize)]
pub struct EntryCreatedResponse {
    pub entry: Entry,
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
    pub summary: Summary,
}
