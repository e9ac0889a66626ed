use crate::tracker::Tracker;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, tracker: Tracker) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
