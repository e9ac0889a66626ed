use crate::errors::AppError;
use crate::tracker::Tracker;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    match env::var("TRACKER_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/tracker.json"),
    }
}

/// Loads the tracker from disk, falling back to the default on a missing or
/// unreadable file. The running total is rebuilt from the entry lists rather
/// than trusted from the file.
pub async fn load_tracker(path: &Path) -> Tracker {
    let mut tracker = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(tracker) => tracker,
            Err(err) => {
                error!("failed to parse tracker file: {err}");
                Tracker::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Tracker::default(),
        Err(err) => {
            error!("failed to read tracker file: {err}");
            Tracker::default()
        }
    };
    tracker.recompute_total();
    tracker
}

pub async fn persist_tracker(path: &Path, tracker: &Tracker) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(tracker)?;
    fs::write(path, payload).await?;
    Ok(())
}
