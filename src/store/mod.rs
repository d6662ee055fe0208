use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::error::MentoriaError;
use crate::state::app::AppState;
use crate::subjects::model::Subject;
use crate::tasks::model::Task;

/// Everything needed to restore a session: hours, subjects, the plan's
/// start date and the current week of tasks. Accuracy and status
/// round-trip losslessly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub daily_hours: f64,
    /// First day of the current plan, None before any generation
    pub start_date: Option<String>,
    pub subjects: Vec<Subject>,
    pub tasks: Vec<Task>,
    pub saved_at: i64,
}

pub fn get_snapshot_path() -> PathBuf {
    // Use platform-specific app data directory
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support/com.mentoria.app");
            dir.push("data");
            dir.push("plan.json");
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push("com.mentoria.app");
            dir.push("data");
            dir.push("plan.json");
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share/com.mentoria.app");
            dir.push("data");
            dir.push("plan.json");
            return dir;
        }
    }

    // Fallback
    PathBuf::from("data/plan.json")
}

/// Capture the current session state.
pub fn snapshot_from_state(state: &AppState) -> PlanSnapshot {
    PlanSnapshot {
        daily_hours: state.get_daily_hours(),
        start_date: state.get_plan_start(),
        subjects: state.get_subjects(),
        tasks: state.get_tasks(),
        saved_at: chrono::Utc::now().timestamp(),
    }
}

/// Restore a snapshot into state. Stats are recomputed from the loaded
/// task list rather than trusted from disk.
pub fn apply_snapshot(state: &AppState, snapshot: PlanSnapshot) {
    state.set_daily_hours(snapshot.daily_hours);
    state.set_plan_start(snapshot.start_date);
    *state.subjects.write() = snapshot.subjects;
    state.set_tasks(snapshot.tasks);
}

/// Save a plan snapshot asynchronously
pub async fn save(snapshot: &PlanSnapshot) -> Result<(), MentoriaError> {
    let path = get_snapshot_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| MentoriaError::from(e).with_context(format!("path: {:?}", parent)))?;
    }

    let json = serde_json::to_string_pretty(snapshot)?;

    tokio::fs::write(&path, json)
        .await
        .map_err(|e| MentoriaError::from(e).with_context(format!("path: {:?}", path)))?;

    Ok(())
}

/// Load the plan snapshot asynchronously; Ok(None) when no snapshot
/// has been saved yet.
pub async fn load() -> Result<Option<PlanSnapshot>, MentoriaError> {
    let path = get_snapshot_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => {
            let snapshot = serde_json::from_str(&content)
                .map_err(|e| MentoriaError::from(e).with_context(format!("path: {:?}", path)))?;
            Ok(Some(snapshot))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MentoriaError::from(e).with_context(format!("path: {:?}", path))),
    }
}
