use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
    Skipped,
}

impl TaskStatus {
    /// Completed and Skipped are terminal: no update may leave them.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskStatus::Pending)
    }
}

/// One scheduled study block. `subject_name` is a snapshot taken at
/// generation time, not a live join, so removing or renaming a subject
/// later leaves past schedules readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub subject_id: String,
    pub subject_name: String,
    pub duration_minutes: u32,
    pub status: TaskStatus,
    /// Percentage of correct questions, present only once completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<u8>,
    /// ISO calendar date, YYYY-MM-DD
    pub date: String,
}

impl Task {
    /// Mark the task completed. Omitted accuracy records explicit 0 so
    /// no stale value can survive from an earlier state. Returns false
    /// without touching the task if it is already terminal.
    pub fn complete(&mut self, accuracy: Option<u8>) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = TaskStatus::Completed;
        self.accuracy = Some(accuracy.unwrap_or(0).min(100));
        true
    }

    /// Mark the task skipped. Returns false if already terminal.
    pub fn skip(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = TaskStatus::Skipped;
        self.accuracy = None;
        true
    }
}
