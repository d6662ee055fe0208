use serde::{Serialize, Deserialize};

use crate::tasks::model::{Task, TaskStatus};

/// Policy blend for goal fulfillment: execution counts for 70% and
/// question accuracy for 30%.
pub const EXECUTION_WEIGHT: f64 = 0.7;
pub const ACCURACY_WEIGHT: f64 = 0.3;

/// Derived performance percentages, all in [0, 100]. Never stored
/// independently; recomputed in full from the task list on every
/// mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub execution_rate: f64,
    pub accuracy_rate: f64,
    pub goal_fulfillment: f64,
}

/// Compute aggregate stats over the full task list. Pure and O(n):
/// cheap enough to run on every task status change.
///
/// - execution rate: completed / total × 100 (0 for an empty list)
/// - accuracy rate: mean accuracy over completed tasks, missing
///   accuracy counting as 0 (0 when nothing is completed)
/// - goal fulfillment: weighted blend, clamped at 100
pub fn compute_stats(tasks: &[Task]) -> Stats {
    if tasks.is_empty() {
        return Stats::default();
    }

    let completed: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .collect();

    let execution_rate = completed.len() as f64 / tasks.len() as f64 * 100.0;

    let accuracy_rate = if completed.is_empty() {
        0.0
    } else {
        let total_accuracy: f64 = completed
            .iter()
            .map(|t| t.accuracy.unwrap_or(0) as f64)
            .sum();
        total_accuracy / completed.len() as f64
    };

    Stats {
        execution_rate,
        accuracy_rate,
        goal_fulfillment: goal_fulfillment(execution_rate, accuracy_rate),
    }
}

/// Weighted blend of the two rates, clamped at 100.
pub fn goal_fulfillment(execution_rate: f64, accuracy_rate: f64) -> f64 {
    (execution_rate * EXECUTION_WEIGHT + accuracy_rate * ACCURACY_WEIGHT).min(100.0)
}
