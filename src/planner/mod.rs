use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

use crate::subjects::model::{random_id, Subject};
use crate::tasks::model::{Task, TaskStatus};

/// Fixed study-block length under current policy.
pub const BLOCK_MINUTES: u32 = 45;
/// A plan always covers 7 consecutive calendar days.
pub const PLAN_DAYS: u32 = 7;

/// Number of blocks that fit in the available daily hours.
/// Less than one block's worth of time yields zero blocks, not an error.
pub fn blocks_per_day(daily_hours: f64) -> u32 {
    if daily_hours <= 0.0 {
        return 0;
    }
    ((daily_hours * 60.0) / BLOCK_MINUTES as f64).floor() as u32
}

/// Generate a week of study blocks starting from today.
pub fn generate_week(daily_hours: f64, subjects: &[Subject]) -> Vec<Task> {
    generate_week_from(daily_hours, subjects, Local::now().date_naive())
}

/// Generate a week of study blocks starting from `start`.
///
/// Each block is an independent weighted-roulette draw over the subject
/// priority scores: the cumulative score array is built once per call,
/// one uniform draw in [0, total) selects the subject whose cumulative
/// range contains it, and the first subject absorbs any floating-point
/// edge case. When every subject has zero score (all incidences zero)
/// selection falls back to uniform so no division by zero can occur.
///
/// An empty subject list yields an empty plan; the state layer treats
/// that as a no-op rather than replacing the current task list.
pub fn generate_week_from(daily_hours: f64, subjects: &[Subject], start: NaiveDate) -> Vec<Task> {
    if subjects.is_empty() {
        tracing::debug!("No subjects configured, skipping plan generation");
        return Vec::new();
    }

    let blocks = blocks_per_day(daily_hours);
    let wheel = cumulative_scores(subjects);
    let total = wheel.last().copied().unwrap_or(0.0);

    if total <= 0.0 {
        tracing::debug!("Total subject score is zero, using uniform selection");
    }

    let mut rng = rand::thread_rng();
    let mut tasks = Vec::with_capacity((blocks * PLAN_DAYS) as usize);

    for d in 0..PLAN_DAYS {
        let date = start + Duration::days(d as i64);
        let date_str = date.format("%Y-%m-%d").to_string();

        for _ in 0..blocks {
            let idx = if total > 0.0 {
                let draw = rng.gen_range(0.0..total);
                wheel
                    .iter()
                    .position(|&cum| draw < cum)
                    .unwrap_or(0)
            } else {
                rng.gen_range(0..subjects.len())
            };
            let subject = &subjects[idx];

            tasks.push(Task {
                id: random_id(),
                subject_id: subject.id.clone(),
                subject_name: subject.name.clone(),
                duration_minutes: BLOCK_MINUTES,
                status: TaskStatus::Pending,
                accuracy: None,
                date: date_str.clone(),
            });
        }
    }

    tracing::info!(
        task_count = tasks.len(),
        blocks_per_day = blocks,
        subject_count = subjects.len(),
        start_date = %start,
        "Generated weekly plan"
    );

    tasks
}

/// Running cumulative sum of subject scores, aligned with `subjects`.
fn cumulative_scores(subjects: &[Subject]) -> Vec<f64> {
    let mut cumulative = 0.0;
    subjects
        .iter()
        .map(|s| {
            cumulative += s.score();
            cumulative
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subjects::model::Difficulty;

    #[test]
    fn cumulative_scores_are_monotonic() {
        let subjects = vec![
            Subject::new("Português", 3, Difficulty::Medium, Some(15.5)),
            Subject::new("Matemática", 5, Difficulty::Hard, Some(8.2)),
            Subject::new("Inglês", 1, Difficulty::Easy, Some(4.0)),
        ];
        let wheel = cumulative_scores(&subjects);
        assert_eq!(wheel.len(), 3);
        assert!(wheel[0] < wheel[1] && wheel[1] < wheel[2]);
        let expected_total: f64 = subjects.iter().map(|s| s.score()).sum();
        assert!((wheel[2] - expected_total).abs() < 1e-9);
    }

    #[test]
    fn blocks_per_day_floors() {
        assert_eq!(blocks_per_day(4.0), 5); // 240 / 45
        assert_eq!(blocks_per_day(0.75), 1);
        assert_eq!(blocks_per_day(0.5), 0);
        assert_eq!(blocks_per_day(0.0), 0);
        assert_eq!(blocks_per_day(-1.0), 0);
    }
}
