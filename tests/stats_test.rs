use mentoria::stats::{compute_stats, goal_fulfillment, ACCURACY_WEIGHT, EXECUTION_WEIGHT};
use mentoria::subjects::model::random_id;
use mentoria::tasks::model::{Task, TaskStatus};

fn task(status: TaskStatus, accuracy: Option<u8>) -> Task {
    Task {
        id: random_id(),
        subject_id: "subj1".to_string(),
        subject_name: "Português".to_string(),
        duration_minutes: 45,
        status,
        accuracy,
        date: "2026-08-24".to_string(),
    }
}

#[test]
fn test_empty_task_list_yields_zero_stats() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.execution_rate, 0.0);
    assert_eq!(stats.accuracy_rate, 0.0);
    assert_eq!(stats.goal_fulfillment, 0.0);
}

#[test]
fn test_worked_example() {
    // 2 of 4 completed (80% and 40% accuracy), 1 skipped, 1 pending
    let tasks = vec![
        task(TaskStatus::Completed, Some(80)),
        task(TaskStatus::Completed, Some(40)),
        task(TaskStatus::Skipped, None),
        task(TaskStatus::Pending, None),
    ];
    let stats = compute_stats(&tasks);

    assert!((stats.execution_rate - 50.0).abs() < 1e-9);
    assert!((stats.accuracy_rate - 60.0).abs() < 1e-9);
    // 50 × 0.7 + 60 × 0.3 = 53
    assert!((stats.goal_fulfillment - 53.0).abs() < 1e-9);
}

#[test]
fn test_missing_accuracy_counts_as_zero() {
    let tasks = vec![
        task(TaskStatus::Completed, Some(100)),
        task(TaskStatus::Completed, None),
    ];
    let stats = compute_stats(&tasks);
    assert!((stats.execution_rate - 100.0).abs() < 1e-9);
    assert!((stats.accuracy_rate - 50.0).abs() < 1e-9);
}

#[test]
fn test_goal_fulfillment_is_clamped_at_100() {
    assert_eq!(goal_fulfillment(150.0, 150.0), 100.0);
    assert_eq!(goal_fulfillment(100.0, 100.0), 100.0);
    assert!((goal_fulfillment(50.0, 60.0) - 53.0).abs() < 1e-9);
}

#[test]
fn test_policy_weights_sum_to_one() {
    assert!((EXECUTION_WEIGHT + ACCURACY_WEIGHT - 1.0).abs() < 1e-9);
}

#[test]
fn test_compute_stats_is_deterministic() {
    let tasks = vec![
        task(TaskStatus::Completed, Some(70)),
        task(TaskStatus::Skipped, None),
        task(TaskStatus::Pending, None),
    ];
    assert_eq!(compute_stats(&tasks), compute_stats(&tasks));
}

#[test]
fn test_skipped_tasks_do_not_count_toward_accuracy() {
    let tasks = vec![
        task(TaskStatus::Completed, Some(90)),
        task(TaskStatus::Skipped, Some(10)), // degenerate input, still excluded
    ];
    let stats = compute_stats(&tasks);
    assert!((stats.accuracy_rate - 90.0).abs() < 1e-9);
}
