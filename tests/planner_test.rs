use chrono::NaiveDate;
use std::collections::HashMap;

use mentoria::planner::{blocks_per_day, generate_week_from, BLOCK_MINUTES, PLAN_DAYS};
use mentoria::subjects::model::{Difficulty, Subject};
use mentoria::tasks::model::TaskStatus;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 24).expect("valid date")
}

fn sample_subjects() -> Vec<Subject> {
    vec![
        Subject::new("Português", 3, Difficulty::Medium, Some(15.5)),
        Subject::new("Direito Constitucional", 4, Difficulty::Hard, Some(12.0)),
        Subject::new("Direito Administrativo", 4, Difficulty::Medium, Some(11.5)),
    ]
}

#[test]
fn test_week_has_expected_task_count() {
    let subjects = sample_subjects();
    let tasks = generate_week_from(4.0, &subjects, start());

    // 4h → floor(240 / 45) = 5 blocks/day × 7 days
    assert_eq!(tasks.len(), (blocks_per_day(4.0) * PLAN_DAYS) as usize);
    assert_eq!(tasks.len(), 35);

    for task in &tasks {
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.duration_minutes, BLOCK_MINUTES);
        assert!(task.accuracy.is_none());
        assert!(
            subjects.iter().any(|s| s.id == task.subject_id && s.name == task.subject_name),
            "task must snapshot an existing subject"
        );
    }
}

#[test]
fn test_dates_cover_seven_days_in_order() {
    let subjects = sample_subjects();
    let tasks = generate_week_from(3.0, &subjects, start());

    let expected_dates: Vec<String> = (0..7)
        .map(|d| (start() + chrono::Duration::days(d)).format("%Y-%m-%d").to_string())
        .collect();

    for task in &tasks {
        assert!(expected_dates.contains(&task.date), "date {} outside window", task.date);
    }

    // Day-then-block order: dates are non-decreasing across the output
    let dates: Vec<&str> = tasks.iter().map(|t| t.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    // Each day carries exactly blocks_per_day tasks
    let mut per_day: HashMap<&str, usize> = HashMap::new();
    for task in &tasks {
        *per_day.entry(task.date.as_str()).or_insert(0) += 1;
    }
    assert_eq!(per_day.len(), 7);
    for count in per_day.values() {
        assert_eq!(*count, blocks_per_day(3.0) as usize);
    }
}

#[test]
fn test_under_one_block_of_hours_yields_empty_week() {
    let subjects = sample_subjects();
    // 0.5h = 30 min < one 45-min block
    let tasks = generate_week_from(0.5, &subjects, start());
    assert!(tasks.is_empty());
}

#[test]
fn test_empty_subject_list_yields_empty_week() {
    let tasks = generate_week_from(4.0, &[], start());
    assert!(tasks.is_empty());
}

#[test]
fn test_zero_incidence_subject_is_never_selected() {
    let subjects = vec![
        Subject::new("Matemática", 5, Difficulty::Hard, Some(10.0)),
        Subject::new("Inglês", 5, Difficulty::Hard, Some(0.0)),
    ];
    let dead_id = subjects[1].id.clone();

    for _ in 0..50 {
        let tasks = generate_week_from(6.0, &subjects, start());
        assert!(tasks.iter().all(|t| t.subject_id != dead_id));
    }
}

#[test]
fn test_zero_total_score_falls_back_to_uniform() {
    let subjects = vec![
        Subject::new("Matemática", 3, Difficulty::Medium, Some(0.0)),
        Subject::new("Inglês", 3, Difficulty::Medium, Some(0.0)),
    ];

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..30 {
        for task in generate_week_from(6.0, &subjects, start()) {
            *counts.entry(task.subject_id).or_insert(0) += 1;
        }
    }

    // Both zero-score subjects must receive blocks under the fallback
    assert_eq!(counts.len(), 2);
    for subject in &subjects {
        assert!(counts[&subject.id] > 0);
    }
}

#[test]
fn test_selection_converges_to_score_proportions() {
    // Scores 90 vs 30 → expected proportions 0.75 / 0.25
    let subjects = vec![
        Subject::new("Direito Penal", 3, Difficulty::Hard, Some(10.0)),
        Subject::new("Contabilidade", 3, Difficulty::Easy, Some(10.0)),
    ];
    let total: f64 = subjects.iter().map(|s| s.score()).sum();

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut draws = 0usize;
    // 12h → 16 blocks/day → 112 per week; 100 weeks ≈ 11_200 draws
    for _ in 0..100 {
        for task in generate_week_from(12.0, &subjects, start()) {
            *counts.entry(task.subject_id).or_insert(0) += 1;
            draws += 1;
        }
    }

    for subject in &subjects {
        let expected = subject.score() / total;
        let observed = counts.get(&subject.id).copied().unwrap_or(0) as f64 / draws as f64;
        assert!(
            (observed - expected).abs() < 0.03,
            "subject {} observed {:.3}, expected {:.3}",
            subject.name,
            observed,
            expected
        );
    }
}
