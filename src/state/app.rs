use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use lru::LruCache;
use parking_lot::RwLock;

use crate::advice::cache::CachedAdvice;
use crate::metrics::Metrics;
use crate::planner;
use crate::stats::{compute_stats, Stats};
use crate::subjects::model::{Difficulty, Subject};
use crate::tasks::model::{Task, TaskStatus};

/// Application-wide state container.
/// All mutable state is centralized here and passed explicitly to
/// consuming views; mutation is funneled through the named operations
/// below so stats are always recomputed in lockstep with the task list.
#[derive(Clone)]
pub struct AppState {
    /// Available study hours per day
    pub daily_hours: Arc<RwLock<f64>>,
    /// Configured subjects
    pub subjects: Arc<RwLock<Vec<Subject>>>,
    /// Current week of study blocks (fully replaced on regeneration)
    pub tasks: Arc<RwLock<Vec<Task>>>,
    /// First day of the current plan, None until a plan is generated
    plan_start: Arc<RwLock<Option<String>>>,
    /// Derived performance stats, kept in sync with `tasks`
    pub stats: Arc<RwLock<Stats>>,
    /// Latest coaching text (fallback text when the advice call fails)
    pub advice: Arc<RwLock<String>>,
    /// Monotonic advice request sequence; a response is applied only if
    /// its sequence is still the newest, so overlapping requests cannot
    /// let a stale response overwrite a fresher one
    advice_seq: Arc<AtomicU64>,
    /// Advice response cache (LRU with bounded size)
    pub advice_cache: Arc<RwLock<LruCache<u64, CachedAdvice>>>,
    /// Operational counters
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(daily_hours: f64) -> Self {
        AppState {
            daily_hours: Arc::new(RwLock::new(daily_hours)),
            subjects: Arc::new(RwLock::new(Vec::new())),
            tasks: Arc::new(RwLock::new(Vec::new())),
            plan_start: Arc::new(RwLock::new(None)),
            stats: Arc::new(RwLock::new(Stats::default())),
            advice: Arc::new(RwLock::new(String::new())),
            advice_seq: Arc::new(AtomicU64::new(0)),
            advice_cache: Arc::new(RwLock::new(
                LruCache::new(NonZeroUsize::new(64).expect("64 > 0")),
            )),
            metrics: Metrics::new(),
        }
    }

    // --- subjects ---

    /// Create and register a subject. Incidence defaults from the
    /// lookup table when omitted. Returns a copy of the stored subject.
    pub fn add_subject<S: Into<String>>(
        &self,
        name: S,
        weight: u8,
        difficulty: Difficulty,
        incidence: Option<f64>,
    ) -> Subject {
        let subject = Subject::new(name, weight, difficulty, incidence);
        tracing::info!(
            subject = %subject.name,
            weight = subject.weight,
            incidence = subject.incidence,
            "Subject added"
        );
        self.subjects.write().push(subject.clone());
        subject
    }

    /// Remove a subject by id. Existing tasks keep their name snapshot.
    /// Returns false if no subject had that id.
    pub fn remove_subject(&self, subject_id: &str) -> bool {
        let mut subjects = self.subjects.write();
        let before = subjects.len();
        subjects.retain(|s| s.id != subject_id);
        before != subjects.len()
    }

    pub fn get_subjects(&self) -> Vec<Subject> {
        self.subjects.read().clone()
    }

    // --- plan ---

    pub fn set_daily_hours(&self, hours: f64) {
        *self.daily_hours.write() = hours;
    }

    pub fn get_daily_hours(&self) -> f64 {
        *self.daily_hours.read()
    }

    /// Regenerate the weekly plan starting from today. The previous
    /// task list and its completion history are discarded by design.
    /// No-op (returns false) when no subjects are configured.
    pub fn generate_plan(&self) -> bool {
        self.generate_plan_from(chrono::Local::now().date_naive())
    }

    /// Regenerate the weekly plan starting from an explicit date.
    pub fn generate_plan_from(&self, start: NaiveDate) -> bool {
        let subjects = self.subjects.read().clone();
        if subjects.is_empty() {
            tracing::debug!("generate_plan called with no subjects, leaving tasks untouched");
            return false;
        }

        let daily_hours = *self.daily_hours.read();
        let new_tasks = planner::generate_week_from(daily_hours, &subjects, start);

        *self.tasks.write() = new_tasks;
        *self.plan_start.write() = Some(start.format("%Y-%m-%d").to_string());
        self.recompute_stats();
        self.metrics.record_plan_generated();
        true
    }

    /// First day of the current plan, None until a plan is generated.
    pub fn get_plan_start(&self) -> Option<String> {
        self.plan_start.read().clone()
    }

    /// Restore the plan start date (snapshot restore).
    pub fn set_plan_start(&self, start: Option<String>) {
        *self.plan_start.write() = start;
    }

    pub fn get_tasks(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    /// Replace the task list wholesale (snapshot restore).
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        *self.tasks.write() = tasks;
        self.recompute_stats();
    }

    // --- task updates ---

    /// Apply a status update to one task. Terminal states are never
    /// left; an update against a completed or skipped task is ignored.
    /// Completing without accuracy records explicit 0. Returns whether
    /// the update was applied.
    pub fn update_task(
        &self,
        task_id: &str,
        status: TaskStatus,
        accuracy: Option<u8>,
    ) -> bool {
        let applied = {
            let mut tasks = self.tasks.write();
            match tasks.iter_mut().find(|t| t.id == task_id) {
                Some(task) => match status {
                    TaskStatus::Completed => task.complete(accuracy),
                    TaskStatus::Skipped => task.skip(),
                    TaskStatus::Pending => {
                        tracing::debug!(task_id = task_id, "Ignoring update back to pending");
                        false
                    }
                },
                None => {
                    tracing::warn!(task_id = task_id, "Task not found for update");
                    false
                }
            }
        };

        if applied {
            self.recompute_stats();
            self.metrics.record_task_update();
        }
        applied
    }

    // --- stats ---

    pub fn get_stats(&self) -> Stats {
        *self.stats.read()
    }

    fn recompute_stats(&self) {
        let stats = compute_stats(&self.tasks.read());
        *self.stats.write() = stats;
    }

    // --- advice ordering ---

    /// Start an advice request and get its sequence number.
    pub fn begin_advice_request(&self) -> u64 {
        self.advice_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply an advice response only if it belongs to the newest
    /// request. Stale responses are discarded and logged.
    pub fn try_apply_advice(&self, seq: u64, text: String) -> bool {
        if seq != self.advice_seq.load(Ordering::SeqCst) {
            tracing::debug!(seq = seq, "Discarding stale advice response");
            return false;
        }
        *self.advice.write() = text;
        true
    }

    pub fn current_advice(&self) -> String {
        self.advice.read().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(4.0)
    }
}
