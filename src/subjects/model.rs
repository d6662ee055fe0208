use serde::{Serialize, Deserialize};
use crate::config::incidence::default_incidence;

/// Difficulty level of a subject. The numeric factor feeds the
/// priority score used for weighted block selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn factor(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 2.0,
            Difficulty::Hard => 3.0,
        }
    }
}

/// A studied topic. Immutable after creation except full replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Importance, 1 to 5
    pub weight: u8,
    pub difficulty: Difficulty,
    /// Historical exam-frequency percentage, 0 to 100
    pub incidence: f64,
}

impl Subject {
    /// Create a subject with a fresh id. When `incidence` is None the
    /// default incidence table is consulted (unknown names get 5.0).
    pub fn new<S: Into<String>>(
        name: S,
        weight: u8,
        difficulty: Difficulty,
        incidence: Option<f64>,
    ) -> Self {
        let name = name.into();
        let incidence = incidence
            .unwrap_or_else(|| default_incidence(&name))
            .clamp(0.0, 100.0);
        Subject {
            id: random_id(),
            name,
            weight: weight.clamp(1, 5),
            difficulty,
            incidence,
        }
    }

    /// Priority score: weight × difficulty × incidence.
    /// Zero incidence means zero probability mass in the planner.
    pub fn score(&self) -> f64 {
        self.weight as f64 * self.difficulty.factor() * self.incidence
    }
}

/// 9-character alphanumeric opaque id, shared by subjects and tasks.
pub fn random_id() -> String {
    use rand::Rng;
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(9)
        .map(char::from)
        .collect()
}
