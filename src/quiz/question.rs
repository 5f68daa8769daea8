//! Questions, difficulty tiers, and the question bank
//!
//! The bank loads from an external RON file with fallback to hardcoded
//! defaults, so content can be edited without a rebuild.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::progression::rating::EloRating;

/// Question difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Base XP the reward formula scales from
    pub fn base_xp(&self) -> f64 {
        match self {
            Difficulty::Easy => 10.0,
            Difficulty::Medium => 20.0,
            Difficulty::Hard => 35.0,
        }
    }

    /// Seconds allotted before the speed bonus hits zero
    pub fn time_limit_secs(&self) -> f64 {
        match self {
            Difficulty::Easy => 20.0,
            Difficulty::Medium => 30.0,
            Difficulty::Hard => 45.0,
        }
    }

    /// Rating a fresh question of this tier starts at
    pub fn seed_rating(&self) -> f64 {
        match self {
            Difficulty::Easy => 1000.0,
            Difficulty::Medium => 1200.0,
            Difficulty::Hard => 1400.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One practice question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub answer: String,
    pub difficulty: Difficulty,
    /// Drifts with attempts; seeded per tier for new questions
    #[serde(default)]
    pub rating: EloRating,
}

impl Question {
    pub fn new(id: u32, prompt: &str, answer: &str, difficulty: Difficulty) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            difficulty,
            rating: EloRating::new(difficulty.seed_rating()),
        }
    }

    /// Whitespace-insensitive answer check
    pub fn check_answer(&self, given: &str) -> bool {
        given.trim() == self.answer.trim()
    }
}

/// Rating offset where practice is most useful: slightly above the player
const PICK_OFFSET: f64 = 75.0;
/// Spread of the selection weight around the target rating
const PICK_SPREAD: f64 = 150.0;

/// All loaded questions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Find a question by ID
    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    /// Get all questions of one tier
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .collect()
    }

    /// Sample a question weighted toward ratings just above `rating`.
    ///
    /// Weight falls off as a gaussian around `rating + PICK_OFFSET`, so a
    /// player mostly sees questions they can almost solve.
    pub fn pick_near<R: Rng>(&self, rating: f64, rng: &mut R) -> Option<&Question> {
        if self.questions.is_empty() {
            return None;
        }

        let target = rating + PICK_OFFSET;
        let weights: Vec<f64> = self
            .questions
            .iter()
            .map(|q| {
                let distance = q.rating.rating - target;
                (-distance * distance / (2.0 * PICK_SPREAD * PICK_SPREAD)).exp()
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= f64::EPSILON {
            // Everything is far from the target; fall back to uniform
            return self.questions.get(rng.gen_range(0..self.questions.len()));
        }

        let mut roll = rng.gen::<f64>() * total;
        for (question, weight) in self.questions.iter().zip(&weights) {
            roll -= weight;
            if roll <= 0.0 {
                return Some(question);
            }
        }
        self.questions.last()
    }

    /// Load the bank from a RON file, or use the built-in defaults
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(bank) => return bank,
                    Err(e) => log::warn!(
                        "Failed to parse {}: {}. Using default bank.",
                        path.display(),
                        e
                    ),
                },
                Err(e) => log::warn!(
                    "Failed to read {}: {}. Using default bank.",
                    path.display(),
                    e
                ),
            }
        }
        default_question_bank()
    }
}

/// Built-in arithmetic question set
pub fn default_question_bank() -> QuestionBank {
    use Difficulty::*;

    QuestionBank {
        questions: vec![
            Question::new(1, "7 + 5", "12", Easy),
            Question::new(2, "14 - 6", "8", Easy),
            Question::new(3, "9 + 8", "17", Easy),
            Question::new(4, "23 - 9", "14", Easy),
            Question::new(5, "6 * 7", "42", Medium),
            Question::new(6, "144 / 12", "12", Medium),
            Question::new(7, "13 * 4", "52", Medium),
            Question::new(8, "Solve for x: 3x + 5 = 20", "5", Medium),
            Question::new(9, "2^10", "1024", Hard),
            Question::new(10, "17 * 23", "391", Hard),
            Question::new(11, "Smaller root of x^2 - 9x + 20 = 0", "4", Hard),
            Question::new(12, "GCD of 84 and 126", "42", Hard),
        ],
    }
}
