//! ELO-style skill rating
//!
//! Standard expected-score / K-factor update applied between a player and
//! the question they attempted. Question ratings move too, so the bank
//! drifts toward the difficulty players actually experience. Kept strictly
//! apart from the XP formula in [`xp`](crate::progression::xp): rewards
//! and ratings never mix.

use serde::{Deserialize, Serialize};

/// Rating every new player and mid-tier question starts at
pub const DEFAULT_RATING: f64 = 1200.0;

/// A rating together with the number of updates it has absorbed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EloRating {
    pub rating: f64,
    /// Attempts this rating has been updated on
    pub games: u32,
}

impl Default for EloRating {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            games: 0,
        }
    }
}

impl EloRating {
    pub fn new(rating: f64) -> Self {
        Self { rating, games: 0 }
    }

    /// K-factor for the next update; provisional ratings move faster
    fn k(&self, tuning: &RatingTuning) -> f64 {
        if self.games < tuning.provisional_games {
            tuning.k_factor * tuning.provisional_multiplier
        } else {
            tuning.k_factor
        }
    }
}

/// Tuning knobs for rating updates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatingTuning {
    pub k_factor: f64,
    /// Updates before a rating stops being provisional
    pub provisional_games: u32,
    /// K-factor inflation while provisional
    pub provisional_multiplier: f64,
}

/// Expected score of `a` against `b` on the logistic 400-point curve
pub fn expected_score(a: f64, b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((b - a) / 400.0))
}

/// Update player and question ratings after one attempt.
///
/// Returns the player's rating delta. The question side uses its own
/// K-factor, so the exchange is zero-sum only once both are settled.
pub fn update_ratings(
    player: &mut EloRating,
    question: &mut EloRating,
    correct: bool,
    tuning: &RatingTuning,
) -> f64 {
    let expected = expected_score(player.rating, question.rating);
    let actual = if correct { 1.0 } else { 0.0 };

    let delta = player.k(tuning) * (actual - expected);
    player.rating += delta;
    question.rating += question.k(tuning) * (expected - actual);

    player.games += 1;
    question.games += 1;

    delta
}
