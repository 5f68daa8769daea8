//! Progression systems
//!
//! XP rewards, level thresholds, and ELO rating updates.

pub mod levels;
pub mod rating;
pub mod xp;

pub use levels::{level_for_xp, level_title, next_level_xp, xp_for_level, MAX_LEVEL};
pub use rating::{expected_score, update_ratings, EloRating, RatingTuning, DEFAULT_RATING};
pub use xp::{compute_xp_reward, AttemptOutcome, PlayerProgress, XpReward, XpTuning};
