//! Eloquest - a gamified math practice engine
//!
//! Players answer timed arithmetic questions, earn XP through a
//! four-term reward formula, and climb an ELO-style rating ladder.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod progression;
pub mod quiz;
pub mod save;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::EngineError;
pub use progression::xp::{compute_xp_reward, AttemptOutcome, PlayerProgress, XpReward, XpTuning};
pub use quiz::session::{AttemptSummary, PracticeSession};
pub use save::profile::PlayerProfile;
