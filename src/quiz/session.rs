//! Practice session flow
//!
//! Wires the pure pieces to a player profile: grade an answer, compute
//! the XP reward, credit it, process level-ups, and update ratings.
//! Persistence stays with the caller; nothing here touches storage.

use log::{debug, info};
use rand::Rng;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::progression::levels;
use crate::progression::rating::update_ratings;
use crate::progression::xp::{compute_xp_reward, AttemptOutcome, PlayerProgress, XpReward};
use crate::quiz::question::{Question, QuestionBank};
use crate::save::profile::PlayerProfile;

/// Result of one graded attempt
#[derive(Debug, Clone)]
pub struct AttemptSummary {
    pub correct: bool,
    /// Per-term XP breakdown
    pub reward: XpReward,
    pub xp_after: f64,
    pub rating_before: f64,
    pub rating_after: f64,
    pub leveled_up: bool,
    pub level_after: u32,
}

/// One player's practice session
pub struct PracticeSession<'a> {
    config: &'a EngineConfig,
}

impl<'a> PracticeSession<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Pick the next question for a player of the given rating
    pub fn next_question<'b, R: Rng>(
        &self,
        bank: &'b QuestionBank,
        rating: f64,
        rng: &mut R,
    ) -> Option<&'b Question> {
        bank.pick_near(rating, rng)
    }

    /// Grade an answer and apply XP, level, and rating changes.
    ///
    /// Incorrect answers still earn the speed, level, and gatekeeping
    /// terms; only the correctness term drops to zero.
    pub fn submit_answer(
        &self,
        profile: &mut PlayerProfile,
        question: &mut Question,
        answer: &str,
        elapsed_secs: f64,
    ) -> Result<AttemptSummary, EngineError> {
        let correct = question.check_answer(answer);

        let progress = PlayerProgress {
            xp: profile.xp,
            level: profile.level,
            next_level_xp: levels::next_level_xp(profile.level),
        };
        let outcome = AttemptOutcome {
            correctness: if correct { 1.0 } else { 0.0 },
            time_taken_secs: elapsed_secs,
            time_limit_secs: question.difficulty.time_limit_secs(),
            base_xp: question.difficulty.base_xp(),
        };

        let reward = compute_xp_reward(&progress, &outcome, &self.config.xp)?;
        profile.xp += reward.total();

        // One reward can cross more than one threshold
        let level_before = profile.level;
        let level_after = levels::level_for_xp(profile.xp).max(level_before);
        if level_after > level_before {
            profile.level = level_after;
            info!(
                "{} reached level {} ({})",
                profile.name,
                level_after,
                levels::level_title(level_after)
            );
        }

        let rating_before = profile.rating.rating;
        update_ratings(
            &mut profile.rating,
            &mut question.rating,
            correct,
            &self.config.rating,
        );
        debug!(
            "[rating] {}: {:.1} -> {:.1}, question {} now {:.1}",
            profile.name, rating_before, profile.rating.rating, question.id, question.rating.rating
        );

        profile.record_attempt(correct, elapsed_secs);

        Ok(AttemptSummary {
            correct,
            reward,
            xp_after: profile.xp,
            rating_before,
            rating_after: profile.rating.rating,
            leveled_up: level_after > level_before,
            level_after: profile.level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::Difficulty;

    fn medium_question() -> Question {
        Question::new(5, "6 * 7", "42", Difficulty::Medium)
    }

    #[test]
    fn test_correct_answer_credits_xp_and_rating() {
        let config = EngineConfig::default();
        let session = PracticeSession::new(&config);
        let mut profile = PlayerProfile::new("test");
        let mut question = medium_question();

        let summary = session
            .submit_answer(&mut profile, &mut question, "42", 10.0)
            .unwrap();

        assert!(summary.correct);
        assert!(summary.reward.total() > 0.0);
        assert!(summary.rating_after > summary.rating_before);
        assert_eq!(profile.xp, summary.xp_after);
        assert_eq!(profile.stats.questions_correct, 1);
    }

    #[test]
    fn test_wrong_answer_still_earns_partial_xp() {
        let config = EngineConfig::default();
        let session = PracticeSession::new(&config);
        let mut profile = PlayerProfile::new("test");
        let mut question = medium_question();

        let summary = session
            .submit_answer(&mut profile, &mut question, "41", 10.0)
            .unwrap();

        assert!(!summary.correct);
        assert_eq!(summary.reward.correctness_xp, 0.0);
        // Speed, level, and gatekeeping terms still pay out
        assert!(summary.reward.total() > 0.0);
        assert!(summary.rating_after < summary.rating_before);
        assert_eq!(profile.stats.questions_correct, 0);
    }

    #[test]
    fn test_level_up_at_threshold() {
        let config = EngineConfig::default();
        let session = PracticeSession::new(&config);
        let mut profile = PlayerProfile::new("test");
        profile.xp = 95.0; // level 2 begins at 100
        let mut question = medium_question();

        let summary = session
            .submit_answer(&mut profile, &mut question, "42", 5.0)
            .unwrap();

        assert!(summary.leveled_up);
        assert!(summary.level_after >= 2);
        assert_eq!(profile.level, summary.level_after);
    }

    #[test]
    fn test_question_rating_drifts() {
        let config = EngineConfig::default();
        let session = PracticeSession::new(&config);
        let mut profile = PlayerProfile::new("test");
        let mut question = medium_question();
        let seed = question.rating.rating;

        session
            .submit_answer(&mut profile, &mut question, "42", 10.0)
            .unwrap();

        // Answered correctly, so the question looks easier than seeded
        assert!(question.rating.rating < seed);
        assert_eq!(question.rating.games, 1);
    }
}
