//! XP reward calculation
//!
//! The reward for one answered question is the sum of four terms, each
//! scaled by the question's base XP: correctness, speed, level decay,
//! and gatekeeping (distance from the next level threshold).

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Snapshot of a player's progression at the moment of an attempt.
///
/// Plain value: the calculator never touches storage, callers read the
/// snapshot from wherever profiles live and persist the result themselves.
#[derive(Debug, Clone, Copy)]
pub struct PlayerProgress {
    /// Cumulative XP
    pub xp: f64,
    /// Current level (1-based)
    pub level: u32,
    /// Cumulative XP at which the next level begins
    pub next_level_xp: f64,
}

/// Outcome of a single question attempt
#[derive(Debug, Clone, Copy)]
pub struct AttemptOutcome {
    /// Correctness factor in [0, 1]; 1.0 for a fully correct answer.
    /// Values outside the range are clamped.
    pub correctness: f64,
    /// Seconds the player took
    pub time_taken_secs: f64,
    /// Seconds allotted for the question
    pub time_limit_secs: f64,
    /// Base XP value of the question
    pub base_xp: f64,
}

/// Tuning knobs for the reward formula.
///
/// Deliberately no `Default`: production values belong to
/// [`EngineConfig`](crate::config::EngineConfig), not the core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct XpTuning {
    /// Level decay rate; higher alpha means high-level players earn less
    pub alpha: f64,
    /// Gatekeeping weight; scales the distance-to-next-level bonus
    pub beta: f64,
}

/// Per-term breakdown of one XP reward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XpReward {
    /// Scaled by how correct the answer was
    pub correctness_xp: f64,
    /// Speed bonus; zero once the time limit is exceeded
    pub time_xp: f64,
    /// Flat award shrunk by level decay
    pub level_xp: f64,
    /// Bonus for distance from the next level threshold
    pub gatekeeping_xp: f64,
}

impl XpReward {
    /// Total XP to credit for the attempt
    pub fn total(&self) -> f64 {
        self.correctness_xp + self.time_xp + self.level_xp + self.gatekeeping_xp
    }
}

/// Compute the XP reward for one attempt.
///
/// Pure and deterministic: identical inputs always produce identical
/// rewards, and nothing is mutated. Fails with
/// [`EngineError::InvalidArgument`] on a non-positive time limit or level
/// threshold, negative base XP, or a decay denominator at or below zero.
///
/// Callers round or truncate for display; no rounding happens here.
pub fn compute_xp_reward(
    progress: &PlayerProgress,
    outcome: &AttemptOutcome,
    tuning: &XpTuning,
) -> Result<XpReward, EngineError> {
    if outcome.time_limit_secs <= 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "time limit must be positive, got {}",
            outcome.time_limit_secs
        )));
    }
    if progress.next_level_xp <= 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "next level threshold must be positive, got {}",
            progress.next_level_xp
        )));
    }
    if outcome.base_xp < 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "base XP must not be negative, got {}",
            outcome.base_xp
        )));
    }
    // Guard the decay denominator: alpha * level must stay above -1
    let decay = 1.0 + tuning.alpha * progress.level as f64;
    if decay <= 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "alpha * level must stay above -1, got {}",
            tuning.alpha * progress.level as f64
        )));
    }

    let base = outcome.base_xp;
    let correctness = outcome.correctness.clamp(0.0, 1.0);

    let correctness_xp = base * correctness;

    // Full bonus at 0 seconds, floors at 0 once the limit is exceeded
    let remaining = (outcome.time_limit_secs - outcome.time_taken_secs).max(0.0);
    let time_xp = base * remaining / outcome.time_limit_secs;

    let level_xp = base / decay;

    // XP can transiently sit above the threshold before a level-up is
    // processed; the headroom clamps at 0 so the term never goes negative.
    let headroom = (progress.next_level_xp - progress.xp).max(0.0);
    let gatekeeping_xp = base * tuning.beta * headroom / progress.next_level_xp;

    Ok(XpReward {
        correctness_xp,
        time_xp,
        level_xp,
        gatekeeping_xp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn reference_tuning() -> XpTuning {
        XpTuning {
            alpha: 0.05,
            beta: 0.3,
        }
    }

    fn reference_progress() -> PlayerProgress {
        PlayerProgress {
            xp: 600.0,
            level: 5,
            next_level_xp: 800.0,
        }
    }

    fn reference_outcome() -> AttemptOutcome {
        AttemptOutcome {
            correctness: 1.0,
            time_taken_secs: 20.0,
            time_limit_secs: 30.0,
            base_xp: 20.0,
        }
    }

    #[test]
    fn test_reference_reward() {
        let reward = compute_xp_reward(
            &reference_progress(),
            &reference_outcome(),
            &reference_tuning(),
        )
        .unwrap();

        assert!((reward.correctness_xp - 20.0).abs() < EPS);
        assert!((reward.time_xp - 20.0 * (10.0 / 30.0)).abs() < EPS);
        assert!((reward.level_xp - 16.0).abs() < EPS);
        assert!((reward.gatekeeping_xp - 1.5).abs() < EPS);
        assert!((reward.total() - 44.166_666_666_666_664).abs() < 1e-6);
    }

    #[test]
    fn test_deterministic() {
        let progress = reference_progress();
        let outcome = reference_outcome();
        let tuning = reference_tuning();

        let a = compute_xp_reward(&progress, &outcome, &tuning).unwrap();
        let b = compute_xp_reward(&progress, &outcome, &tuning).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_instant_answer_maxes_time_bonus() {
        let mut outcome = reference_outcome();
        outcome.time_taken_secs = 0.0;
        let reward =
            compute_xp_reward(&reference_progress(), &outcome, &reference_tuning()).unwrap();
        assert!((reward.time_xp - outcome.base_xp).abs() < EPS);
    }

    #[test]
    fn test_overtime_zeroes_time_bonus() {
        let mut outcome = reference_outcome();
        outcome.time_taken_secs = 30.0;
        let at_limit =
            compute_xp_reward(&reference_progress(), &outcome, &reference_tuning()).unwrap();
        assert!(at_limit.time_xp.abs() < EPS);

        outcome.time_taken_secs = 45.0;
        let over =
            compute_xp_reward(&reference_progress(), &outcome, &reference_tuning()).unwrap();
        assert!(over.time_xp.abs() < EPS);
    }

    #[test]
    fn test_no_decay_at_level_zero() {
        let progress = PlayerProgress {
            xp: 0.0,
            level: 0,
            next_level_xp: 100.0,
        };
        let tuning = XpTuning {
            alpha: 0.0,
            beta: 0.3,
        };
        let reward = compute_xp_reward(&progress, &reference_outcome(), &tuning).unwrap();
        assert!((reward.level_xp - reference_outcome().base_xp).abs() < EPS);
    }

    #[test]
    fn test_gatekeeping_zero_at_threshold() {
        let progress = PlayerProgress {
            xp: 800.0,
            level: 5,
            next_level_xp: 800.0,
        };
        let reward =
            compute_xp_reward(&progress, &reference_outcome(), &reference_tuning()).unwrap();
        assert!(reward.gatekeeping_xp.abs() < EPS);
    }

    #[test]
    fn test_gatekeeping_clamps_above_threshold() {
        // XP past the threshold (level-up not yet processed) must not
        // subtract from the reward
        let progress = PlayerProgress {
            xp: 950.0,
            level: 5,
            next_level_xp: 800.0,
        };
        let reward =
            compute_xp_reward(&progress, &reference_outcome(), &reference_tuning()).unwrap();
        assert_eq!(reward.gatekeeping_xp, 0.0);
        assert!(reward.total() >= 0.0);
    }

    #[test]
    fn test_time_bonus_monotone_in_elapsed() {
        let mut previous = f64::INFINITY;
        for taken in [0.0, 5.0, 10.0, 20.0, 29.0, 30.0] {
            let mut outcome = reference_outcome();
            outcome.time_taken_secs = taken;
            let reward =
                compute_xp_reward(&reference_progress(), &outcome, &reference_tuning()).unwrap();
            assert!(reward.time_xp <= previous);
            previous = reward.time_xp;
        }
    }

    #[test]
    fn test_level_bonus_monotone_in_level() {
        let mut previous = f64::INFINITY;
        for level in [1, 2, 5, 10, 25, 50] {
            let progress = PlayerProgress {
                xp: 600.0,
                level,
                next_level_xp: 800.0,
            };
            let reward =
                compute_xp_reward(&progress, &reference_outcome(), &reference_tuning()).unwrap();
            assert!(reward.level_xp < previous);
            previous = reward.level_xp;
        }
    }

    #[test]
    fn test_total_never_negative() {
        let outcomes = [
            AttemptOutcome {
                correctness: 0.0,
                time_taken_secs: 120.0,
                time_limit_secs: 30.0,
                base_xp: 20.0,
            },
            AttemptOutcome {
                correctness: -3.0, // clamped to 0
                time_taken_secs: 0.0,
                time_limit_secs: 30.0,
                base_xp: 0.0,
            },
        ];
        for outcome in outcomes {
            let reward =
                compute_xp_reward(&reference_progress(), &outcome, &reference_tuning()).unwrap();
            assert!(reward.total() >= 0.0);
        }
    }

    #[test]
    fn test_correctness_clamped() {
        let mut outcome = reference_outcome();
        outcome.correctness = 2.5;
        let reward =
            compute_xp_reward(&reference_progress(), &outcome, &reference_tuning()).unwrap();
        assert!((reward.correctness_xp - outcome.base_xp).abs() < EPS);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let progress = reference_progress();
        let tuning = reference_tuning();

        let mut outcome = reference_outcome();
        outcome.time_limit_secs = 0.0;
        assert!(matches!(
            compute_xp_reward(&progress, &outcome, &tuning),
            Err(EngineError::InvalidArgument(_))
        ));

        let mut outcome = reference_outcome();
        outcome.base_xp = -1.0;
        assert!(matches!(
            compute_xp_reward(&progress, &outcome, &tuning),
            Err(EngineError::InvalidArgument(_))
        ));

        let bad_progress = PlayerProgress {
            xp: 0.0,
            level: 1,
            next_level_xp: 0.0,
        };
        assert!(matches!(
            compute_xp_reward(&bad_progress, &reference_outcome(), &tuning),
            Err(EngineError::InvalidArgument(_))
        ));

        // decay denominator at or below zero
        let tuning = XpTuning {
            alpha: -0.5,
            beta: 0.3,
        };
        assert!(matches!(
            compute_xp_reward(&progress, &reference_outcome(), &tuning),
            Err(EngineError::InvalidArgument(_))
        ));
    }
}
