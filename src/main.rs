//! Eloquest - Entry Point
//!
//! Runs a simulated practice arena: a handful of players answer questions
//! picked near their rating, earn XP, and climb the ladder. The final
//! leaderboard is printed when the rounds are done.

use std::path::Path;

use anyhow::Result;
use rand::Rng;

use eloquest::config::EngineConfig;
use eloquest::leaderboard::{self, LeaderboardEntry};
use eloquest::progression::rating::expected_score;
use eloquest::quiz::question::QuestionBank;
use eloquest::quiz::session::PracticeSession;
use eloquest::save::profile::PlayerProfile;

/// Rounds each simulated player answers
const ROUNDS: usize = 40;

/// Simulated field: name and a hidden skill offset from the default rating
const PLAYERS: &[(&str, f64)] = &[
    ("ada", 250.0),
    ("blaise", 100.0),
    ("carl", -50.0),
    ("emmy", 350.0),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Eloquest v{}", env!("CARGO_PKG_VERSION"));

    let config = EngineConfig::load(Path::new("eloquest.ron"));
    let mut bank = QuestionBank::load_or_default(Path::new("assets/data/questions.ron"));
    let session = PracticeSession::new(&config);
    let mut rng = rand::thread_rng();

    let mut players: Vec<(PlayerProfile, f64)> = PLAYERS
        .iter()
        .map(|(name, skill)| (PlayerProfile::new(name), 1200.0 + skill))
        .collect();

    for (profile, skill) in &mut players {
        for _ in 0..ROUNDS {
            let Some((id, answer, q_rating, limit)) = session
                .next_question(&bank, profile.rating.rating, &mut rng)
                .map(|q| {
                    (
                        q.id,
                        q.answer.clone(),
                        q.rating.rating,
                        q.difficulty.time_limit_secs(),
                    )
                })
            else {
                break;
            };

            // Hidden skill decides how likely the simulated player is to
            // answer correctly
            let p_correct = expected_score(*skill, q_rating).clamp(0.01, 0.99);
            let correct = rng.gen_bool(p_correct);
            let given = if correct { answer } else { "?".to_string() };
            let elapsed = rng.gen_range(0.2..1.1) * limit;

            if let Some(question) = bank.find_mut(id) {
                let summary = session.submit_answer(profile, question, &given, elapsed)?;
                log::debug!(
                    "{} answered q{} ({}): +{:.1} XP, rating {:.0}",
                    profile.name,
                    id,
                    if summary.correct { "correct" } else { "wrong" },
                    summary.reward.total(),
                    summary.rating_after
                );
            }
        }

        log::info!(
            "{} finished: level {}, {:.0} XP, rating {:.0}, accuracy {:.0}%",
            profile.name,
            profile.level,
            profile.xp,
            profile.rating.rating,
            profile.accuracy() * 100.0
        );
    }

    let entries: Vec<LeaderboardEntry> = players
        .iter()
        .map(|(profile, _)| LeaderboardEntry::from(profile))
        .collect();

    println!("=== Leaderboard ===");
    for (place, entry) in leaderboard::rank(entries).iter().enumerate() {
        println!(
            "{:>2}. {:<8} rating {:>5.0}  level {:>2}  xp {:>7.0}",
            place + 1,
            entry.name,
            entry.rating,
            entry.level,
            entry.xp
        );
    }

    Ok(())
}
