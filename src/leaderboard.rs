//! Leaderboard ranking
//!
//! Pure ranking over plain entries; storage of profiles stays elsewhere.

use serde::{Deserialize, Serialize};

use crate::save::profile::PlayerProfile;

/// One row on the leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub rating: f64,
    pub level: u32,
    pub xp: f64,
}

impl From<&PlayerProfile> for LeaderboardEntry {
    fn from(profile: &PlayerProfile) -> Self {
        Self {
            name: profile.name.clone(),
            rating: profile.rating.rating,
            level: profile.level,
            xp: profile.xp,
        }
    }
}

/// Sort entries by rating, ties broken by XP
pub fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.xp.partial_cmp(&a.xp).unwrap_or(std::cmp::Ordering::Equal))
    });
    entries
}

/// The top `n` entries after ranking
pub fn top(entries: Vec<LeaderboardEntry>, n: usize) -> Vec<LeaderboardEntry> {
    let mut ranked = rank(entries);
    ranked.truncate(n);
    ranked
}
