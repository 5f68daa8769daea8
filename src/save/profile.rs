//! Player profile and persistent progression
//!
//! Tracks XP, level, rating, and practice statistics across sessions.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::progression::rating::EloRating;

/// Current profile version for compatibility
const PROFILE_VERSION: u32 = 1;

/// Persistent player profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Version for compatibility checking
    pub version: u32,
    pub name: String,
    /// Cumulative XP
    pub xp: f64,
    /// Current level (1-based)
    pub level: u32,
    /// ELO-style skill rating
    pub rating: EloRating,
    pub stats: ProfileStats,
}

/// Practice statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    pub questions_attempted: u32,
    pub questions_correct: u32,
    /// Consecutive correct answers right now
    pub current_streak: u32,
    pub best_streak: u32,
    /// Total time spent answering, in seconds
    pub practice_seconds: f64,
}

impl PlayerProfile {
    pub fn new(name: &str) -> Self {
        Self {
            version: PROFILE_VERSION,
            name: name.to_string(),
            xp: 0.0,
            level: 1,
            rating: EloRating::default(),
            stats: ProfileStats::default(),
        }
    }

    /// Record one graded attempt in the statistics
    pub fn record_attempt(&mut self, correct: bool, elapsed_secs: f64) {
        self.stats.questions_attempted += 1;
        self.stats.practice_seconds += elapsed_secs;
        if correct {
            self.stats.questions_correct += 1;
            self.stats.current_streak += 1;
            if self.stats.current_streak > self.stats.best_streak {
                self.stats.best_streak = self.stats.current_streak;
            }
        } else {
            self.stats.current_streak = 0;
        }
    }

    /// Fraction of attempts answered correctly
    pub fn accuracy(&self) -> f64 {
        if self.stats.questions_attempted == 0 {
            0.0
        } else {
            self.stats.questions_correct as f64 / self.stats.questions_attempted as f64
        }
    }
}

// ============================================================================
// Profile Storage
// ============================================================================

/// Get the profile file path for a player
fn profile_path(name: &str) -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "eloquest", "Eloquest") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push(format!("{}.json", name));
        path
    } else {
        PathBuf::from(format!("./{}.json", name))
    }
}

/// Load a player profile (or create a fresh one)
pub fn load_profile(name: &str) -> PlayerProfile {
    let path = profile_path(name);

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(profile) => {
                    log::info!("Profile loaded from {:?}", path);
                    return profile;
                }
                Err(e) => {
                    log::warn!("Failed to parse profile: {}, creating new", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read profile: {}, creating new", e);
            }
        }
    }

    log::info!("Creating new profile for {}", name);
    PlayerProfile::new(name)
}

/// Save a player profile
pub fn save_profile(profile: &PlayerProfile) -> Result<(), String> {
    let path = profile_path(&profile.name);

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    let json = serde_json::to_string_pretty(profile).map_err(|e| e.to_string())?;

    fs::write(&path, json).map_err(|e| e.to_string())?;

    log::info!("Profile saved to {:?}", path);
    Ok(())
}
