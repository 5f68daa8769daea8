//! Engine configuration
//!
//! The only place production tuning values live. Loaded from a RON file
//! with fallback to the documented reference defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::progression::rating::RatingTuning;
use crate::progression::xp::XpTuning;

/// Tuning for the XP and rating formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    pub xp: XpTuning,
    pub rating: RatingTuning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            xp: XpTuning {
                alpha: 0.05,
                beta: 0.3,
            },
            rating: RatingTuning {
                k_factor: 32.0,
                provisional_games: 30,
                provisional_multiplier: 2.0,
            },
        }
    }
}

impl EngineConfig {
    /// Load tuning from a RON file, or fall back to the reference defaults
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(config) => {
                        log::info!("Config loaded from {}", path.display());
                        return config;
                    }
                    Err(e) => log::warn!(
                        "Failed to parse {}: {}. Using defaults.",
                        path.display(),
                        e
                    ),
                },
                Err(e) => log::warn!(
                    "Failed to read {}: {}. Using defaults.",
                    path.display(),
                    e
                ),
            }
        }
        Self::default()
    }
}
