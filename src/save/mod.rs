//! Profile persistence
//!
//! Player profiles are plain JSON files under the platform data dir.

pub mod profile;

pub use profile::{load_profile, save_profile, PlayerProfile, ProfileStats};
