//! Level thresholds and rank titles
//!
//! Each level-up costs 50 XP more than the last, so the cumulative
//! threshold curve is quadratic.

/// Highest attainable level
pub const MAX_LEVEL: u32 = 30;

/// Cumulative XP at which `level` begins. Level 1 begins at 0; the step
/// from level k to k+1 costs `100 + 50 * (k - 1)` XP.
pub fn xp_for_level(level: u32) -> f64 {
    if level <= 1 {
        return 0.0;
    }
    let n = (level.min(MAX_LEVEL) - 1) as f64;
    100.0 * n + 50.0 * n * (n - 1.0) / 2.0
}

/// Cumulative XP at which the level after `level` begins.
///
/// At `MAX_LEVEL` this returns the max-level threshold itself, so callers
/// always have a positive denominator for gatekeeping math.
pub fn next_level_xp(level: u32) -> f64 {
    if level >= MAX_LEVEL {
        xp_for_level(MAX_LEVEL)
    } else {
        xp_for_level(level + 1)
    }
}

/// Level reached with the given cumulative XP
pub fn level_for_xp(xp: f64) -> u32 {
    (1..=MAX_LEVEL)
        .rev()
        .find(|&level| xp >= xp_for_level(level))
        .unwrap_or(1)
}

/// Rank title shown next to a level
pub fn level_title(level: u32) -> &'static str {
    match level {
        1..=2 => "Counter",
        3..=4 => "Adder",
        5..=7 => "Multiplier",
        8..=10 => "Algebraist",
        11..=14 => "Geometer",
        15..=18 => "Analyst",
        19..=24 => "Theorist",
        _ => "Grandmaster",
    }
}
