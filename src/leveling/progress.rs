//! Progress within the current level
//!
//! Pure arithmetic over the curve: how far into the current level a user is,
//! and how much XP remains to the next one.

use serde::Serialize;

use super::curve::{level_for_xp, level_span, xp_to_enter, MAX_LEVEL};

/// How far into the current level an XP total has progressed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    /// XP earned since entering the current level
    pub progress_xp: u64,
    /// XP span required to complete the current level
    pub level_total_xp: u64,
    /// `progress_xp / level_total_xp`, in `[0, 100]`
    pub percentage: f32,
}

/// Compute [`LevelProgress`] for an XP total.
///
/// At [`MAX_LEVEL`] there is no next threshold to measure against, so the
/// span is reported as `progress_xp` and the percentage is pinned at 100.
pub fn progress_for_xp(xp: u64) -> LevelProgress {
    let level = level_for_xp(xp);
    let progress_xp = xp - xp_to_enter(level);

    if level >= MAX_LEVEL {
        return LevelProgress {
            level,
            progress_xp,
            level_total_xp: progress_xp,
            percentage: 100.0,
        };
    }

    let level_total_xp = level_span(level);
    let percentage = ((progress_xp as f64 / level_total_xp as f64) * 100.0).min(100.0) as f32;
    LevelProgress {
        level,
        progress_xp,
        level_total_xp,
        percentage,
    }
}

/// XP still needed to reach the next level, or `None` at the level cap.
pub fn xp_for_next_level(xp: u64) -> Option<u64> {
    let level = level_for_xp(xp);
    if level >= MAX_LEVEL {
        None
    } else {
        Some(xp_to_enter(level + 1) - xp)
    }
}
