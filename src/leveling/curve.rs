//! XP-to-level curve
//!
//! Cumulative thresholds, per-level spans, and the saturating level lookup
//! used wherever a level badge is rendered.

/// Hard cap on the level a user can reach. Levels saturate here instead of
/// growing indefinitely.
pub const MAX_LEVEL: u32 = 100;

/// XP required to go from `level` to `level + 1`.
///
/// Linear-growth spans: base 100 XP for the first level-up, +50 per level
/// after. Spans never shrink, so the level lookup stays monotonic.
pub fn level_span(level: u32) -> u64 {
    let level = clamp_level(level);
    100 + (level as u64 - 1) * 50
}

/// Total accumulated XP at which `level` begins. Level 1 begins at 0.
pub fn xp_to_enter(level: u32) -> u64 {
    let level = clamp_level(level);
    (1..level).map(level_span).sum()
}

/// XP total at which the final level begins; all totals at or past this
/// point report [`MAX_LEVEL`].
pub fn xp_cap() -> u64 {
    xp_to_enter(MAX_LEVEL)
}

/// Map an accumulated XP total to a level in `[1, MAX_LEVEL]`.
pub fn level_for_xp(xp: u64) -> u32 {
    let mut level = 1;
    let mut threshold = 0u64;
    while level < MAX_LEVEL {
        threshold += level_span(level);
        if xp < threshold {
            break;
        }
        level += 1;
    }
    level
}

/// Clamp a level argument into `[1, MAX_LEVEL]`.
///
/// An out-of-range level is a caller bug, but this is display plumbing:
/// degrade to the nearest valid level and log it rather than take the
/// page down.
pub(crate) fn clamp_level(level: u32) -> u32 {
    if level < 1 {
        log::warn!("level {} below minimum, clamping to 1", level);
        1
    } else if level > MAX_LEVEL {
        log::warn!("level {} above maximum, clamping to {}", level, MAX_LEVEL);
        MAX_LEVEL
    } else {
        level
    }
}
