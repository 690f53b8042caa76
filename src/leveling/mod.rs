//! Leveling engine
//!
//! XP curve, tier metadata, and progress calculations. Everything here is
//! pure and side-effect free; values are recomputed from the XP total on
//! every call so a stored level can never drift from stored XP.

pub mod curve;
pub mod progress;
pub mod tiers;

pub use curve::{level_for_xp, level_span, xp_cap, xp_to_enter, MAX_LEVEL};
pub use progress::{progress_for_xp, xp_for_next_level, LevelProgress};
pub use tiers::{
    color_for_level, tier_for_level, title_for_level, validate_table, ColorToken, Tier,
    TierTableError, TIERS,
};
