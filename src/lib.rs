//! prodigy-levels - the ProdigiousHub leveling engine
//!
//! Converts a lifetime XP total into a level, a tier title and color, and
//! progress within the current level, plus the view models the navbar badge,
//! profile page, and level-up toast render from.
//!
//! The engine is pure and stateless: no I/O, no caching, safe to call from
//! anywhere. XP arrives from the backend; this crate only computes.

pub mod display;
pub mod leveling;
pub mod stats;

// Re-export commonly used types
pub use display::{LevelBadge, LevelUpToast, ProfileCard};
pub use leveling::{
    color_for_level, level_for_xp, progress_for_xp, title_for_level, xp_for_next_level,
    ColorToken, LevelProgress, MAX_LEVEL,
};
pub use stats::UserStats;
