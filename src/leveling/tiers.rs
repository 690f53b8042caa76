//! Level metadata table
//!
//! Titles and color gradients bound to contiguous level ranges. The table is
//! read-only reference data; tests enforce that it covers `[1, MAX_LEVEL]`
//! with no gaps or overlaps.

use serde::Serialize;
use thiserror::Error;

use super::curve::{clamp_level, MAX_LEVEL};

/// Gradient endpoints for a tier. Opaque to this crate; the UI layer turns
/// it into whatever gradient syntax it renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    pub start: &'static str,
    pub end: &'static str,
}

/// One row of the tier table
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub min_level: u32,
    pub max_level: u32,
    pub title: &'static str,
    pub color: ColorToken,
}

/// All tiers, sorted by level range
pub static TIERS: &[Tier] = &[
    Tier { min_level: 1, max_level: 9, title: "Novice", color: ColorToken { start: "#9ca3af", end: "#6b7280" } },
    Tier { min_level: 10, max_level: 19, title: "Apprentice", color: ColorToken { start: "#4ade80", end: "#16a34a" } },
    Tier { min_level: 20, max_level: 29, title: "Journeyman", color: ColorToken { start: "#2dd4bf", end: "#0d9488" } },
    Tier { min_level: 30, max_level: 39, title: "Adept", color: ColorToken { start: "#60a5fa", end: "#2563eb" } },
    Tier { min_level: 40, max_level: 49, title: "Specialist", color: ColorToken { start: "#818cf8", end: "#4f46e5" } },
    Tier { min_level: 50, max_level: 59, title: "Expert", color: ColorToken { start: "#a78bfa", end: "#7c3aed" } },
    Tier { min_level: 60, max_level: 69, title: "Veteran", color: ColorToken { start: "#e879f9", end: "#c026d3" } },
    Tier { min_level: 70, max_level: 79, title: "Elite", color: ColorToken { start: "#fb923c", end: "#ea580c" } },
    Tier { min_level: 80, max_level: 89, title: "Grandmaster", color: ColorToken { start: "#f87171", end: "#dc2626" } },
    Tier { min_level: 90, max_level: 99, title: "Master", color: ColorToken { start: "#facc15", end: "#d97706" } },
    Tier { min_level: 100, max_level: 100, title: "Legend", color: ColorToken { start: "#f472b6", end: "#22d3ee" } },
];

/// Look up the tier covering `level`, clamping out-of-range input.
pub fn tier_for_level(level: u32) -> &'static Tier {
    let level = clamp_level(level);
    for tier in TIERS {
        if level >= tier.min_level && level <= tier.max_level {
            return tier;
        }
    }
    // Unreachable with a validated table; tests enforce coverage.
    log::warn!("no tier covers level {}, using the top tier", level);
    &TIERS[TIERS.len() - 1]
}

/// Title for a level ("Novice" through "Legend")
pub fn title_for_level(level: u32) -> &'static str {
    tier_for_level(level).title
}

/// Color gradient for a level
pub fn color_for_level(level: u32) -> ColorToken {
    tier_for_level(level).color
}

/// Ways the tier table can be malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierTableError {
    #[error("tier table is empty")]
    Empty,
    #[error("tier table starts at level {0}, expected 1")]
    WrongStart(u32),
    #[error("tier table ends at level {0}, expected {MAX_LEVEL}")]
    WrongEnd(u32),
    #[error("tier \"{title}\" has inverted range {min}..={max}")]
    InvertedRange { title: &'static str, min: u32, max: u32 },
    #[error("gap or overlap between level {prev_max} and level {next_min}")]
    NotContiguous { prev_max: u32, next_min: u32 },
    #[error("tier starting at level {0} has an empty title")]
    EmptyTitle(u32),
}

/// Validate the built-in table. A failure here is a build defect, so this
/// runs in tests rather than on the lookup path.
pub fn validate() -> Result<(), TierTableError> {
    validate_table(TIERS)
}

/// Check a tier table for gaps, overlaps, inverted ranges, and empty titles.
pub fn validate_table(tiers: &[Tier]) -> Result<(), TierTableError> {
    let first = tiers.first().ok_or(TierTableError::Empty)?;
    if first.min_level != 1 {
        return Err(TierTableError::WrongStart(first.min_level));
    }

    let mut prev_max = 0;
    for tier in tiers {
        if tier.min_level > tier.max_level {
            return Err(TierTableError::InvertedRange {
                title: tier.title,
                min: tier.min_level,
                max: tier.max_level,
            });
        }
        if tier.min_level != prev_max + 1 {
            return Err(TierTableError::NotContiguous {
                prev_max,
                next_min: tier.min_level,
            });
        }
        if tier.title.is_empty() {
            return Err(TierTableError::EmptyTitle(tier.min_level));
        }
        prev_max = tier.max_level;
    }

    if prev_max != MAX_LEVEL {
        return Err(TierTableError::WrongEnd(prev_max));
    }
    Ok(())
}
