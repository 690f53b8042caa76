//! prodigy-levels - demo entry point
//!
//! Prints the display payloads for a given XP total, exactly as the web
//! frontend would receive them.

use anyhow::{Context, Result};

use prodigy_levels::{LevelBadge, ProfileCard};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("prodigy-levels v{}", env!("CARGO_PKG_VERSION"));

    let xp: u64 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0".to_string())
        .parse()
        .context("XP total must be a non-negative integer")?;

    let card = ProfileCard::for_xp(xp);
    let badge = LevelBadge::for_xp(xp);

    println!("{}", serde_json::to_string_pretty(&card)?);
    println!("{}", serde_json::to_string_pretty(&badge)?);
    println!("{}", card.caption());

    Ok(())
}
