//! Display view models
//!
//! Render-ready payloads for the surfaces that consume the leveling engine:
//! the navbar badge, the profile stat block, and the level-up toast. These
//! serialize to the JSON shapes the web frontend expects.

pub mod badge;
pub mod profile;
pub mod toast;

pub use badge::LevelBadge;
pub use profile::ProfileCard;
pub use toast::LevelUpToast;
