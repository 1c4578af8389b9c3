//! Achievement system module.
//!
//! Achievements are threshold checks against a [`PlayerProgress`] snapshot
//! kept by the caller. Unlock state is cached on each [`Achievement`].

pub mod data;
pub mod logic;
pub mod types;

pub use data::{default_achievements, get_achievement_def, load_achievements_json};
pub use logic::*;
pub use types::{Achievement, PlayerProgress, Requirement, RequirementType};
