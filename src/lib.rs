//! Questlog - player state, item catalog and quest tracking for a text RPG.
//!
//! A [`GameSession`] owns the player and is mutated one UI event at a time.
//! The `items`, `quests` and `achievements` modules are mostly pure
//! functions over plain records that serialize to the UI's JSON shapes.

pub mod achievements;
pub mod character;
pub mod core;
pub mod error;
pub mod items;
pub mod quests;
pub mod simulator;

pub use achievements::{Achievement, PlayerProgress};
pub use crate::core::constants::*;
pub use crate::core::game_logic::DamageOutcome;
pub use crate::core::game_state::{GameSession, GameStatus, Player};
pub use error::{GameError, GameResult};
pub use items::{Item, ItemType, Rarity};
pub use quests::{Quest, QuestStatus, QuestType};
