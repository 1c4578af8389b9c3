//! Errors for the strict (validating) entry points.
//!
//! The plain operations never fail; they clamp or no-op. The `try_*` and
//! quest-transition functions report malformed requests through [`GameError`].

use crate::quests::QuestStatus;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no inventory item with id {0}")]
    ItemNotFound(u64),

    #[error("{name} cannot be used")]
    ItemNotUsable { name: String },

    #[error("quest {quest_id} has no objective '{objective_id}'")]
    ObjectiveNotFound { quest_id: u32, objective_id: String },

    #[error("quest {quest_id} cannot move from {from:?} to {to:?}")]
    InvalidQuestTransition {
        quest_id: u32,
        from: QuestStatus,
        to: QuestStatus,
    },

    #[error("{operation} called with negative amount {amount}")]
    NegativeAmount {
        operation: &'static str,
        amount: i64,
    },

    #[error("invalid definition document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
