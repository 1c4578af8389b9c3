use crate::character::attributes::Attributes;
use crate::core::constants::{HOME_SCENE, MAX_HEALTH, MAX_MANA};
use crate::items::types::Item;
use serde::{Deserialize, Serialize};

/// Session lifecycle. Transitions are driven by [`GameSession`] methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// The active player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unassigned until a game is started
    pub id: Option<u32>,
    pub name: String,
    pub level: u32,
    /// Can dip below zero right after a level-up; see `apply_experience`.
    pub experience: i64,
    pub health: i32,
    pub mana: i32,
    #[serde(flatten)]
    pub attributes: Attributes,
    #[serde(default)]
    pub inventory: Vec<Item>,
}

impl Player {
    /// Creates a level 1 character with full resources and base attributes
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Looks up the first inventory entry with this id
    pub fn find_item(&self, item_id: u64) -> Option<&Item> {
        self.inventory.iter().find(|item| item.id == item_id)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            level: 1,
            experience: 0,
            health: MAX_HEALTH,
            mana: MAX_MANA,
            attributes: Attributes::new(),
            inventory: Vec::new(),
        }
    }
}

/// Owned game session: the player record plus scene and lifecycle state.
///
/// There is exactly one writer. UI code holds the session and calls its
/// mutators (see `core::game_logic`) one event at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub player: Player,
    pub current_scene: String,
    pub game_started: bool,
    pub game_state: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates an idle session that has not started a game yet
    pub fn new() -> Self {
        Self {
            player: Player::default(),
            current_scene: HOME_SCENE.to_string(),
            game_started: false,
            game_state: GameStatus::Idle,
        }
    }

    pub fn is_game_started(&self) -> bool {
        self.game_started
    }

    pub fn current_player(&self) -> &Player {
        &self.player
    }

    pub fn current_location(&self) -> &str {
        &self.current_scene
    }

    pub fn is_playing(&self) -> bool {
        self.game_state == GameStatus::Playing
    }
}
