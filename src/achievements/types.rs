//! Achievement system types and data structures.

use crate::core::game_state::Player;
use crate::items::types::Rarity;
use serde::{Deserialize, Serialize};

/// What an achievement measures. Unrecognised kinds parse as `Unknown` and
/// never unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    Level,
    QuestsCompleted,
    EnemiesKilled,
    ItemsCollected,
    ScenesVisited,
    #[serde(other)]
    Unknown,
}

/// Threshold predicate over a [`PlayerProgress`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: RequirementType,
    pub value: u64,
}

impl Requirement {
    pub fn new(kind: RequirementType, value: u64) -> Self {
        Self { kind, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rarity: Rarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Requirement>,
    /// Cached result of the last evaluation.
    #[serde(default)]
    pub unlocked: bool,
}

impl Achievement {
    pub fn new(id: u32, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            rarity,
            requirement: None,
            unlocked: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_requirement(mut self, kind: RequirementType, value: u64) -> Self {
        self.requirement = Some(Requirement::new(kind, value));
        self
    }
}

/// Aggregate counters maintained outside the player record and consumed by
/// achievement evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerProgress {
    pub level: u32,
    pub quests_completed: u64,
    pub enemies_killed: u64,
    pub items_collected: u64,
    pub scenes_visited: Vec<String>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            level: 1,
            quests_completed: 0,
            enemies_killed: 0,
            items_collected: 0,
            scenes_visited: Vec::new(),
        }
    }
}

impl PlayerProgress {
    /// Seeds a snapshot from the player's current level and inventory size.
    pub fn from_player(player: &Player) -> Self {
        Self {
            level: player.level,
            items_collected: player.inventory.len() as u64,
            ..Self::default()
        }
    }

    pub fn sync_level(&mut self, player: &Player) {
        self.level = player.level;
    }

    pub fn record_kill(&mut self) {
        self.enemies_killed += 1;
    }

    pub fn record_item_collected(&mut self) {
        self.items_collected += 1;
    }

    pub fn record_quest_completed(&mut self) {
        self.quests_completed += 1;
    }

    /// Adds a scene the first time it is visited. Returns true if it was new.
    pub fn visit_scene(&mut self, scene: &str) -> bool {
        if self.scenes_visited.iter().any(|s| s == scene) {
            return false;
        }
        self.scenes_visited.push(scene.to_string());
        true
    }

    /// Current counter value for a requirement kind; `None` for unknown kinds.
    pub fn metric(&self, kind: RequirementType) -> Option<u64> {
        match kind {
            RequirementType::Level => Some(self.level as u64),
            RequirementType::QuestsCompleted => Some(self.quests_completed),
            RequirementType::EnemiesKilled => Some(self.enemies_killed),
            RequirementType::ItemsCollected => Some(self.items_collected),
            RequirementType::ScenesVisited => Some(self.scenes_visited.len() as u64),
            RequirementType::Unknown => None,
        }
    }
}
