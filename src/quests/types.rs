//! Quest records and their lookup tables.

use crate::core::constants::FALLBACK_QUEST_LABEL;
use crate::items::types::Item;
use serde::{Deserialize, Serialize};

/// Forward-only quest lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Available,
    Accepted,
    Completed,
    TurnedIn,
}

impl QuestStatus {
    pub const ALL: [QuestStatus; 4] = [
        QuestStatus::Available,
        QuestStatus::Accepted,
        QuestStatus::Completed,
        QuestStatus::TurnedIn,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuestStatus::Available => "available",
            QuestStatus::Accepted => "accepted",
            QuestStatus::Completed => "completed",
            QuestStatus::TurnedIn => "turned_in",
        }
    }

    pub fn from_key(key: &str) -> Option<QuestStatus> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuestStatus::Available => "Available",
            QuestStatus::Accepted => "In Progress",
            QuestStatus::Completed => "Completed",
            QuestStatus::TurnedIn => "Turned In",
        }
    }

    /// Position in the quest log: finished work first, archived last.
    pub fn sort_priority(&self) -> u8 {
        match self {
            QuestStatus::Completed => 0,
            QuestStatus::Accepted => 1,
            QuestStatus::Available => 2,
            QuestStatus::TurnedIn => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Kill,
    Collect,
    Talk,
    Explore,
}

impl QuestType {
    pub const ALL: [QuestType; 4] = [
        QuestType::Kill,
        QuestType::Collect,
        QuestType::Talk,
        QuestType::Explore,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuestType::Kill => "kill",
            QuestType::Collect => "collect",
            QuestType::Talk => "talk",
            QuestType::Explore => "explore",
        }
    }

    pub fn from_key(key: &str) -> Option<QuestType> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuestType::Kill => "Slay",
            QuestType::Collect => "Gather",
            QuestType::Talk => "Converse",
            QuestType::Explore => "Explore",
        }
    }
}

pub fn quest_status_name(key: &str) -> &'static str {
    QuestStatus::from_key(key).map_or(FALLBACK_QUEST_LABEL, |s| s.name())
}

pub fn quest_type_name(key: &str) -> &'static str {
    QuestType::from_key(key).map_or(FALLBACK_QUEST_LABEL, |t| t.name())
}

/// A countable sub-goal. `current` never exceeds `required`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub required: u32,
    #[serde(default)]
    pub current: u32,
}

impl Objective {
    pub fn new(id: impl Into<String>, description: impl Into<String>, required: u32) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            required,
            current: 0,
        }
    }

    pub fn is_met(&self) -> bool {
        self.current >= self.required
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestRewards {
    pub experience: u64,
    pub gold: u64,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub status: QuestStatus,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<QuestRewards>,
}

impl Quest {
    pub fn new(id: u32, name: impl Into<String>, quest_type: QuestType) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            level: None,
            quest_type,
            status: QuestStatus::Available,
            objectives: Vec::new(),
            rewards: None,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    pub fn with_rewards(mut self, rewards: QuestRewards) -> Self {
        self.rewards = Some(rewards);
        self
    }

    pub fn with_status(mut self, status: QuestStatus) -> Self {
        self.status = status;
        self
    }

    /// Level used for ordering and filtering; unlevelled quests count as 0.
    pub fn effective_level(&self) -> u32 {
        self.level.unwrap_or(0)
    }

    pub fn objective_mut(&mut self, objective_id: &str) -> Option<&mut Objective> {
        self.objectives.iter_mut().find(|o| o.id == objective_id)
    }
}
