//! Static achievement definitions.

use super::types::{Achievement, Requirement, RequirementType};
use crate::error::GameResult;
use crate::items::types::Rarity;

/// Compile-time achievement definition.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    pub requirement: Requirement,
}

impl AchievementDef {
    pub fn to_achievement(&self) -> Achievement {
        Achievement::new(self.id, self.name, self.rarity)
            .with_description(self.description)
            .with_requirement(self.requirement.kind, self.requirement.value)
    }
}

const fn def(
    id: u32,
    name: &'static str,
    description: &'static str,
    rarity: Rarity,
    kind: RequirementType,
    value: u64,
) -> AchievementDef {
    AchievementDef {
        id,
        name,
        description,
        rarity,
        requirement: Requirement { kind, value },
    }
}

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // Level
    def(1, "Getting Started", "Reach level 2", Rarity::Common, RequirementType::Level, 2),
    def(2, "Seasoned", "Reach level 5", Rarity::Uncommon, RequirementType::Level, 5),
    def(3, "Veteran", "Reach level 10", Rarity::Rare, RequirementType::Level, 10),
    def(4, "Living Legend", "Reach level 25", Rarity::Legendary, RequirementType::Level, 25),
    // Combat
    def(10, "First Blood", "Defeat your first enemy", Rarity::Common, RequirementType::EnemiesKilled, 1),
    def(11, "Slayer", "Defeat 50 enemies", Rarity::Rare, RequirementType::EnemiesKilled, 50),
    def(12, "Scourge", "Defeat 500 enemies", Rarity::Epic, RequirementType::EnemiesKilled, 500),
    // Quests
    def(20, "Helping Hand", "Complete a quest", Rarity::Common, RequirementType::QuestsCompleted, 1),
    def(21, "Hero of the Village", "Complete 10 quests", Rarity::Epic, RequirementType::QuestsCompleted, 10),
    // Items
    def(30, "Pack Rat", "Collect 10 items", Rarity::Uncommon, RequirementType::ItemsCollected, 10),
    def(31, "Hoarder", "Collect 100 items", Rarity::Rare, RequirementType::ItemsCollected, 100),
    // Exploration
    def(40, "Wanderer", "Visit 3 different places", Rarity::Common, RequirementType::ScenesVisited, 3),
    def(41, "Cartographer", "Visit 8 different places", Rarity::Epic, RequirementType::ScenesVisited, 8),
];

pub fn get_achievement_def(id: u32) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

/// Fresh, all-locked copies of the built-in achievements.
pub fn default_achievements() -> Vec<Achievement> {
    ALL_ACHIEVEMENTS.iter().map(AchievementDef::to_achievement).collect()
}

/// Parses a JSON array of achievements.
pub fn load_achievements_json(json: &str) -> GameResult<Vec<Achievement>> {
    Ok(serde_json::from_str(json)?)
}
