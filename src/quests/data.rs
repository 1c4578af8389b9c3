//! Built-in quest definitions and loading of UI-supplied ones.

use super::types::{Objective, Quest, QuestRewards, QuestType};
use crate::error::GameResult;

/// Quests offered in the starting village.
pub fn starter_quests() -> Vec<Quest> {
    vec![
        Quest::new(1, "Village Greeting", QuestType::Talk)
            .with_level(1)
            .with_description("Introduce yourself to the village elder.")
            .with_objective(Objective::new("talk_elder", "Speak with the elder", 1))
            .with_rewards(QuestRewards {
                experience: 50,
                gold: 10,
                items: Vec::new(),
            }),
        Quest::new(2, "Rat Trouble", QuestType::Kill)
            .with_level(2)
            .with_description("Clear the rats out of the granary.")
            .with_objective(Objective::new("kill_rats", "Slay granary rats", 5))
            .with_rewards(QuestRewards {
                experience: 120,
                gold: 25,
                items: Vec::new(),
            }),
        Quest::new(3, "Herbal Remedy", QuestType::Collect)
            .with_level(3)
            .with_description("Gather herbs and mushrooms for the healer.")
            .with_objective(Objective::new("herbs", "Collect healing herbs", 8))
            .with_objective(Objective::new("mushrooms", "Collect glowing mushrooms", 4))
            .with_rewards(QuestRewards {
                experience: 180,
                gold: 40,
                items: Vec::new(),
            }),
        Quest::new(4, "Beyond the Ridge", QuestType::Explore)
            .with_level(5)
            .with_description("Scout the forest, the old mine and the ruined watchtower.")
            .with_objective(Objective::new("forest", "Enter the forest", 1))
            .with_objective(Objective::new("mine", "Find the old mine", 1))
            .with_objective(Objective::new("tower", "Reach the watchtower", 1))
            .with_rewards(QuestRewards {
                experience: 300,
                gold: 60,
                items: Vec::new(),
            }),
    ]
}

/// Parses a JSON array of quests.
pub fn load_quests_json(json: &str) -> GameResult<Vec<Quest>> {
    Ok(serde_json::from_str(json)?)
}
