use super::types::{Quest, QuestRewards, QuestStatus, QuestType};
use crate::error::{GameError, GameResult};
use std::collections::HashMap;

/// Externally tracked counts keyed by objective id.
pub type ObjectiveProgress = HashMap<String, u32>;

pub fn can_accept_quest(quest: &Quest) -> bool {
    quest.status == QuestStatus::Available
}

pub fn can_turn_in_quest(quest: &Quest) -> bool {
    quest.status == QuestStatus::Completed
}

pub fn is_quest_completed(quest: &Quest) -> bool {
    matches!(quest.status, QuestStatus::Completed | QuestStatus::TurnedIn)
}

/// True when every objective's tracked count reaches its threshold.
/// Objectives missing from `progress` count as zero.
pub fn check_quest_objectives(quest: &Quest, progress: &ObjectiveProgress) -> bool {
    quest
        .objectives
        .iter()
        .all(|o| progress.get(&o.id).copied().unwrap_or(0) >= o.required)
}

/// Sets an objective's progress to `progress` (capped at its threshold).
///
/// This is an absolute set, so a smaller value lowers progress. An accepted
/// quest whose objectives are all met becomes completed; other statuses are
/// left alone. Unknown objective ids leave the quest untouched.
pub fn update_quest_progress<'a>(
    quest: &'a mut Quest,
    objective_id: &str,
    progress: u32,
) -> &'a mut Quest {
    let Some(objective) = quest.objective_mut(objective_id) else {
        return quest;
    };
    objective.current = progress.min(objective.required);

    let all_met = quest.objectives.iter().all(|o| o.is_met());
    if all_met && quest.status == QuestStatus::Accepted {
        quest.status = QuestStatus::Completed;
        log::debug!("quest {} '{}' completed", quest.id, quest.name);
    }
    quest
}

/// Like [`update_quest_progress`], but reports an unknown objective id.
pub fn try_update_quest_progress<'a>(
    quest: &'a mut Quest,
    objective_id: &str,
    progress: u32,
) -> GameResult<&'a mut Quest> {
    if quest.objective_mut(objective_id).is_none() {
        return Err(GameError::ObjectiveNotFound {
            quest_id: quest.id,
            objective_id: objective_id.to_string(),
        });
    }
    Ok(update_quest_progress(quest, objective_id, progress))
}

pub fn calculate_quest_rewards(quest: &Quest) -> QuestRewards {
    quest.rewards.clone().unwrap_or_default()
}

/// Overall progress across objectives, floored and capped at 100.
pub fn get_quest_progress_percentage(quest: &Quest) -> u32 {
    if quest.objectives.is_empty() {
        return 0;
    }
    let required: u64 = quest.objectives.iter().map(|o| o.required as u64).sum();
    let current: u64 = quest.objectives.iter().map(|o| o.current as u64).sum();
    if required == 0 {
        return 100;
    }
    ((current * 100) / required).min(100) as u32
}

/// Available -> Accepted.
pub fn accept_quest(quest: &mut Quest) -> GameResult<()> {
    transition(quest, QuestStatus::Available, QuestStatus::Accepted)
}

/// Completed -> TurnedIn.
pub fn turn_in_quest(quest: &mut Quest) -> GameResult<()> {
    transition(quest, QuestStatus::Completed, QuestStatus::TurnedIn)
}

fn transition(quest: &mut Quest, expected: QuestStatus, next: QuestStatus) -> GameResult<()> {
    if quest.status != expected {
        return Err(GameError::InvalidQuestTransition {
            quest_id: quest.id,
            from: quest.status,
            to: next,
        });
    }
    quest.status = next;
    Ok(())
}

/// Stable in-place sort: by status priority, then ascending level.
pub fn sort_quests(quests: &mut [Quest]) {
    quests.sort_by(|a, b| {
        a.status
            .sort_priority()
            .cmp(&b.status.sort_priority())
            .then_with(|| a.effective_level().cmp(&b.effective_level()))
    });
}

#[derive(Debug, Clone, Default)]
pub struct QuestFilter {
    pub status: Option<QuestStatus>,
    pub quest_type: Option<QuestType>,
    pub min_level: Option<u32>,
    pub max_level: Option<u32>,
}

impl QuestFilter {
    pub fn matches(&self, quest: &Quest) -> bool {
        let level = quest.effective_level();
        self.status.map_or(true, |s| quest.status == s)
            && self.quest_type.map_or(true, |t| quest.quest_type == t)
            && self.min_level.map_or(true, |min| level >= min)
            && self.max_level.map_or(true, |max| level <= max)
    }
}

pub fn filter_quests<'a>(quests: &'a [Quest], filter: &QuestFilter) -> Vec<&'a Quest> {
    quests.iter().filter(|q| filter.matches(q)).collect()
}
