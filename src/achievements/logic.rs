//! Achievement evaluation, ordering, and filtering.

use super::types::{Achievement, PlayerProgress};
use crate::items::types::{rarity_color, rarity_name, Rarity};

pub fn achievement_rarity_name(key: &str) -> &'static str {
    rarity_name(key)
}

pub fn achievement_rarity_color(key: &str) -> &'static str {
    rarity_color(key)
}

/// True when the snapshot meets the achievement's requirement.
/// Missing or unrecognised requirements never unlock.
pub fn is_achievement_unlocked(achievement: &Achievement, progress: &PlayerProgress) -> bool {
    let Some(requirement) = achievement.requirement else {
        return false;
    };
    progress
        .metric(requirement.kind)
        .is_some_and(|current| current >= requirement.value)
}

/// Re-evaluates every locked achievement, caching the result in `unlocked`.
/// Returns the ids unlocked by this call. Already unlocked entries stay unlocked.
pub fn evaluate_achievements(
    achievements: &mut [Achievement],
    progress: &PlayerProgress,
) -> Vec<u32> {
    let mut newly_unlocked = Vec::new();
    for achievement in achievements.iter_mut().filter(|a| !a.unlocked) {
        if is_achievement_unlocked(achievement, progress) {
            achievement.unlocked = true;
            log::debug!("achievement {} '{}' unlocked", achievement.id, achievement.name);
            newly_unlocked.push(achievement.id);
        }
    }
    newly_unlocked
}

/// Stable in-place sort: unlocked first, rarest first, then by id.
pub fn sort_achievements(achievements: &mut [Achievement]) {
    achievements.sort_by(|a, b| {
        b.unlocked
            .cmp(&a.unlocked)
            .then_with(|| b.rarity.cmp(&a.rarity))
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[derive(Debug, Clone, Default)]
pub struct AchievementFilter {
    pub rarity: Option<Rarity>,
    pub unlocked: Option<bool>,
}

impl AchievementFilter {
    pub fn matches(&self, achievement: &Achievement) -> bool {
        self.rarity.map_or(true, |r| achievement.rarity == r)
            && self.unlocked.map_or(true, |u| achievement.unlocked == u)
    }
}

pub fn filter_achievements<'a>(
    achievements: &'a [Achievement],
    filter: &AchievementFilter,
) -> Vec<&'a Achievement> {
    achievements.iter().filter(|a| filter.matches(a)).collect()
}
