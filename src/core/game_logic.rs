use super::constants::*;
use super::game_state::{GameSession, GameStatus, Player};
use crate::error::{GameError, GameResult};
use crate::items::effects::{apply_item_effect, can_use_item, EffectResult};
use crate::items::types::Item;
use crate::quests::logic::{self as quest_logic, calculate_quest_rewards};
use crate::quests::types::{Quest, QuestRewards};

/// XP needed to leave `level`
pub fn xp_for_next_level(level: u32) -> i64 {
    level as i64 * XP_PER_LEVEL
}

/// Adds XP and applies at most one level-up, however large `amount` is.
///
/// The new level's threshold is subtracted after the level increments, so
/// experience can go negative (level 1 with 100 XP becomes level 2 with -100).
/// Returns true if the player levelled up.
pub fn apply_experience(player: &mut Player, amount: i64) -> bool {
    player.experience = player.experience.saturating_add(amount);
    if player.experience < xp_for_next_level(player.level) {
        return false;
    }

    player.level = player.level.saturating_add(1);
    player.experience = player.experience.saturating_sub(xp_for_next_level(player.level));
    player.health = (player.health + LEVEL_UP_HEALTH_GAIN).min(MAX_HEALTH);
    player.mana = (player.mana + LEVEL_UP_MANA_GAIN).min(MAX_MANA);
    player.attributes.increase_all(LEVEL_UP_ATTRIBUTE_GAIN);
    true
}

/// Result of [`GameSession::take_damage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Survived { health: i32 },
    /// Health hit zero and the session moved to `GameOver`.
    Depleted,
}

impl DamageOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, DamageOutcome::Depleted)
    }
}

impl GameSession {
    /// Starts a fresh game, discarding any previous player.
    /// An empty name falls back to the default.
    pub fn start_game(&mut self, player_name: &str) {
        let name = if player_name.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            player_name
        };
        self.game_started = true;
        self.game_state = GameStatus::Playing;
        self.player = Player::new(STARTING_PLAYER_ID, name);
        self.current_scene = STARTING_SCENE.to_string();
        log::info!("game started for {}", name);
    }

    pub fn pause_game(&mut self) {
        self.set_status(GameStatus::Paused);
    }

    pub fn resume_game(&mut self) {
        self.set_status(GameStatus::Playing);
    }

    pub fn end_game(&mut self) {
        self.set_status(GameStatus::GameOver);
        log::info!("game over at level {}", self.player.level);
    }

    // No transition guard. Leaving GameOver is only logged.
    fn set_status(&mut self, next: GameStatus) {
        if self.game_state == GameStatus::GameOver && next != GameStatus::GameOver {
            log::warn!("leaving GameOver for {:?} without starting a new game", next);
        }
        self.game_state = next;
    }

    /// Moves to another scene. Any name is accepted.
    pub fn change_scene(&mut self, scene_name: &str) {
        log::debug!("scene {} -> {}", self.current_scene, scene_name);
        self.current_scene = scene_name.to_string();
    }

    /// See [`apply_experience`]. Returns true on level-up.
    pub fn add_experience(&mut self, amount: i64) -> bool {
        let leveled = apply_experience(&mut self.player, amount);
        if leveled {
            log::debug!("{} reached level {}", self.player.name, self.player.level);
        }
        leveled
    }

    /// Subtracts health, flooring at zero. Reaching zero ends the game.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.player.health = self.player.health.saturating_sub(amount);
        if self.player.health <= 0 {
            self.player.health = 0;
            self.end_game();
            return DamageOutcome::Depleted;
        }
        self.player.health = self.player.health.min(MAX_HEALTH);
        DamageOutcome::Survived {
            health: self.player.health,
        }
    }

    /// Restores health up to the cap.
    pub fn heal(&mut self, amount: i32) {
        self.player.health = self.player.health.saturating_add(amount).clamp(0, MAX_HEALTH);
    }

    pub fn add_item(&mut self, item: Item) {
        self.player.inventory.push(item);
    }

    /// Removes every inventory entry with this id. Returns how many were removed.
    pub fn remove_item(&mut self, item_id: u64) -> usize {
        let before = self.player.inventory.len();
        self.player.inventory.retain(|item| item.id != item_id);
        before - self.player.inventory.len()
    }

    /// Uses the first inventory entry with `item_id` and removes that entry only.
    pub fn use_item(&mut self, item_id: u64) -> GameResult<EffectResult> {
        let index = self
            .player
            .inventory
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(GameError::ItemNotFound(item_id))?;
        if !can_use_item(&self.player.inventory[index]) {
            return Err(GameError::ItemNotUsable {
                name: self.player.inventory[index].name.clone(),
            });
        }
        let item = self.player.inventory.remove(index);
        Ok(apply_item_effect(&item, &mut self.player))
    }

    /// Turns in a completed quest and grants its experience and items.
    /// Gold is returned to the caller; the player record does not hold gold.
    pub fn turn_in_quest(&mut self, quest: &mut Quest) -> GameResult<QuestRewards> {
        quest_logic::turn_in_quest(quest)?;
        let rewards = calculate_quest_rewards(quest);
        self.add_experience(i64::try_from(rewards.experience).unwrap_or(i64::MAX));
        self.player.inventory.extend(rewards.items.iter().cloned());
        log::debug!(
            "quest {} turned in for {} xp and {} gold",
            quest.id,
            rewards.experience,
            rewards.gold
        );
        Ok(rewards)
    }

    pub fn try_take_damage(&mut self, amount: i32) -> GameResult<DamageOutcome> {
        check_non_negative("take_damage", amount as i64)?;
        Ok(self.take_damage(amount))
    }

    pub fn try_heal(&mut self, amount: i32) -> GameResult<()> {
        check_non_negative("heal", amount as i64)?;
        self.heal(amount);
        Ok(())
    }

    pub fn try_add_experience(&mut self, amount: i64) -> GameResult<bool> {
        check_non_negative("add_experience", amount)?;
        Ok(self.add_experience(amount))
    }

    /// Like [`GameSession::remove_item`], but fails if nothing matched.
    pub fn try_remove_item(&mut self, item_id: u64) -> GameResult<usize> {
        match self.remove_item(item_id) {
            0 => Err(GameError::ItemNotFound(item_id)),
            removed => Ok(removed),
        }
    }
}

fn check_non_negative(operation: &'static str, amount: i64) -> GameResult<()> {
    if amount < 0 {
        return Err(GameError::NegativeAmount { operation, amount });
    }
    Ok(())
}
