//! Using consumables on the player.

use super::types::Item;
use crate::character::attributes::AttributeType;
use crate::core::constants::{MAX_HEALTH, MAX_MANA};
use crate::core::game_state::Player;
use serde::{Deserialize, Serialize};

/// Outcome of applying an item. `used` is false when the item had no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResult {
    pub used: bool,
    pub message: String,
}

/// Only potions and food can be used from the inventory.
pub fn can_use_item(item: &Item) -> bool {
    item.item_type.is_consumable()
}

/// Applies every nonzero effect in the order health, mana, strength, agility,
/// intelligence. Health and mana clamp to their caps; attributes do not.
///
/// Each applied effect replaces the message of the previous one, so an item
/// with several effects reports only the last.
pub fn apply_item_effect(item: &Item, player: &mut Player) -> EffectResult {
    let mut result = EffectResult::default();
    let Some(effects) = item.effects.as_ref().filter(|e| !e.is_empty()) else {
        return result;
    };

    if let Some(amount) = nonzero(effects.health) {
        player.health = player.health.saturating_add(amount).clamp(0, MAX_HEALTH);
        result.used = true;
        result.message = format!("Used {}, restored {} health", item.name, amount);
    }

    if let Some(amount) = nonzero(effects.mana) {
        player.mana = player.mana.saturating_add(amount).clamp(0, MAX_MANA);
        result.used = true;
        result.message = format!("Used {}, restored {} mana", item.name, amount);
    }

    let attribute_effects = [
        (AttributeType::Strength, effects.strength),
        (AttributeType::Agility, effects.agility),
        (AttributeType::Intelligence, effects.intelligence),
    ];
    for (attr, delta) in attribute_effects {
        if let Some(amount) = nonzero(delta) {
            player.attributes.add_signed(attr, amount);
            result.used = true;
            result.message = format!(
                "Used {}, {} increased by {}",
                item.name,
                attr.name(),
                amount
            );
        }
    }

    result
}

fn nonzero(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}
