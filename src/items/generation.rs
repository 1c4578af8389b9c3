use super::names::{item_description, random_item_name};
use super::types::{Item, ItemEffects, ItemType, Rarity};
use crate::core::constants::{FOOD_BASE_HEALING, ITEM_ID_JITTER, POTION_BASE_HEALING};
use rand::Rng;

/// Generate a random item scaled to `level`, drawing type and rarity uniformly.
pub fn generate_random_item(level: u32) -> Item {
    let mut rng = rand::thread_rng();
    generate_random_item_with_rng(level, &mut rng)
}

/// Same as [`generate_random_item`] but with a caller-supplied RNG.
pub fn generate_random_item_with_rng(level: u32, rng: &mut impl Rng) -> Item {
    let item_type = ItemType::ALL[rng.gen_range(0..ItemType::ALL.len())];
    let rarity = Rarity::ALL[rng.gen_range(0..Rarity::ALL.len())];
    generate_item(item_type, rarity, level, rng)
}

/// Build an item of a fixed type and rarity. Only the name and id are random.
pub fn generate_item(item_type: ItemType, rarity: Rarity, level: u32, rng: &mut impl Rng) -> Item {
    let id = next_item_id(rng);
    Item {
        id,
        name: random_item_name(item_type, rng),
        description: item_description(item_type, rarity),
        item_type,
        rarity,
        value: item_value(item_type, rarity, level),
        effects: item_effects(item_type, rarity),
    }
}

/// floor(level * base * (1 + rarity multiplier))
pub fn item_value(item_type: ItemType, rarity: Rarity, level: u32) -> u64 {
    (level as f64 * item_type.base_value() * (1.0 + rarity.multiplier())).floor() as u64
}

/// Consumables heal; everything else has no effect.
pub fn item_effects(item_type: ItemType, rarity: Rarity) -> Option<ItemEffects> {
    let base = match item_type {
        ItemType::Potion => POTION_BASE_HEALING,
        ItemType::Food => FOOD_BASE_HEALING,
        _ => return None,
    };
    let health = (base * (1.0 + rarity.multiplier())).floor() as i32;
    Some(ItemEffects::healing(health))
}

/// Millisecond timestamp plus a small random offset. Collisions are possible.
fn next_item_id(rng: &mut impl Rng) -> u64 {
    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    now + rng.gen_range(0..ITEM_ID_JITTER)
}
