use super::types::{ItemType, Rarity};
use rand::seq::SliceRandom;
use rand::Rng;

pub const WEAPON_PREFIXES: [&str; 5] = ["Sharp", "Sturdy", "Mysterious", "Ancient", "Fabled"];
pub const WEAPON_NAMES: [&str; 5] = ["Sword", "Axe", "Hammer", "Spear", "Dagger"];

pub const ARMOR_PREFIXES: [&str; 5] = ["Tough", "Light", "Ornate", "Guarding", "Enchanted"];
pub const ARMOR_NAMES: [&str; 5] = ["Helmet", "Breastplate", "Greaves", "Gauntlets", "Boots"];

pub const POTION_PREFIXES: [&str; 5] = ["Red", "Blue", "Green", "Purple", "Golden"];
pub const POTION_NAMES: [&str; 5] = [
    "Healing Potion",
    "Mana Potion",
    "Strength Potion",
    "Agility Potion",
    "Intellect Potion",
];

pub const FOOD_NAMES: [&str; 5] = ["Apple", "Bread", "Roast Meat", "Cheese", "Honey"];
pub const MATERIAL_NAMES: [&str; 5] = ["Timber", "Stone", "Iron Ore", "Copper Ore", "Cloth"];
pub const TREASURE_NAMES: [&str; 5] = ["Diamond", "Ruby", "Sapphire", "Emerald", "Pearl"];
pub const KEY_NAMES: [&str; 5] = [
    "Iron Key",
    "Copper Key",
    "Silver Key",
    "Golden Key",
    "Arcane Key",
];
pub const CURRENCY_NAME: &str = "Gold Coins";

fn pick<'a>(list: &[&'a str], rng: &mut impl Rng) -> &'a str {
    list.choose(rng).copied().unwrap_or_default()
}

/// Picks a display name for a freshly generated item of the given type.
pub fn random_item_name(item_type: ItemType, rng: &mut impl Rng) -> String {
    match item_type {
        ItemType::Weapon => format!(
            "{} {}",
            pick(&WEAPON_PREFIXES, rng),
            pick(&WEAPON_NAMES, rng)
        ),
        ItemType::Armor => format!(
            "{} {}",
            pick(&ARMOR_PREFIXES, rng),
            pick(&ARMOR_NAMES, rng)
        ),
        ItemType::Potion => format!(
            "{} {}",
            pick(&POTION_PREFIXES, rng),
            pick(&POTION_NAMES, rng)
        ),
        ItemType::Food => pick(&FOOD_NAMES, rng).to_string(),
        ItemType::Material => pick(&MATERIAL_NAMES, rng).to_string(),
        ItemType::Currency => CURRENCY_NAME.to_string(),
        ItemType::Treasure => pick(&TREASURE_NAMES, rng).to_string(),
        ItemType::Key => pick(&KEY_NAMES, rng).to_string(),
    }
}

/// Flavour text. Currency ignores rarity.
pub fn item_description(item_type: ItemType, rarity: Rarity) -> String {
    let quality = rarity.name();
    match item_type {
        ItemType::Weapon => format!("A weapon of {quality} quality with a keen edge."),
        ItemType::Armor => format!("Armor of {quality} quality offering solid protection."),
        ItemType::Potion => format!("A potion of {quality} quality that restores health."),
        ItemType::Food => format!("Food of {quality} quality that restores a little health."),
        ItemType::Material => format!("A crafting material of {quality} quality."),
        ItemType::Currency => "Coins for buying goods.".to_string(),
        ItemType::Treasure => format!("A treasure of {quality} quality, worth a fortune."),
        ItemType::Key => format!("A key of {quality} quality that opens a particular door or chest."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weapon_names_combine_prefix_and_noun() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let name = random_item_name(ItemType::Weapon, &mut rng);
            let (prefix, noun) = name.split_once(' ').unwrap();
            assert!(WEAPON_PREFIXES.contains(&prefix));
            assert!(WEAPON_NAMES.contains(&noun));
        }
    }

    #[test]
    fn test_potion_names_keep_two_word_noun() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let name = random_item_name(ItemType::Potion, &mut rng);
            let (prefix, noun) = name.split_once(' ').unwrap();
            assert!(POTION_PREFIXES.contains(&prefix));
            assert!(POTION_NAMES.contains(&noun));
        }
    }

    #[test]
    fn test_flat_lists() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            assert!(FOOD_NAMES.contains(&random_item_name(ItemType::Food, &mut rng).as_str()));
            assert!(KEY_NAMES.contains(&random_item_name(ItemType::Key, &mut rng).as_str()));
        }
        assert_eq!(random_item_name(ItemType::Currency, &mut rng), CURRENCY_NAME);
    }

    #[test]
    fn test_description_mentions_rarity() {
        let desc = item_description(ItemType::Weapon, Rarity::Epic);
        assert!(desc.contains("Epic"));
        let coins = item_description(ItemType::Currency, Rarity::Legendary);
        assert!(!coins.contains("Legendary"));
    }
}
