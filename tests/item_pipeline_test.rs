//! Integration test: Item generation -> inventory -> use pipeline
//!
//! Covers the full flow from a seeded item roll through value and effect
//! scaling, into the inventory, through sorting/filtering and finally
//! consumption on the player.

use questlog::items::effects::can_use_item;
use questlog::items::generation::{generate_item, generate_random_item_with_rng, item_value};
use questlog::items::sorting::{filter_items, sort_items, ItemFilter};
use questlog::items::types::{item_icon, item_type_name, rarity_color, rarity_name, ItemEffects};
use questlog::{GameError, GameSession, Item, ItemType, Rarity, MAX_HEALTH};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn started_session() -> GameSession {
    let mut session = GameSession::new();
    session.start_game("Tester");
    session
}

// =========================================================================
// Generation: value and effect scaling
// =========================================================================

#[test]
fn test_generated_items_stay_within_catalog() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    for level in 1..=20 {
        let item = generate_random_item_with_rng(level, &mut rng);
        assert!(ItemType::ALL.contains(&item.item_type));
        assert!(Rarity::ALL.contains(&item.rarity));
        assert_eq!(
            item.value,
            item_value(item.item_type, item.rarity, level),
            "value must follow the scaling formula"
        );
        assert_eq!(item.effects.is_some(), can_use_item(&item));
        assert!(!item.name.is_empty());
    }
}

#[test]
fn test_value_scales_with_level_and_rarity() {
    assert_eq!(item_value(ItemType::Weapon, Rarity::Common, 1), 10);
    assert_eq!(item_value(ItemType::Weapon, Rarity::Epic, 3), 60);
    assert_eq!(item_value(ItemType::Treasure, Rarity::Legendary, 2), 120);
    assert_eq!(item_value(ItemType::Key, Rarity::Common, 0), 0);
}

#[test]
fn test_consumable_healing_scales_with_rarity() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let potion = generate_item(ItemType::Potion, Rarity::Rare, 4, &mut rng);
    let food = generate_item(ItemType::Food, Rarity::Epic, 4, &mut rng);
    let sword = generate_item(ItemType::Weapon, Rarity::Legendary, 4, &mut rng);

    assert_eq!(potion.effects.and_then(|e| e.health), Some(30));
    assert_eq!(food.effects.and_then(|e| e.health), Some(20));
    assert!(sword.effects.is_none());
}

// =========================================================================
// Inventory and consumption
// =========================================================================

#[test]
fn test_generated_potion_heals_when_used() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut session = started_session();
    let mut potion = generate_item(ItemType::Potion, Rarity::Common, 1, &mut rng);
    potion.id = 1;
    session.add_item(potion);
    session.take_damage(50);

    let result = session.use_item(1).unwrap();
    assert!(result.used);
    assert!(result.message.contains("restored 20 health"));
    assert_eq!(session.player.health, 70);
    assert!(session.player.inventory.is_empty());
}

#[test]
fn test_using_equipment_is_rejected_and_kept() {
    let mut session = started_session();
    session.add_item(Item::new(9, "Ancient Axe", ItemType::Weapon, Rarity::Epic));

    let err = session.use_item(9).unwrap_err();
    assert!(matches!(err, GameError::ItemNotUsable { .. }));
    assert_eq!(session.player.inventory.len(), 1);

    assert!(matches!(session.use_item(404), Err(GameError::ItemNotFound(404))));
}

#[test]
fn test_overheal_is_capped() {
    let mut session = started_session();
    session.take_damage(10);
    session.add_item(
        Item::new(1, "Roast Meat", ItemType::Food, Rarity::Common)
            .with_effects(ItemEffects::healing(500)),
    );
    session.use_item(1).unwrap();
    assert_eq!(session.player.health, MAX_HEALTH);
}

#[test]
fn test_duplicate_ids_removed_together() {
    let mut session = started_session();
    session.add_item(Item::new(5, "Stone", ItemType::Material, Rarity::Common));
    session.add_item(Item::new(5, "Stone", ItemType::Material, Rarity::Common));
    session.add_item(Item::new(6, "Cloth", ItemType::Material, Rarity::Common));

    assert_eq!(session.remove_item(5), 2);
    assert_eq!(session.player.inventory.len(), 1);
    assert_eq!(session.remove_item(5), 0);
    assert!(session.try_remove_item(5).is_err());
}

// =========================================================================
// Sorting and filtering a generated inventory
// =========================================================================

#[test]
fn test_sorted_inventory_is_rarest_first() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut items: Vec<Item> = (0..30)
        .map(|_| generate_random_item_with_rng(5, &mut rng))
        .collect();
    sort_items(&mut items);

    for pair in items.windows(2) {
        assert!(pair[0].rarity >= pair[1].rarity);
        if pair[0].rarity == pair[1].rarity {
            assert!(pair[0].item_type <= pair[1].item_type);
            if pair[0].item_type == pair[1].item_type {
                assert!(pair[0].value >= pair[1].value);
            }
        }
    }
}

#[test]
fn test_filter_combines_constraints() {
    let items = vec![
        Item::new(1, "Sharp Sword", ItemType::Weapon, Rarity::Rare).with_value(75),
        Item::new(2, "Sturdy Sword", ItemType::Weapon, Rarity::Common).with_value(10),
        Item::new(3, "Sharp Dagger", ItemType::Weapon, Rarity::Rare).with_value(30),
        Item::new(4, "Ruby", ItemType::Treasure, Rarity::Rare).with_value(90),
    ];

    let filter = ItemFilter {
        item_type: Some(ItemType::Weapon),
        rarity: Some(Rarity::Rare),
        min_value: Some(50),
        search: Some("SWORD".to_string()),
        ..ItemFilter::default()
    };
    let ids: Vec<u64> = filter_items(&items, &filter).iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1]);

    let everything = filter_items(&items, &ItemFilter::default());
    assert_eq!(everything.len(), items.len());
}

// =========================================================================
// Display lookups
// =========================================================================

#[test]
fn test_display_lookups_fall_back_for_unknown_keys() {
    assert_eq!(item_type_name("potion"), "Potion");
    assert_eq!(item_type_name("spaceship"), "Item");
    assert_eq!(item_icon("spaceship"), "📦");
    assert_eq!(rarity_name("mythic"), "Common");
    assert_eq!(rarity_color("mythic"), "#999999");
    assert_eq!(rarity_color("legendary"), Rarity::Legendary.color());
}
