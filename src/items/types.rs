use crate::core::constants::{
    FALLBACK_ITEM_ICON, FALLBACK_ITEM_TYPE_NAME, FALLBACK_RARITY_COLOR, FALLBACK_RARITY_NAME,
};
use serde::{Deserialize, Serialize};

/// Item categories, in catalog order. The declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Potion,
    Food,
    Material,
    Currency,
    Treasure,
    Key,
}

impl ItemType {
    pub const ALL: [ItemType; 8] = [
        ItemType::Weapon,
        ItemType::Armor,
        ItemType::Potion,
        ItemType::Food,
        ItemType::Material,
        ItemType::Currency,
        ItemType::Treasure,
        ItemType::Key,
    ];

    /// Wire key, as used by the UI.
    pub fn key(&self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Potion => "potion",
            ItemType::Food => "food",
            ItemType::Material => "material",
            ItemType::Currency => "currency",
            ItemType::Treasure => "treasure",
            ItemType::Key => "key",
        }
    }

    pub fn from_key(key: &str) -> Option<ItemType> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Weapon => "Weapon",
            ItemType::Armor => "Armor",
            ItemType::Potion => "Potion",
            ItemType::Food => "Food",
            ItemType::Material => "Material",
            ItemType::Currency => "Currency",
            ItemType::Treasure => "Treasure",
            ItemType::Key => "Key",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ItemType::Weapon => "⚔️",
            ItemType::Armor => "🛡️",
            ItemType::Potion => "🧪",
            ItemType::Food => "🍎",
            ItemType::Material => "🧱",
            ItemType::Currency => "💰",
            ItemType::Treasure => "💎",
            ItemType::Key => "🗝️",
        }
    }

    /// Per-level value multiplier used by item generation.
    pub fn base_value(&self) -> f64 {
        match self {
            ItemType::Weapon => 10.0,
            ItemType::Armor => 8.0,
            ItemType::Potion => 5.0,
            ItemType::Food => 3.0,
            ItemType::Material => 2.0,
            ItemType::Currency => 1.0,
            ItemType::Treasure => 20.0,
            ItemType::Key => 1.0,
        }
    }

    /// Consumables are the only items a player can use directly.
    pub fn is_consumable(&self) -> bool {
        matches!(self, ItemType::Potion | ItemType::Food)
    }
}

/// Quality tier shared by items and achievements, ordered Common < Legendary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn from_key(key: &str) -> Option<Rarity> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#999999",
            Rarity::Uncommon => "#1eff00",
            Rarity::Rare => "#0070dd",
            Rarity::Epic => "#a335ee",
            Rarity::Legendary => "#ff8000",
        }
    }

    /// Bonus applied on top of the base value: value scales by `1 + multiplier`.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 0.0,
            Rarity::Uncommon => 0.2,
            Rarity::Rare => 0.5,
            Rarity::Epic => 1.0,
            Rarity::Legendary => 2.0,
        }
    }
}

pub fn item_type_name(key: &str) -> &'static str {
    ItemType::from_key(key).map_or(FALLBACK_ITEM_TYPE_NAME, |t| t.name())
}

pub fn item_icon(key: &str) -> &'static str {
    ItemType::from_key(key).map_or(FALLBACK_ITEM_ICON, |t| t.icon())
}

pub fn rarity_name(key: &str) -> &'static str {
    Rarity::from_key(key).map_or(FALLBACK_RARITY_NAME, |r| r.name())
}

pub fn rarity_color(key: &str) -> &'static str {
    Rarity::from_key(key).map_or(FALLBACK_RARITY_COLOR, |r| r.color())
}

/// Stat deltas an item applies when used. Absent fields have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<i32>,
}

impl ItemEffects {
    pub fn healing(amount: i32) -> Self {
        Self {
            health: Some(amount),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<ItemEffects>,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>, item_type: ItemType, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            item_type,
            rarity,
            value: 0,
            effects: None,
        }
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }

    pub fn with_effects(mut self, effects: ItemEffects) -> Self {
        self.effects = Some(effects);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_item_type_ordering_follows_declaration() {
        let mut sorted = ItemType::ALL;
        sorted.sort();
        assert_eq!(sorted, ItemType::ALL);
        assert!(ItemType::Weapon < ItemType::Key);
    }

    #[test]
    fn test_key_round_trip() {
        for t in ItemType::ALL {
            assert_eq!(ItemType::from_key(t.key()), Some(t));
        }
        for r in Rarity::ALL {
            assert_eq!(Rarity::from_key(r.key()), Some(r));
        }
        assert_eq!(ItemType::from_key("spellbook"), None);
    }

    #[test]
    fn test_string_lookups_fall_back() {
        assert_eq!(item_type_name("weapon"), "Weapon");
        assert_eq!(item_type_name("spellbook"), "Item");
        assert_eq!(item_icon("potion"), "🧪");
        assert_eq!(item_icon(""), "📦");
        assert_eq!(rarity_name("epic"), "Epic");
        assert_eq!(rarity_name("mythic"), "Common");
        assert_eq!(rarity_color("legendary"), "#ff8000");
        assert_eq!(rarity_color("mythic"), "#999999");
    }

    #[test]
    fn test_rarity_multipliers() {
        assert_eq!(Rarity::Common.multiplier(), 0.0);
        assert!((Rarity::Uncommon.multiplier() - 0.2).abs() < f64::EPSILON);
        assert_eq!(Rarity::Legendary.multiplier(), 2.0);
    }

    #[test]
    fn test_consumables() {
        let consumable: Vec<ItemType> = ItemType::ALL
            .into_iter()
            .filter(|t| t.is_consumable())
            .collect();
        assert_eq!(consumable, vec![ItemType::Potion, ItemType::Food]);
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new(7, "Red Healing Potion", ItemType::Potion, Rarity::Rare)
            .with_value(37)
            .with_effects(ItemEffects::healing(30));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "potion");
        assert_eq!(json["rarity"], "rare");
        assert_eq!(json["effects"]["health"], 30);
        assert!(json["effects"].get("mana").is_none());
    }

    #[test]
    fn test_item_without_effects_deserializes() {
        let json = r#"{"id":1,"name":"Iron Key","description":"","type":"key","rarity":"common","value":1}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Key);
        assert!(item.effects.is_none());
    }
}
