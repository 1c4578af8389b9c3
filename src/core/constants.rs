// Resource bounds
pub const MAX_HEALTH: i32 = 100;
pub const MAX_MANA: i32 = 50;

// New character defaults
pub const STARTING_PLAYER_ID: u32 = 1;
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";
pub const BASE_ATTRIBUTE_VALUE: u32 = 10;
pub const NUM_ATTRIBUTES: usize = 3;
pub const STARTING_SCENE: &str = "village";
pub const HOME_SCENE: &str = "home";

// XP and leveling
pub const XP_PER_LEVEL: i64 = 100;
pub const LEVEL_UP_HEALTH_GAIN: i32 = 10;
pub const LEVEL_UP_MANA_GAIN: i32 = 5;
pub const LEVEL_UP_ATTRIBUTE_GAIN: u32 = 2;

// Item generation
pub const ITEM_ID_JITTER: u64 = 1000;
pub const POTION_BASE_HEALING: f64 = 20.0;
pub const FOOD_BASE_HEALING: f64 = 10.0;

// Display fallbacks for unrecognised keys
pub const FALLBACK_ITEM_TYPE_NAME: &str = "Item";
pub const FALLBACK_ITEM_ICON: &str = "📦";
pub const FALLBACK_RARITY_NAME: &str = "Common";
pub const FALLBACK_RARITY_COLOR: &str = "#999999";
pub const FALLBACK_QUEST_LABEL: &str = "Unknown";
