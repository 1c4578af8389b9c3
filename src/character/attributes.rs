use crate::core::constants::{BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Strength,
    Agility,
    Intelligence,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Agility,
            AttributeType::Intelligence,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Agility => "AGI",
            AttributeType::Intelligence => "INT",
        }
    }

    /// Human-readable name used in item effect messages.
    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::Strength => "strength",
            AttributeType::Agility => "agility",
            AttributeType::Intelligence => "intelligence",
        }
    }
}

/// The three trainable attributes, flattened into the player record on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            strength: BASE_ATTRIBUTE_VALUE,
            agility: BASE_ATTRIBUTE_VALUE,
            intelligence: BASE_ATTRIBUTE_VALUE,
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        match attr {
            AttributeType::Strength => self.strength,
            AttributeType::Agility => self.agility,
            AttributeType::Intelligence => self.intelligence,
        }
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        match attr {
            AttributeType::Strength => self.strength = value,
            AttributeType::Agility => self.agility = value,
            AttributeType::Intelligence => self.intelligence = value,
        }
    }

    /// Applies a signed delta. Attributes are uncapped above and floor at zero.
    pub fn add_signed(&mut self, attr: AttributeType, delta: i32) {
        let value = self.get(attr).saturating_add_signed(delta);
        self.set(attr, value);
    }

    /// Raises every attribute by the same amount (level-up gains).
    pub fn increase_all(&mut self, amount: u32) {
        for attr in AttributeType::all() {
            self.set(attr, self.get(attr).saturating_add(amount));
        }
    }

    pub fn total(&self) -> u32 {
        self.strength + self.agility + self.intelligence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attributes() {
        let attrs = Attributes::new();
        for attr_type in AttributeType::all() {
            assert_eq!(attrs.get(attr_type), 10);
        }
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Strength, 16);
        assert_eq!(attrs.get(AttributeType::Strength), 16);
        assert_eq!(attrs.strength, 16);
        assert_eq!(attrs.get(AttributeType::Agility), 10);
    }

    #[test]
    fn test_add_signed_floors_at_zero() {
        let mut attrs = Attributes::new();
        attrs.add_signed(AttributeType::Agility, -25);
        assert_eq!(attrs.agility, 0);
        attrs.add_signed(AttributeType::Agility, 7);
        assert_eq!(attrs.agility, 7);
    }

    #[test]
    fn test_add_signed_is_uncapped() {
        let mut attrs = Attributes::new();
        attrs.add_signed(AttributeType::Intelligence, 500);
        assert_eq!(attrs.intelligence, 510);
    }

    #[test]
    fn test_increase_all() {
        let mut attrs = Attributes::new();
        attrs.increase_all(2);
        assert_eq!(attrs.total(), 36);
        for attr in AttributeType::all() {
            assert_eq!(attrs.get(attr), 12);
        }
    }

    #[test]
    fn test_abbrev_and_name() {
        assert_eq!(AttributeType::Strength.abbrev(), "STR");
        assert_eq!(AttributeType::Agility.abbrev(), "AGI");
        assert_eq!(AttributeType::Intelligence.name(), "intelligence");
    }
}
