use super::types::{Item, ItemType, Rarity};
use std::cmp::Ordering;

/// Rarest first, then catalog type order, then most valuable first.
pub fn compare_items(a: &Item, b: &Item) -> Ordering {
    b.rarity
        .cmp(&a.rarity)
        .then_with(|| a.item_type.cmp(&b.item_type))
        .then_with(|| b.value.cmp(&a.value))
}

/// Stable in-place sort by [`compare_items`].
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(compare_items);
}

/// Optional constraints for [`filter_items`]. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub item_type: Option<ItemType>,
    pub rarity: Option<Rarity>,
    pub min_value: Option<u64>,
    pub max_value: Option<u64>,
    /// Case-insensitive substring of the item name.
    pub search: Option<String>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if self.item_type.is_some_and(|t| item.item_type != t) {
            return false;
        }
        if self.rarity.is_some_and(|r| item.rarity != r) {
            return false;
        }
        if self.min_value.is_some_and(|min| item.value < min) {
            return false;
        }
        if self.max_value.is_some_and(|max| item.value > max) {
            return false;
        }
        if let Some(search) = &self.search {
            if !item.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Items matching every set constraint, in input order.
pub fn filter_items<'a>(items: &'a [Item], filter: &ItemFilter) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
