//! Tier scaling of item definitions.

use super::types::{EnhancedItem, ItemDef};
use crate::rarity::{get_tier, TierId};

/// Scale a value by a tier multiplier, truncating toward zero.
pub fn scale_stat(value: i64, multiplier: f64) -> i64 {
    (value as f64 * multiplier).trunc() as i64
}

fn scale_value(value: u64, multiplier: f64) -> u64 {
    (value as f64 * multiplier).floor() as u64
}

/// Build a fresh item instance of `item` at `tier`.
///
/// Stats and value are multiplied by the tier multiplier and truncated, the
/// tier name is prefixed to the item name, and the description gains a
/// quality note. `item` is left untouched.
pub fn enhance(item: &ItemDef, tier: TierId) -> EnhancedItem {
    let tier_def = get_tier(tier);
    let multiplier = tier_def.multiplier;

    let stats = item
        .stats
        .iter()
        .map(|(stat, value)| (stat.clone(), scale_stat(*value, multiplier)))
        .collect();

    EnhancedItem {
        item_id: item.id.clone(),
        tier,
        name: format!("{} {}", tier_def.name, item.name),
        description: format!("{} ({} Quality)", item.description, tier_def.name),
        item_type: item.item_type,
        stats,
        value: scale_value(item.value, multiplier),
    }
}
