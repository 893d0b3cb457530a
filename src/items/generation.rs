//! Random item generation by item type.

use super::enhance::enhance;
use super::types::{EnhancedItem, ItemType};
use crate::core::GameSession;
use crate::rarity::roll_random_tier;
use rand::Rng;

/// Pick a uniform base item of `item_type`, roll its tier over the global
/// weights (with the player's modifier as bonus), enhance it and record the
/// find. Returns `None` if the catalog has no items of that type.
pub fn generate_random_item<R: Rng>(
    session: &mut GameSession<'_, R>,
    item_type: ItemType,
) -> Option<EnhancedItem> {
    let catalog = session.catalog;
    let candidates = catalog.items_of_type(item_type);
    if candidates.is_empty() {
        tracing::warn!(item_type = item_type.name(), "no items of type to generate");
        return None;
    }

    let base = candidates[session.random_index(candidates.len())];
    let modifier = session.modifier();
    let tier = roll_random_tier(modifier, &mut *session.rng);
    let item = enhance(base, tier);
    session.record_find(tier);
    Some(item)
}
