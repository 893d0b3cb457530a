//! Player state accessors used by the reward engine.

use crate::items::EnhancedItem;

/// Everything the resolvers need to read from or write to the player.
///
/// Implementations own storage; calls are synchronous and infallible from
/// the engine's point of view.
pub trait PlayerState {
    /// Luck stat, if the character has one.
    fn luck(&self) -> Option<f64>;

    fn dungeon_depth(&self) -> u32;

    fn profession_level(&self, profession: &str) -> u32;

    /// Total units held of `item_id`, across all tiers.
    fn item_count(&self, item_id: &str) -> u32;

    fn has_item(&self, item_id: &str, quantity: u32) -> bool {
        self.item_count(item_id) >= quantity
    }

    fn add_item(&mut self, item: EnhancedItem, quantity: u32);

    /// Remove `quantity` units. Returns false (and removes nothing) if the
    /// player does not hold enough.
    fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool;

    fn add_gold(&mut self, amount: u64);

    /// Returns false if the player cannot afford `amount`.
    fn spend_gold(&mut self, amount: u64) -> bool;

    fn grant_experience(&mut self, amount: u64);

    fn grant_profession_experience(&mut self, profession: &str, amount: u64);

    fn is_feature_unlocked(&self, feature: &str) -> bool;

    /// Returns true if the feature was newly unlocked.
    fn unlock_feature(&mut self, feature: &str) -> bool;
}
