//! Tier upgrade attempts on existing items.

use super::types::{get_tier, next_tier, previous_tier, TierId};
use crate::core::constants::UPGRADE_DOWNGRADE_CHANCE;
use crate::core::rolls;
use crate::items::{enhance, EnhancedItem, ItemCatalog};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Upgraded(TierId),
    Downgraded(TierId),
    Unchanged,
    /// Already at the highest tier; nothing was rolled.
    AtMaximum,
}

impl UpgradeOutcome {
    /// Tier the item ends up at.
    pub fn resulting_tier(&self, current: TierId) -> TierId {
        match self {
            UpgradeOutcome::Upgraded(tier) | UpgradeOutcome::Downgraded(tier) => *tier,
            UpgradeOutcome::Unchanged | UpgradeOutcome::AtMaximum => current,
        }
    }
}

/// Roll an upgrade from `current`.
///
/// Success moves one tier up. Failure has a 30% chance to drop one tier
/// (never below common).
pub fn upgrade_tier(current: TierId, success_chance: f64, rng: &mut impl Rng) -> UpgradeOutcome {
    let Some(next) = next_tier(current) else {
        return UpgradeOutcome::AtMaximum;
    };

    if rolls::chance(rng, success_chance) {
        return UpgradeOutcome::Upgraded(next);
    }

    let downgrade = rolls::chance(rng, UPGRADE_DOWNGRADE_CHANCE);
    match previous_tier(current) {
        Some(previous) if downgrade => UpgradeOutcome::Downgraded(previous),
        _ => UpgradeOutcome::Unchanged,
    }
}

#[derive(Debug, Clone)]
pub struct UpgradeResult {
    pub outcome: UpgradeOutcome,
    pub item: EnhancedItem,
    pub message: String,
}

/// Attempt to upgrade an item instance.
///
/// The new instance is re-enhanced from the catalog's base definition so
/// multipliers never compound. Returns `None` if the base item is unknown.
pub fn upgrade_item(
    catalog: &dyn ItemCatalog,
    item: &EnhancedItem,
    success_chance: f64,
    rng: &mut impl Rng,
) -> Option<UpgradeResult> {
    let def = catalog.item(&item.item_id)?;
    let outcome = upgrade_tier(item.tier, success_chance, rng);
    let base_name = &def.name;

    let (item, message) = match outcome {
        UpgradeOutcome::Upgraded(tier) => (
            enhance(def, tier),
            format!(
                "Successfully enhanced {} to {} quality!",
                base_name,
                get_tier(tier).name
            ),
        ),
        UpgradeOutcome::Downgraded(tier) => (
            enhance(def, tier),
            format!(
                "Enhancement failed! {} degraded to {} quality.",
                base_name,
                get_tier(tier).name
            ),
        ),
        UpgradeOutcome::Unchanged => (
            item.clone(),
            format!("Enhancement failed! {} was not affected.", base_name),
        ),
        UpgradeOutcome::AtMaximum => (
            item.clone(),
            "Item is already at maximum rarity!".to_string(),
        ),
    };

    tracing::debug!(item = %def.id, ?outcome, "tier upgrade");
    Some(UpgradeResult {
        outcome,
        item,
        message,
    })
}
