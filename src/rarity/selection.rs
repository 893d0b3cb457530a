//! Weighted tier selection.
//!
//! Every rarity roll in the game (combat loot, gathering loot, craft quality,
//! random item generation) goes through the same subtract-and-walk pick so the
//! call sites cannot drift apart.

use super::types::{all_tiers, TierId};
use rand::Rng;

/// Walk `entries` in order, subtracting each weight from `roll * total`,
/// and return the first entry that brings the remainder to zero or below.
///
/// `roll` is a fraction in `[0, 1)`. Earlier entries win ties and rounding
/// edges. If the total weight is not positive (or not finite) the first entry
/// is returned; if the walk runs off the end the last entry is returned.
pub fn pick_weighted<T: Copy>(entries: &[(T, f64)], roll: f64) -> Option<T> {
    let &(first, _) = entries.first()?;

    let total: f64 = entries.iter().map(|(_, w)| *w).sum();
    if !total.is_finite() || total <= 0.0 {
        return Some(first);
    }

    let mut remaining = roll * total;
    for &(value, weight) in entries {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(value);
        }
    }

    entries.last().map(|&(value, _)| value)
}

/// Select a tier from `(tier, weight)` pairs using the shared random source.
/// An empty list selects common.
pub fn select_tier(entries: &[(TierId, f64)], rng: &mut impl Rng) -> TierId {
    let roll = rng.gen::<f64>();
    pick_weighted(entries, roll).unwrap_or(TierId::Common)
}

/// Base drop weights for every tier, with `bonus` added to each non-common
/// tier. Weights are clamped at zero.
pub fn global_tier_weights(bonus: f64) -> Vec<(TierId, f64)> {
    all_tiers()
        .iter()
        .map(|tier| {
            let weight = if tier.id.is_common() {
                tier.drop_weight
            } else {
                tier.drop_weight + bonus
            };
            (tier.id, weight.max(0.0))
        })
        .collect()
}

/// Roll a tier over the whole registry.
pub fn roll_random_tier(bonus: f64, rng: &mut impl Rng) -> TierId {
    let weights = global_tier_weights(bonus);
    let tier = select_tier(&weights, rng);
    tracing::debug!(bonus, tier = %tier, "global tier roll");
    tier
}
