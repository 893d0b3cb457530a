use crate::core::constants::{
    DEPTH_MODIFIER_PER_FLOOR, LUCK_MODIFIER_PER_POINT, MINING_MODIFIER_PER_LEVEL,
    MODIFIER_PROFESSION,
};
use crate::player::PlayerState;

/// Additive bonus to drop chances and non-common tier weights.
///
/// `luck * 0.1 + (depth - 1) * 0.05 + mining_level * 0.01`. Only goes
/// negative at depth 0.
pub fn drop_chance_modifier(player: &dyn PlayerState) -> f64 {
    let luck = player.luck().unwrap_or(0.0) * LUCK_MODIFIER_PER_POINT;
    let depth = (player.dungeon_depth() as f64 - 1.0) * DEPTH_MODIFIER_PER_FLOOR;
    let mining = player.profession_level(MODIFIER_PROFESSION) as f64 * MINING_MODIFIER_PER_LEVEL;
    luck + depth + mining
}
