//! Primitive random rolls.
//!
//! Every roll draws exactly one `f64` from the generator so a constant source
//! produces predictable outcomes.

use crate::core::constants::PERCENT_SCALE;
use rand::Rng;

/// Percentage check: true if `uniform[0, 100) < percent`. Percentages at or
/// above 100 always succeed; at or below 0 never do.
pub fn chance(rng: &mut impl Rng, percent: f64) -> bool {
    rng.gen::<f64>() * PERCENT_SCALE < percent
}

/// Uniform integer in `[min, max]`. A reversed range is treated as `min`.
pub fn random_int(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    let roll = rng.gen::<f64>();
    if max <= min {
        return min;
    }
    let span = (max - min) as f64 + 1.0;
    min + ((roll * span) as u32).min(max - min)
}

/// Uniform index into a collection of `len` elements. `len` must be non-zero.
pub fn random_index(rng: &mut impl Rng, len: usize) -> usize {
    let roll = rng.gen::<f64>();
    ((roll * len as f64) as usize).min(len.saturating_sub(1))
}
