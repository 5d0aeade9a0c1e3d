//! Water temperature: tap input, natural cooling, targets, tolerance
//!
//! Pure functions over unit-interval temperatures. Reversal is resolved
//! here so the rest of the sim never has to think about swapped taps.

use rand::Rng;

use crate::clamp01;
use crate::config::GameConfig;

/// Advance the water temperature by one tick.
///
/// A held hot tap heats, a held cold tap cools, both at `heat_rate`. With
/// neither held the bath cools naturally at `cool_rate`. If both taps are
/// held the hot one wins. `reversed` swaps what the taps mean before any
/// of that applies. Result is clamped to [0, 1].
pub fn update_temperature(
    current: f32,
    plus_held: bool,
    minus_held: bool,
    reversed: bool,
    cfg: &GameConfig,
    dt: f32,
) -> f32 {
    let (hot, cold) = if reversed {
        (minus_held, plus_held)
    } else {
        (plus_held, minus_held)
    };

    let delta = if hot {
        cfg.heat_rate * dt
    } else if cold {
        -cfg.heat_rate * dt
    } else {
        -cfg.cool_rate * dt
    };

    clamp01(current + delta)
}

/// Draw a fresh target temperature within the configured band
pub fn random_target<R: Rng>(cfg: &GameConfig, rng: &mut R) -> f32 {
    let lo = cfg.target_min.min(cfg.target_max);
    let hi = cfg.target_min.max(cfg.target_max);
    clamp01(rng.random_range(lo..=hi))
}

/// Whether the water sits within tolerance of the target (inclusive)
#[inline]
pub fn in_tolerance(current: f32, target: f32, tolerance: f32) -> bool {
    (current - target).abs() <= tolerance
}
