//! Bather comfort: rises in the sweet spot, falls outside it

use crate::clamp01;
use crate::config::GameConfig;

/// Advance comfort by one tick: gain while the temperature is in tolerance,
/// lose otherwise, both at `comfort_rate`. Clamped to [0, 1]
pub fn update_comfort(current: f32, in_range: bool, cfg: &GameConfig, dt: f32) -> f32 {
    let delta = if in_range {
        cfg.comfort_rate * dt
    } else {
        -cfg.comfort_rate * dt
    };
    clamp01(current + delta)
}

/// Comfort pinned at the ceiling; clamping saturates at exactly 1.0
#[inline]
pub fn is_max_comfort(level: f32) -> bool {
    level >= 1.0
}

/// Comfort good enough to win when the round clock runs out
#[inline]
pub fn meets_success_threshold(level: f32, cfg: &GameConfig) -> bool {
    level >= cfg.success_threshold
}
