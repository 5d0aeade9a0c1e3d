//! Simulated countdowns and the success hold accumulator
//!
//! Timers are plain f32 seconds advanced by the tick's dt, never wall
//! clocks. Countdown floors at zero so expiry checks stay simple.

use crate::config::GameConfig;

/// Run a countdown timer toward zero
#[inline]
pub fn count_down(timer: f32, dt: f32) -> f32 {
    (timer - dt).max(0.0)
}

/// A countdown has run out
#[inline]
pub fn is_time_up(timer: f32) -> bool {
    timer <= 0.0
}

/// Accumulate the success hold while comfort is pinned at maximum.
/// The instant it is not, the hold resets to zero - no grace period
pub fn update_success_hold(hold: f32, at_max_comfort: bool, dt: f32) -> f32 {
    if at_max_comfort { hold + dt } else { 0.0 }
}

/// The success hold has lasted long enough to end the round early
#[inline]
pub fn is_hold_complete(hold: f32, cfg: &GameConfig) -> bool {
    hold >= cfg.success_hold_time
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_down_floors_at_zero() {
        assert!((count_down(1.0, 0.25) - 0.75).abs() < 1e-6);
        assert_eq!(count_down(0.2, 0.5), 0.0);
        assert_eq!(count_down(0.0, 0.5), 0.0);
    }

    #[test]
    fn test_time_up() {
        assert!(is_time_up(0.0));
        assert!(!is_time_up(0.001));
    }

    #[test]
    fn test_hold_accumulates_at_max() {
        let hold = update_success_hold(1.5, true, 0.25);
        assert!((hold - 1.75).abs() < 1e-6);
    }

    #[test]
    fn test_hold_resets_hard_when_not_at_max() {
        assert_eq!(update_success_hold(4.9, false, 0.01), 0.0);
    }

    #[test]
    fn test_hold_complete() {
        let cfg = GameConfig::default();
        assert!(is_hold_complete(cfg.success_hold_time, &cfg));
        assert!(!is_hold_complete(cfg.success_hold_time - 0.01, &cfg));
    }
}
