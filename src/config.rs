//! Game tuning and difficulty presets
//!
//! Plain serializable data, swapped wholesale between rounds. Loading never
//! fails outright: missing fields take defaults and out-of-range values are
//! repaired, matching the sim's clamp-don't-panic policy.

use serde::{Deserialize, Serialize};

use crate::clamp01;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Relaxed,
    #[default]
    Standard,
    Frantic,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Relaxed => "Relaxed",
            Difficulty::Standard => "Standard",
            Difficulty::Frantic => "Frantic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "easy" => Some(Difficulty::Relaxed),
            "standard" | "normal" => Some(Difficulty::Standard),
            "frantic" | "hard" => Some(Difficulty::Frantic),
            _ => None,
        }
    }
}

/// Every knob a round runs on. Rates are per second, times in seconds,
/// temperatures and comfort levels in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Temperature ===
    /// Temperature change per second while a tap is held
    pub heat_rate: f32,
    /// Natural cooling per second with neither tap held
    pub cool_rate: f32,
    /// Starting water temperature
    pub initial_temperature: f32,
    /// Lower bound for random target draws
    pub target_min: f32,
    /// Upper bound for random target draws
    pub target_max: f32,
    /// Half-width of the acceptable band around the target
    pub tolerance_width: f32,

    // === Comfort ===
    /// Comfort gained (in band) or lost (out of band) per second
    pub comfort_rate: f32,
    /// Starting comfort
    pub initial_comfort: f32,
    /// Comfort needed to win when the round timer expires
    pub success_threshold: f32,

    // === Round timing ===
    /// Round length in seconds
    pub round_duration: f32,
    /// Seconds of maximum comfort that end the round early in success
    pub success_hold_time: f32,

    // === Interference ===
    /// Shortest gap between interference triggers
    pub interference_min_interval: f32,
    /// Longest gap between interference triggers
    pub interference_max_interval: f32,
    /// How long an interference event lasts
    pub interference_duration: f32,
    /// How long a controls reversal lasts. A reversal only ends by timer,
    /// never by click
    pub reversal_duration: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Temperature
            heat_rate: 0.40,
            cool_rate: 0.10,
            initial_temperature: 0.5,
            target_min: 0.15,
            target_max: 0.85,
            tolerance_width: 0.12,

            // Comfort
            comfort_rate: 0.20,
            initial_comfort: 0.5,
            success_threshold: 0.8,

            // Round timing
            round_duration: 60.0,
            success_hold_time: 5.0,

            // Interference
            interference_min_interval: 6.0,
            interference_max_interval: 12.0,
            interference_duration: 5.0,
            reversal_duration: 3.0,
        }
    }
}

impl GameConfig {
    /// Create a config from a difficulty preset
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let base = Self::default();
        match difficulty {
            Difficulty::Relaxed => Self {
                cool_rate: 0.06,
                tolerance_width: 0.18,
                success_threshold: 0.7,
                interference_min_interval: 10.0,
                interference_max_interval: 18.0,
                ..base
            },
            Difficulty::Standard => base,
            Difficulty::Frantic => Self {
                cool_rate: 0.16,
                tolerance_width: 0.07,
                interference_min_interval: 4.0,
                interference_max_interval: 8.0,
                reversal_duration: 4.0,
                ..base
            },
        }
    }

    /// Load a config from JSON. Missing fields take their defaults and the
    /// result is normalized
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Repair anything out of range: non-finite values fall back to their
    /// defaults, unit-interval fields are clamped, rates and durations are
    /// floored at zero, inverted bound pairs are swapped
    pub fn normalized(self) -> Self {
        let d = Self::default();
        let mut cfg = Self {
            heat_rate: sane(self.heat_rate, d.heat_rate).max(0.0),
            cool_rate: sane(self.cool_rate, d.cool_rate).max(0.0),
            initial_temperature: clamp01(sane(self.initial_temperature, d.initial_temperature)),
            target_min: clamp01(sane(self.target_min, d.target_min)),
            target_max: clamp01(sane(self.target_max, d.target_max)),
            tolerance_width: clamp01(sane(self.tolerance_width, d.tolerance_width)),
            comfort_rate: sane(self.comfort_rate, d.comfort_rate).max(0.0),
            initial_comfort: clamp01(sane(self.initial_comfort, d.initial_comfort)),
            success_threshold: clamp01(sane(self.success_threshold, d.success_threshold)),
            round_duration: sane(self.round_duration, d.round_duration).max(0.0),
            success_hold_time: sane(self.success_hold_time, d.success_hold_time).max(0.0),
            interference_min_interval: sane(self.interference_min_interval, d.interference_min_interval)
                .max(0.0),
            interference_max_interval: sane(self.interference_max_interval, d.interference_max_interval)
                .max(0.0),
            interference_duration: sane(self.interference_duration, d.interference_duration).max(0.0),
            reversal_duration: sane(self.reversal_duration, d.reversal_duration).max(0.0),
        };
        if cfg.target_min > cfg.target_max {
            std::mem::swap(&mut cfg.target_min, &mut cfg.target_max);
        }
        if cfg.interference_min_interval > cfg.interference_max_interval {
            std::mem::swap(
                &mut cfg.interference_min_interval,
                &mut cfg.interference_max_interval,
            );
        }
        cfg
    }
}

/// Fallback for non-finite tunables
fn sane(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
