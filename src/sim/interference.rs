//! Interference events: timed trouble in the bathroom
//!
//! At most one event is active at a time, encoded as an
//! `Option<InterferenceEvent>` on the game state so "active with no kind"
//! and "inactive with a kind" cannot be represented. Triggers are
//! edge-gated: the interval timer must run out while nothing is active.
//! Expiry by timer is the only way out for a reversal; everything else can
//! also be clicked away.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{SHOCK_TARGET_HIGH, SHOCK_TARGET_LOW};
use crate::sim::timers;

/// What an interference event does while it is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterferenceKind {
    /// The taps swap meaning. Cannot be clicked away
    ControlsReversed,
    /// The sweet spot jumps to an extreme temperature
    TemperatureShock,
    /// Suds cover the gauge. Purely visual, click to pop
    BubbleObstruction,
    /// Fallback for kinds this build does not know (snapshots written by a
    /// newer version). No side effects, clearable, generic label
    #[serde(other)]
    Unknown,
}

impl InterferenceKind {
    /// Whether a center-button click dismisses the event
    pub fn clearable_by_click(&self) -> bool {
        *self != InterferenceKind::ControlsReversed
    }

    /// Short on-screen description
    pub fn label(&self) -> &'static str {
        match self {
            InterferenceKind::ControlsReversed => "Taps swapped!",
            InterferenceKind::TemperatureShock => "The sweet spot moved!",
            InterferenceKind::BubbleObstruction => "Bubbles everywhere!",
            InterferenceKind::Unknown => "Something stirs the water...",
        }
    }
}

/// One active interference event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterferenceEvent {
    pub kind: InterferenceKind,
    /// Full duration this event started with
    pub duration: f32,
    /// Seconds left before it expires on its own
    pub remaining: f32,
}

impl InterferenceEvent {
    /// New event with its kind-appropriate full duration remaining
    pub fn new(kind: InterferenceKind, cfg: &GameConfig) -> Self {
        let duration = match kind {
            InterferenceKind::ControlsReversed => cfg.reversal_duration,
            _ => cfg.interference_duration,
        }
        .max(0.0);
        Self {
            kind,
            duration,
            remaining: duration,
        }
    }

    /// Run the event down by dt. `None` once its time is spent
    pub fn tick(self, dt: f32) -> Option<Self> {
        let remaining = timers::count_down(self.remaining, dt);
        if remaining <= 0.0 {
            None
        } else {
            Some(Self { remaining, ..self })
        }
    }
}

/// Whether a new event should fire: interval timer spent and nothing active
#[inline]
pub fn should_trigger(interference_timer: f32, active: bool) -> bool {
    interference_timer <= 0.0 && !active
}

/// Draw the gap until the next interference may trigger
pub fn random_interval<R: Rng>(cfg: &GameConfig, rng: &mut R) -> f32 {
    let lo = cfg
        .interference_min_interval
        .min(cfg.interference_max_interval);
    let hi = cfg
        .interference_min_interval
        .max(cfg.interference_max_interval);
    rng.random_range(lo..=hi)
}

/// Draw one of the real event kinds, uniformly. Never produces `Unknown`
pub fn random_kind<R: Rng>(rng: &mut R) -> InterferenceKind {
    match rng.random_range(0..3) {
        0 => InterferenceKind::ControlsReversed,
        1 => InterferenceKind::TemperatureShock,
        _ => InterferenceKind::BubbleObstruction,
    }
}

/// Where a temperature shock throws the target: one of the two extremes
pub fn shock_target<R: Rng>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) {
        SHOCK_TARGET_HIGH
    } else {
        SHOCK_TARGET_LOW
    }
}
