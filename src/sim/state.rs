//! Game state and core simulation types
//!
//! One round lives in one `GameState` value. Every operation on the
//! session returns a fresh snapshot instead of mutating in place, so the
//! host can keep, compare, or persist any tick's state.

use serde::{Deserialize, Serialize};

use super::interference::{InterferenceEvent, InterferenceKind};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Active gameplay
    Playing,
    /// Round won (terminal)
    Success,
    /// Round lost (terminal)
    Failure,
    /// Game is paused
    Paused,
}

impl GameStatus {
    /// True once the round has resolved; a terminal state never changes
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Success | GameStatus::Failure)
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Water temperature in [0, 1]
    pub current_temperature: f32,
    /// Where the bather wants the water, in [0, 1]
    pub target_temperature: f32,
    /// Half-width of the acceptable band around the target
    pub tolerance_width: f32,
    /// Bather comfort in [0, 1]
    pub current_comfort: f32,
    /// Seconds left in the round
    pub game_timer: f32,
    /// Seconds comfort has been pinned at maximum
    pub success_hold_timer: f32,
    /// Hot-tap latch, written by the input layer between ticks
    pub plus_held: bool,
    /// Cold-tap latch, written by the input layer between ticks
    pub minus_held: bool,
    /// Current phase
    pub status: GameStatus,
    /// The active interference event, if any
    pub interference: Option<InterferenceEvent>,
    /// Seconds until the next interference may trigger
    pub interference_timer: f32,
    /// True exactly while a `ControlsReversed` event is active
    pub controls_reversed: bool,
}

impl GameState {
    /// Serialize the snapshot for an external store
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore a snapshot written by `to_json`. Interference kinds from a
    /// newer build come back as `InterferenceKind::Unknown`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Why an interference event went away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearCause {
    /// Its timer ran out
    Expired,
    /// The player clicked it away
    Clicked,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Success,
    Failure,
}

/// Notable transitions, delivered through the session's optional hook
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A fresh round began
    RoundStarted { target: f32 },
    /// An interference event activated
    InterferenceTriggered { kind: InterferenceKind },
    /// The active interference event went away
    InterferenceCleared {
        kind: InterferenceKind,
        cause: ClearCause,
    },
    /// The round resolved, by early hold or timer expiry
    RoundResolved { outcome: RoundOutcome, comfort: f32 },
}
