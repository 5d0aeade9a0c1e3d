//! Sudsy - a bathtub temperature balancing arcade game
//!
//! Core modules:
//! - `config`: Tunables and difficulty presets
//! - `sim`: Deterministic simulation (temperature, comfort, interference)
//!
//! The crate is the authoritative game core. Rendering, input wiring, and
//! persistence belong to the host: it feeds elapsed seconds and button
//! state in, and gets an immutable state snapshot back every tick.

pub mod config;
pub mod sim;

pub use config::{Difficulty, GameConfig};
pub use sim::{GameSession, GameState, GameStatus};

/// Game configuration constants
pub mod consts {
    /// Nominal fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta accepted by one update; anything bigger
    /// (stalled tab, debugger pause) is clamped instead of fast-forwarded
    pub const MAX_TICK_DT: f32 = 1.0;

    /// Extreme targets a temperature shock snaps to
    pub const SHOCK_TARGET_LOW: f32 = 0.1;
    pub const SHOCK_TARGET_HIGH: f32 = 0.9;
}

/// Clamp to the unit interval every gauge in the sim lives on
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
