//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time arrives as dt, never read from a clock
//! - Seeded RNG only, injected through the session
//! - Snapshots in, snapshots out; nothing mutates in place
//! - No rendering or platform dependencies

pub mod comfort;
pub mod interference;
pub mod session;
pub mod state;
pub mod temperature;
pub mod timers;

pub use interference::{InterferenceEvent, InterferenceKind};
pub use session::{EventHook, GameSession};
pub use state::{ClearCause, GameState, GameStatus, RoundOutcome, SimEvent};
