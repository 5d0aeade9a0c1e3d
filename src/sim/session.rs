//! The caller-owned game session
//!
//! `GameSession` owns the config, the injected RNG, and an optional event
//! hook; it holds no game state of its own. Each operation takes a
//! snapshot and returns a new one, so the host decides what to keep and
//! blows nothing away by accident. One `update` call per external tick
//! advances the whole sim in a fixed order.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::interference::{self, InterferenceEvent, InterferenceKind};
use super::state::{ClearCause, GameState, GameStatus, RoundOutcome, SimEvent};
use super::{comfort, temperature, timers};
use crate::config::GameConfig;
use crate::consts::MAX_TICK_DT;

/// Callback for notable sim transitions
pub type EventHook = Box<dyn FnMut(&SimEvent)>;

/// One player's game, composed of config + RNG + hook. Create one per
/// player session; there is no global instance
pub struct GameSession<R = Pcg32> {
    config: GameConfig,
    rng: R,
    hook: Option<EventHook>,
}

impl GameSession {
    /// Session with the default deterministic RNG. The same seed and the
    /// same inputs replay the same round, tick for tick
    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Session with a caller-supplied random source
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            config: config.normalized(),
            rng,
            hook: None,
        }
    }

    /// Current config
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Swap the config wholesale. Takes effect from the next operation;
    /// meant for round boundaries
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config.normalized();
    }

    /// Register a hook that sees every `SimEvent` as it happens
    pub fn on_event<F>(&mut self, hook: F)
    where
        F: FnMut(&SimEvent) + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    /// Start a fresh round from the current config
    pub fn new_round(&mut self) -> GameState {
        let state = GameState {
            current_temperature: self.config.initial_temperature,
            target_temperature: temperature::random_target(&self.config, &mut self.rng),
            tolerance_width: self.config.tolerance_width,
            current_comfort: self.config.initial_comfort,
            game_timer: self.config.round_duration,
            success_hold_timer: 0.0,
            plus_held: false,
            minus_held: false,
            status: GameStatus::Playing,
            interference: None,
            interference_timer: interference::random_interval(&self.config, &mut self.rng),
            controls_reversed: false,
        };
        log::info!(
            "Round start: target {:.2}, {:.0}s on the clock",
            state.target_temperature,
            state.game_timer
        );
        self.emit(SimEvent::RoundStarted {
            target: state.target_temperature,
        });
        state
    }

    /// Abandon whatever the round was doing and start over. The old
    /// snapshot is simply not used again
    pub fn reset_round(&mut self) -> GameState {
        self.new_round()
    }

    /// Advance the round by `dt` seconds.
    ///
    /// Stage order is fixed: timers, round expiry, interference expiry,
    /// interference trigger, temperature, comfort, success hold. A tick
    /// that ends the round never advances the sim past the boundary, and
    /// a reversal that expires this tick no longer steers this tick's taps
    pub fn update(&mut self, state: &GameState, dt: f32) -> GameState {
        // Terminal states and pause freeze the sim
        if state.status != GameStatus::Playing {
            return state.clone();
        }

        let dt = sanitize_dt(dt);
        let mut next = state.clone();

        // Timers
        next.game_timer = timers::count_down(next.game_timer, dt);
        next.interference_timer = timers::count_down(next.interference_timer, dt);

        // Round clock ran out: resolve on the spot, nothing else updates
        if timers::is_time_up(next.game_timer) {
            let outcome = if comfort::meets_success_threshold(next.current_comfort, &self.config) {
                RoundOutcome::Success
            } else {
                RoundOutcome::Failure
            };
            return self.resolve(next, outcome);
        }

        // Expire the active interference event
        if let Some(event) = next.interference {
            next.interference = event.tick(dt);
            if next.interference.is_none() {
                next.controls_reversed = false;
                next.interference_timer =
                    interference::random_interval(&self.config, &mut self.rng);
                log::debug!("Interference expired: {:?}", event.kind);
                self.emit(SimEvent::InterferenceCleared {
                    kind: event.kind,
                    cause: ClearCause::Expired,
                });
            }
        }

        // Maybe trigger a new one (never while one is active)
        if interference::should_trigger(next.interference_timer, next.interference.is_some()) {
            let kind = interference::random_kind(&mut self.rng);
            match kind {
                InterferenceKind::ControlsReversed => next.controls_reversed = true,
                InterferenceKind::TemperatureShock => {
                    next.target_temperature = interference::shock_target(&mut self.rng);
                }
                // Visual only
                InterferenceKind::BubbleObstruction | InterferenceKind::Unknown => {}
            }
            next.interference = Some(InterferenceEvent::new(kind, &self.config));
            next.interference_timer = interference::random_interval(&self.config, &mut self.rng);
            log::debug!("Interference triggered: {:?}", kind);
            self.emit(SimEvent::InterferenceTriggered { kind });
        }

        // Temperature, then comfort from the fresh temperature
        next.current_temperature = temperature::update_temperature(
            next.current_temperature,
            next.plus_held,
            next.minus_held,
            next.controls_reversed,
            &self.config,
            dt,
        );
        let in_range = temperature::in_tolerance(
            next.current_temperature,
            next.target_temperature,
            next.tolerance_width,
        );
        next.current_comfort = comfort::update_comfort(next.current_comfort, in_range, &self.config, dt);

        // Success hold: a long enough stretch at max comfort wins early
        next.success_hold_timer = timers::update_success_hold(
            next.success_hold_timer,
            comfort::is_max_comfort(next.current_comfort),
            dt,
        );
        if timers::is_hold_complete(next.success_hold_timer, &self.config) {
            return self.resolve(next, RoundOutcome::Success);
        }

        next
    }

    /// The center button: pops the active interference event if its kind
    /// allows it. Does nothing outside active play, with nothing to clear,
    /// or against a reversal. Tap latches are never touched
    pub fn handle_center_click(&mut self, state: &GameState) -> GameState {
        if state.status != GameStatus::Playing {
            return state.clone();
        }
        let Some(event) = state.interference else {
            return state.clone();
        };
        if !event.kind.clearable_by_click() {
            return state.clone();
        }

        let mut next = state.clone();
        next.interference = None;
        next.controls_reversed = false;
        next.interference_timer = interference::random_interval(&self.config, &mut self.rng);
        log::debug!("Interference clicked away: {:?}", event.kind);
        self.emit(SimEvent::InterferenceCleared {
            kind: event.kind,
            cause: ClearCause::Clicked,
        });
        next
    }

    /// Write the tap latches. The input layer calls this between ticks;
    /// while the sim is paused or resolved the latches sit inert
    pub fn set_controls(&self, state: &GameState, plus_held: bool, minus_held: bool) -> GameState {
        let mut next = state.clone();
        next.plus_held = plus_held;
        next.minus_held = minus_held;
        next
    }

    /// Pause or resume. Terminal states stay terminal
    pub fn set_paused(&self, state: &GameState, paused: bool) -> GameState {
        let mut next = state.clone();
        next.status = match (state.status, paused) {
            (GameStatus::Playing, true) => GameStatus::Paused,
            (GameStatus::Paused, false) => GameStatus::Playing,
            (status, _) => status,
        };
        next
    }

    fn resolve(&mut self, mut state: GameState, outcome: RoundOutcome) -> GameState {
        state.status = match outcome {
            RoundOutcome::Success => GameStatus::Success,
            RoundOutcome::Failure => GameStatus::Failure,
        };
        log::info!(
            "Round over: {:?} with comfort {:.2}",
            outcome,
            state.current_comfort
        );
        self.emit(SimEvent::RoundResolved {
            outcome,
            comfort: state.current_comfort,
        });
        state
    }

    fn emit(&mut self, event: SimEvent) {
        if let Some(hook) = self.hook.as_mut() {
            hook(&event);
        }
    }
}

/// Wall-clock deltas arrive dirty: clamp negatives and non-finites to
/// zero and cap runaway gaps instead of fast-forwarding through them
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_TICK_DT)
    } else {
        0.0
    }
}
