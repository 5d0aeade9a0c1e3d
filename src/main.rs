//! Sudsy entry point
//!
//! Headless demo driver: seeds a session, lets a simple autopilot chase
//! the sweet spot, and prints the round's trace. The real game front-end
//! lives in the host; this binary only exercises the public API.
//!
//! Usage: sudsy [seed] [difficulty] [--realtime]

use std::time::{Duration, Instant};

use sudsy::consts::{MAX_SUBSTEPS, MAX_TICK_DT, TICK_DT};
use sudsy::sim::{RoundOutcome, SimEvent};
use sudsy::{Difficulty, GameConfig, GameSession, GameState, GameStatus};

fn main() {
    env_logger::init();

    let mut seed: u64 = 0x5eed;
    let mut difficulty = Difficulty::Standard;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else if let Ok(n) = arg.parse::<u64>() {
            seed = n;
        } else if let Some(d) = Difficulty::from_str(&arg) {
            difficulty = d;
        } else {
            eprintln!("usage: sudsy [seed] [difficulty] [--realtime]");
            std::process::exit(1);
        }
    }

    log::info!(
        "Sudsy starting: seed {seed}, difficulty {}",
        difficulty.as_str()
    );

    let mut session = GameSession::from_seed(GameConfig::for_difficulty(difficulty), seed);
    session.on_event(print_event);

    let mut state = session.new_round();
    let round_duration = session.config().round_duration;

    let mut last = Instant::now();
    let mut accumulator = 0.0_f32;
    let mut ticks: u64 = 0;

    while !state.status.is_terminal() {
        // Realtime paces against the wall clock; fast mode feeds the same
        // loop synthetic frames so a round finishes instantly
        let frame = if realtime {
            std::thread::sleep(Duration::from_secs_f32(TICK_DT));
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            dt
        } else {
            TICK_DT
        };

        accumulator += frame.min(MAX_TICK_DT);
        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            let (plus, minus) = autopilot(&state);
            state = session.set_controls(&state, plus, minus);
            if wants_click(&state) {
                state = session.handle_center_click(&state);
            }
            state = session.update(&state, TICK_DT);
            accumulator -= TICK_DT;
            substeps += 1;
            ticks += 1;
            if state.status.is_terminal() {
                break;
            }
        }
    }

    let verdict = match state.status {
        GameStatus::Success => "A perfect bath!",
        _ => "The bather storms off.",
    };
    println!(
        "{verdict} comfort {:.2} after {:.1}s ({ticks} ticks)",
        state.current_comfort,
        round_duration - state.game_timer
    );
}

/// Chase the target with a small deadband, like a player watching the
/// gauge. Takes the taps at face value, so an active reversal sends it
/// the wrong way until the event expires
fn autopilot(state: &GameState) -> (bool, bool) {
    let gap = state.target_temperature - state.current_temperature;
    let deadband = state.tolerance_width * 0.5;
    if gap > deadband {
        (true, false)
    } else if gap < -deadband {
        (false, true)
    } else {
        (false, false)
    }
}

/// Click away anything clickable as soon as it shows up
fn wants_click(state: &GameState) -> bool {
    state
        .interference
        .is_some_and(|event| event.kind.clearable_by_click())
}

fn print_event(event: &SimEvent) {
    match event {
        SimEvent::RoundStarted { target } => {
            println!("Bath drawn, sweet spot at {target:.2}");
        }
        SimEvent::InterferenceTriggered { kind } => {
            println!("!! {}", kind.label());
        }
        SimEvent::InterferenceCleared { kind, cause } => {
            println!("-- {:?} cleared ({cause:?})", kind);
        }
        SimEvent::RoundResolved { outcome, comfort } => {
            let word = match outcome {
                RoundOutcome::Success => "won",
                RoundOutcome::Failure => "lost",
            };
            println!("Round {word} at comfort {comfort:.2}");
        }
    }
}
