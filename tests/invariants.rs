//! Property tests for the sim's core guarantees: clamping, reversal
//! symmetry, hold reset, edge-gated triggers, terminal freeze, and
//! config repair.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use sudsy::sim::{comfort, interference, temperature, timers};
use sudsy::sim::{InterferenceEvent, InterferenceKind};
use sudsy::{GameConfig, GameSession, GameState, GameStatus};

fn arb_kind() -> impl Strategy<Value = InterferenceKind> {
    prop_oneof![
        Just(InterferenceKind::ControlsReversed),
        Just(InterferenceKind::TemperatureShock),
        Just(InterferenceKind::BubbleObstruction),
        Just(InterferenceKind::Unknown),
    ]
}

fn arb_terminal_state() -> impl Strategy<Value = GameState> {
    (
        0.0f32..=1.0,
        0.0f32..=1.0,
        0.0f32..=1.0,
        0.0f32..=120.0,
        0.0f32..=10.0,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of((arb_kind(), 0.01f32..=10.0)),
        0.0f32..=20.0,
    )
        .prop_map(
            |(temp, target, comfort, timer, hold, plus, minus, won, event, itimer)| GameState {
                current_temperature: temp,
                target_temperature: target,
                tolerance_width: 0.12,
                current_comfort: comfort,
                game_timer: timer,
                success_hold_timer: hold,
                plus_held: plus,
                minus_held: minus,
                status: if won {
                    GameStatus::Success
                } else {
                    GameStatus::Failure
                },
                interference: event.map(|(kind, remaining)| InterferenceEvent {
                    kind,
                    duration: 10.0,
                    remaining,
                }),
                interference_timer: itimer,
                controls_reversed: matches!(
                    event,
                    Some((InterferenceKind::ControlsReversed, _))
                ),
            },
        )
}

proptest! {
    #[test]
    fn temperature_stays_in_unit_interval(
        current in 0.0f32..=1.0,
        plus in any::<bool>(),
        minus in any::<bool>(),
        reversed in any::<bool>(),
        dt in 0.0f32..=10.0,
    ) {
        let cfg = GameConfig::default();
        let next = temperature::update_temperature(current, plus, minus, reversed, &cfg, dt);
        prop_assert!((0.0..=1.0).contains(&next));
    }

    #[test]
    fn comfort_stays_in_unit_interval(
        current in 0.0f32..=1.0,
        in_range in any::<bool>(),
        dt in 0.0f32..=10.0,
    ) {
        let cfg = GameConfig::default();
        let next = comfort::update_comfort(current, in_range, &cfg, dt);
        prop_assert!((0.0..=1.0).contains(&next));
    }

    #[test]
    fn reversed_plus_equals_straight_minus(
        current in 0.0f32..=1.0,
        dt in 0.0f32..=10.0,
    ) {
        let cfg = GameConfig::default();
        let reversed_hot = temperature::update_temperature(current, true, false, true, &cfg, dt);
        let straight_cold = temperature::update_temperature(current, false, true, false, &cfg, dt);
        prop_assert_eq!(reversed_hot, straight_cold);

        let reversed_cold = temperature::update_temperature(current, false, true, true, &cfg, dt);
        let straight_hot = temperature::update_temperature(current, true, false, false, &cfg, dt);
        prop_assert_eq!(reversed_cold, straight_hot);
    }

    #[test]
    fn idle_water_strictly_cools_until_the_floor(
        current in 0.0f32..=1.0,
        dt in 0.001f32..=10.0,
    ) {
        let cfg = GameConfig::default();
        let next = temperature::update_temperature(current, false, false, false, &cfg, dt);
        if current == 0.0 {
            prop_assert_eq!(next, 0.0);
        } else {
            prop_assert!(next < current);
        }
    }

    #[test]
    fn hold_reset_is_exact(hold in 0.0f32..=100.0, dt in 0.0f32..=10.0) {
        prop_assert_eq!(timers::update_success_hold(hold, false, dt), 0.0);
    }

    #[test]
    fn countdown_never_goes_negative(timer in 0.0f32..=100.0, dt in 0.0f32..=200.0) {
        let next = timers::count_down(timer, dt);
        prop_assert!(next >= 0.0);
        prop_assert!(next <= timer);
    }

    #[test]
    fn no_trigger_while_an_event_is_active(timer in -10.0f32..=10.0) {
        prop_assert!(!interference::should_trigger(timer, true));
    }

    #[test]
    fn terminal_states_are_frozen(state in arb_terminal_state(), dt in 0.0f32..=10.0) {
        let mut session = GameSession::from_seed(GameConfig::default(), 7);
        let next = session.update(&state, dt);
        prop_assert_eq!(next, state.clone());

        let clicked = session.handle_center_click(&state);
        prop_assert_eq!(clicked, state);
    }

    #[test]
    fn random_play_keeps_every_gauge_in_range(
        seed in any::<u64>(),
        script in prop::collection::vec(
            (any::<bool>(), any::<bool>(), 0.0f32..=0.5),
            1..150,
        ),
    ) {
        let mut session = GameSession::from_seed(GameConfig::default(), seed);
        let mut state = session.new_round();

        for (plus, minus, dt) in script {
            state = session.set_controls(&state, plus, minus);
            state = session.update(&state, dt);

            prop_assert!((0.0..=1.0).contains(&state.current_temperature));
            prop_assert!((0.0..=1.0).contains(&state.current_comfort));
            prop_assert!((0.0..=1.0).contains(&state.target_temperature));
            prop_assert!(state.game_timer >= 0.0);
            prop_assert!(state.interference_timer >= 0.0);
            prop_assert!(state.success_hold_timer >= 0.0);

            // The reversed flag tracks an active reversal event exactly
            let reversal_active = matches!(
                state.interference,
                Some(event) if event.kind == InterferenceKind::ControlsReversed
            );
            prop_assert_eq!(state.controls_reversed, reversal_active);

            if state.status != GameStatus::Playing {
                break;
            }
        }
    }

    #[test]
    fn config_normalization_is_total(vals in any::<[f32; 15]>()) {
        let cfg = GameConfig {
            heat_rate: vals[0],
            cool_rate: vals[1],
            initial_temperature: vals[2],
            target_min: vals[3],
            target_max: vals[4],
            tolerance_width: vals[5],
            comfort_rate: vals[6],
            initial_comfort: vals[7],
            success_threshold: vals[8],
            round_duration: vals[9],
            success_hold_time: vals[10],
            interference_min_interval: vals[11],
            interference_max_interval: vals[12],
            interference_duration: vals[13],
            reversal_duration: vals[14],
        }
        .normalized();

        prop_assert!(cfg.heat_rate.is_finite() && cfg.heat_rate >= 0.0);
        prop_assert!(cfg.cool_rate.is_finite() && cfg.cool_rate >= 0.0);
        prop_assert!((0.0..=1.0).contains(&cfg.initial_temperature));
        prop_assert!((0.0..=1.0).contains(&cfg.initial_comfort));
        prop_assert!((0.0..=1.0).contains(&cfg.success_threshold));
        prop_assert!((0.0..=1.0).contains(&cfg.tolerance_width));
        prop_assert!(cfg.target_min <= cfg.target_max);
        prop_assert!(cfg.interference_min_interval <= cfg.interference_max_interval);
        prop_assert!(cfg.round_duration >= 0.0);
        prop_assert!(cfg.success_hold_time >= 0.0);

        // A round over the repaired config starts in range
        let mut session = GameSession::new(cfg, Pcg32::seed_from_u64(1));
        let state = session.new_round();
        prop_assert!((0.0..=1.0).contains(&state.target_temperature));
        prop_assert!((0.0..=1.0).contains(&state.current_temperature));
    }
}
