//! Randomized whole-match invariants.

use proptest::prelude::*;

use rust_ludo::core::{Color, DiceRoller, EngineConfig, ManualClock, Position, SeatSpec};
use rust_ludo::rules::LudoEngine;

fn seats(count: usize, rotate: usize) -> Vec<SeatSpec> {
    (0..count)
        .map(|i| {
            let color = Color::ALL[(i + rotate) % 4];
            SeatSpec::new(color.name(), color)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_matches_stay_valid(seed in any::<u64>(), count in 1usize..=4, rotate in 0usize..4) {
        let engine = LudoEngine::with_clock(EngineConfig::default(), ManualClock::new(0));
        let mut dice = DiceRoller::new(seed);
        let mut state = engine.create_match(&seats(count, rotate)).unwrap();

        for _ in 0..100_000 {
            if state.is_over() {
                break;
            }
            let next = engine.on_auto_play_timeout(&state, &mut dice);
            prop_assert!(next.validate().is_ok(), "{:?}", next.validate());
            prop_assert_ne!(&next, &state);

            // Finished pieces never leave the center.
            for (before, after) in state.players.iter().zip(next.players.iter()) {
                for (p, q) in before.pieces.iter().zip(after.pieces.iter()) {
                    if p.position == Position::Finished {
                        prop_assert_eq!(q.position, Position::Finished);
                    }
                }
            }
            state = next;
        }

        let winner = state.winner;
        prop_assert!(winner.is_some());
        prop_assert_eq!(state.finished_count(winner.unwrap()), 4);
    }

    #[test]
    fn prop_noop_requests_leave_state_unchanged(seed in any::<u64>(), value in 7u8..=255) {
        let engine = LudoEngine::with_clock(EngineConfig::default(), ManualClock::new(0));
        let mut dice = DiceRoller::new(seed);
        let mut state = engine.create_match(&seats(4, 0)).unwrap();
        for _ in 0..(seed % 40) {
            state = engine.on_auto_play_timeout(&state, &mut dice);
        }

        prop_assert_eq!(engine.on_dice_rolled(&state, value), state.clone());
        prop_assert_eq!(engine.on_dice_rolled(&state, 0), state.clone());
    }
}
