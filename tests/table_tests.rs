//! Driving whole matches through `Table`.

use rust_ludo::core::{Color, DiceRoller, EngineConfig, GamePhase, ManualClock, PlayerId, SeatSpec};
use rust_ludo::rules::LudoEngine;
use rust_ludo::table::{RollOutcome, Table};

fn four_seats() -> Vec<SeatSpec> {
    Color::ALL.iter().map(|&c| SeatSpec::new(c.name(), c)).collect()
}

fn seeded_table(seed: u64) -> (Table<ManualClock, DiceRoller>, ManualClock) {
    let clock = ManualClock::new(0);
    let engine = LudoEngine::with_clock(EngineConfig::default(), clock.clone());
    (Table::with_parts(engine, DiceRoller::new(seed), &four_seats()).unwrap(), clock)
}

#[test]
fn test_play_out_finishes() {
    for seed in 0..10 {
        let (mut table, _) = seeded_table(seed);
        let winner = table.play_out(100_000);

        assert!(winner.is_some(), "seed {seed}");
        let state = table.state();
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.finished_count(winner.unwrap()), 4);
        assert!(state.validate().is_ok());
    }
}

#[test]
fn test_play_out_is_deterministic() {
    let (mut a, _) = seeded_table(99);
    let (mut b, _) = seeded_table(99);

    assert_eq!(a.play_out(100_000), b.play_out(100_000));
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_play_out_respects_step_limit() {
    let (mut table, _) = seeded_table(3);
    assert_eq!(table.play_out(0), None);
    assert_eq!(table.state().history.len(), 0);

    table.play_out(5);
    assert!(table.state().is_playing());
}

#[test]
fn test_timer_drives_the_match() {
    let (mut table, clock) = seeded_table(11);

    let mut ticks = 0;
    while !table.state().is_over() && ticks < 100_000 {
        let deadline = table.auto_play_deadline().unwrap();
        clock.set(deadline);
        assert!(table.tick());
        ticks += 1;
    }

    assert!(table.winner().is_some());
    assert_eq!(table.auto_play_deadline(), None);
    assert!(!table.tick());
}

#[test]
fn test_manual_turns_with_external_dice() {
    let (mut table, clock) = seeded_table(0);

    assert_eq!(table.report_roll(6), RollOutcome::Flagged { value: 6, movable: 4 });
    let piece = table.state().movable_pieces()[0];
    assert!(table.select(piece));
    assert!(table.state().can_roll_again);

    // The same six echoed straight after is dropped.
    assert_eq!(table.report_roll(6), RollOutcome::Duplicate);

    clock.advance(2_000);
    assert_eq!(table.report_roll(1), RollOutcome::Flagged { value: 1, movable: 1 });
    assert!(table.select(piece));
    assert_eq!(table.state().current_player_id(), PlayerId::new(1));
}

#[test]
fn test_wall_clock_table() {
    let config = EngineConfig::default().with_auto_play(false);
    let mut table = Table::new(&four_seats(), config, 5).unwrap();

    assert!(!table.auto_play_enabled());
    assert!(!table.tick());
    assert!(table.play_out(100_000).is_some());
}
