//! Full-turn scenarios on the real board.

use rust_ludo::core::board::{self, ring_cell};
use rust_ludo::core::{
    Color, EngineConfig, GameState, ManualClock, PieceId, PlayerId, Position, SeatSpec,
};
use rust_ludo::rules::LudoEngine;

fn engine() -> LudoEngine<ManualClock> {
    LudoEngine::with_clock(EngineConfig::default(), ManualClock::new(0))
}

fn piece(player: u8, slot: u8) -> PieceId {
    PieceId::new(PlayerId::new(player), slot)
}

fn set(state: &mut GameState, id: PieceId, position: Position) {
    if let Some(p) = state.players.get_mut(id.owner.index()) {
        p.pieces[id.slot_index()].position = position;
    }
}

fn yellow_blue() -> GameState {
    engine()
        .create_match(&[SeatSpec::new("Yellow", Color::Yellow), SeatSpec::new("Blue", Color::Blue)])
        .unwrap()
}

#[test]
fn test_release_then_advance() {
    let engine = engine();
    let state = yellow_blue();

    let rolled = engine.on_dice_rolled(&state, 6);
    let released = engine.on_piece_selected(&rolled, piece(0, 0));
    assert_eq!(released.piece(piece(0, 0)).unwrap().position, Position::Track(0));
    assert_eq!(released.current_player_index, 0);
    assert!(released.can_roll_again);

    let rolled = engine.on_dice_rolled(&released, 3);
    assert_eq!(rolled.movable_pieces().as_slice(), &[piece(0, 0)]);
    let moved = engine.on_piece_selected(&rolled, piece(0, 0));
    assert_eq!(moved.piece(piece(0, 0)).unwrap().position, Position::Track(3));
    assert_eq!(moved.current_player_index, 1);
    assert!(!moved.can_roll_again);
}

#[test]
fn test_blue_captures_yellow_on_shared_cell() {
    let engine = engine();
    let mut state = yellow_blue();
    set(&mut state, piece(0, 0), Position::Track(3));
    set(&mut state, piece(1, 0), Position::Track(26));
    state.current_player_index = 1;

    // Blue 29 and yellow 3 are the same square.
    assert_eq!(ring_cell(Color::Blue, 29), ring_cell(Color::Yellow, 3));
    assert_eq!(board::path(Color::Blue)[29], board::path(Color::Yellow)[3]);

    let rolled = engine.on_dice_rolled(&state, 3);
    let moved = engine.on_piece_selected(&rolled, piece(1, 0));

    assert_eq!(moved.piece(piece(1, 0)).unwrap().position, Position::Track(29));
    assert_eq!(moved.piece(piece(0, 0)).unwrap().position, Position::Home);
    assert_eq!(moved.history.last().unwrap().captured(), &[piece(0, 0)]);
    assert_eq!(moved.current_player_index, 0);
}

#[test]
fn test_safe_cell_protects() {
    let engine = engine();
    let mut state = yellow_blue();
    // Ring cell 8 is a star: yellow 8, blue 34.
    set(&mut state, piece(0, 0), Position::Track(8));
    set(&mut state, piece(1, 0), Position::Track(30));
    state.current_player_index = 1;

    let rolled = engine.on_dice_rolled(&state, 4);
    let moved = engine.on_piece_selected(&rolled, piece(1, 0));

    assert_eq!(moved.piece(piece(1, 0)).unwrap().position, Position::Track(34));
    assert_eq!(moved.piece(piece(0, 0)).unwrap().position, Position::Track(8));
}

#[test]
fn test_overshoot_then_exact_finish() {
    let engine = engine();
    let mut state = yellow_blue();
    set(&mut state, piece(0, 0), Position::Track(54));

    // 54 + 3 overshoots the center: nothing can move.
    let skipped = engine.on_dice_rolled(&state, 3);
    assert_eq!(skipped.piece(piece(0, 0)).unwrap().position, Position::Track(54));
    assert_eq!(skipped.current_player_index, 1);

    // 54 + 2 lands exactly and earns another roll.
    let rolled = engine.on_dice_rolled(&state, 2);
    let finished = engine.on_piece_selected(&rolled, piece(0, 0));
    assert_eq!(finished.piece(piece(0, 0)).unwrap().position, Position::Finished);
    assert_eq!(finished.finished_count(PlayerId::new(0)), 1);
    assert_eq!(finished.current_player_index, 0);
    assert!(finished.can_roll_again);
}

#[test]
fn test_home_run_is_private() {
    let engine = engine();
    let mut state = yellow_blue();
    set(&mut state, piece(0, 0), Position::Track(53));
    set(&mut state, piece(1, 0), Position::Track(51));
    state.current_player_index = 1;

    let rolled = engine.on_dice_rolled(&state, 2);
    let moved = engine.on_piece_selected(&rolled, piece(1, 0));

    assert_eq!(moved.piece(piece(1, 0)).unwrap().position, Position::Track(53));
    assert_eq!(moved.piece(piece(0, 0)).unwrap().position, Position::Track(53));
    assert_ne!(board::path(Color::Blue)[53], board::path(Color::Yellow)[53]);
}
