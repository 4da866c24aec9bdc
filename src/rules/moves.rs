//! Move arithmetic.
//!
//! Pure functions over positions and rolls. No state transitions happen
//! here; `engine` composes these into them.

use smallvec::SmallVec;

use crate::core::board::{self, ENTRY_INDEX, FINAL_INDEX};
use crate::core::dice::{MAX_ROLL, MIN_ROLL};
use crate::core::{Color, GameState, Piece, PieceId, PlayerId, Position};

/// Roll value that releases a piece from home and earns an extra turn.
pub const RELEASE_ROLL: u8 = MAX_ROLL;

#[must_use]
pub fn is_valid_roll(value: u8) -> bool {
    (MIN_ROLL..=MAX_ROLL).contains(&value)
}

/// Where a piece at `position` lands with `roll`, or `None` if it cannot
/// move.
///
/// - Home leaves only on a six, onto the entry cell.
/// - Finished pieces never move.
/// - Reaching `FINAL_INDEX` exactly finishes; overshooting is illegal.
///
/// ```
/// use rust_ludo::core::Position;
/// use rust_ludo::rules::moves::destination;
///
/// assert_eq!(destination(Position::Home, 6), Some(Position::Track(0)));
/// assert_eq!(destination(Position::Home, 5), None);
/// assert_eq!(destination(Position::Track(54), 2), Some(Position::Finished));
/// assert_eq!(destination(Position::Track(54), 3), None);
/// ```
#[must_use]
pub fn destination(position: Position, roll: u8) -> Option<Position> {
    if !is_valid_roll(roll) {
        return None;
    }

    match position {
        Position::Home => (roll == RELEASE_ROLL).then_some(Position::Track(ENTRY_INDEX)),
        Position::Finished => None,
        Position::Track(index) => {
            let target = index.checked_add(roll)?;
            match target.cmp(&FINAL_INDEX) {
                std::cmp::Ordering::Less => Some(Position::Track(target)),
                std::cmp::Ordering::Equal => Some(Position::Finished),
                std::cmp::Ordering::Greater => None,
            }
        }
    }
}

#[must_use]
pub fn can_move(piece: &Piece, roll: u8) -> bool {
    destination(piece.position, roll).is_some()
}

/// Opposing pieces sent home when `mover` (playing `color`) lands on
/// `landing`.
///
/// Only shared, non-safe ring cells capture. Home-run cells, the center and
/// safe cells never do, and a player's own pieces are never captured.
#[must_use]
pub fn capture_victims(
    state: &GameState,
    mover: PlayerId,
    color: Color,
    landing: Position,
) -> SmallVec<[PieceId; 4]> {
    let Some(cell) = landing
        .track_index()
        .and_then(|i| board::ring_cell(color, i))
        .filter(|&cell| !board::is_safe_ring_cell(cell))
    else {
        return SmallVec::new();
    };

    state
        .players
        .iter()
        .filter(|player| player.id != mover)
        .flat_map(|player| {
            player.pieces.iter().filter(move |piece| {
                piece
                    .position
                    .track_index()
                    .and_then(|i| board::ring_cell(player.color, i))
                    == Some(cell)
            })
        })
        .map(|piece| piece.id)
        .collect()
}
