//! Pieces and their logical positions.
//!
//! ## Position Layout
//!
//! A piece is in exactly one of three zones:
//! - `Home`: not yet entered play (raw sentinel `-1`)
//! - `Track(i)`: index into the owner's path, `0..FINAL_INDEX`
//! - `Finished`: reached the center (raw sentinel `57`)
//!
//! Reaching `FINAL_INDEX` exactly turns into `Finished`, so a piece never
//! rests on `Track(FINAL_INDEX)`.
//!
//! ```
//! use rust_ludo::core::Position;
//!
//! assert_eq!(Position::from_raw(-1), Some(Position::Home));
//! assert_eq!(Position::from_raw(12), Some(Position::Track(12)));
//! assert_eq!(Position::from_raw(57), Some(Position::Finished));
//! assert_eq!(Position::from_raw(56), None);
//! ```

use serde::{Deserialize, Serialize};

use super::board::FINAL_INDEX;
use super::player::PlayerId;

/// Pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 4;

/// Raw encoding of `Position::Home`.
pub const HOME_SENTINEL: i8 = -1;

/// Raw encoding of `Position::Finished`.
pub const FINISHED_SENTINEL: i8 = 57;

/// Identifies a piece by owner and slot (0..4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId {
    pub owner: PlayerId,
    pub slot: u8,
}

impl PieceId {
    #[must_use]
    pub const fn new(owner: PlayerId, slot: u8) -> Self {
        Self { owner, slot }
    }

    /// Slot as an array index.
    #[must_use]
    pub const fn slot_index(self) -> usize {
        self.slot as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} piece {}", self.owner, self.slot)
    }
}

/// Logical position of a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Home,
    Track(u8),
    Finished,
}

impl Position {
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Position::Finished)
    }

    /// Path index if the piece is on the track or home run.
    #[must_use]
    pub const fn track_index(self) -> Option<u8> {
        match self {
            Position::Track(i) => Some(i),
            _ => None,
        }
    }

    /// Whether this is a position a piece may legally occupy.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Position::Track(i) => i < FINAL_INDEX,
            _ => true,
        }
    }

    /// Sentinel encoding: `-1` home, path index, `57` finished.
    #[must_use]
    pub const fn to_raw(self) -> i8 {
        match self {
            Position::Home => HOME_SENTINEL,
            Position::Track(i) => i as i8,
            Position::Finished => FINISHED_SENTINEL,
        }
    }

    /// Decode a sentinel-encoded position. Returns `None` for anything a
    /// piece cannot occupy.
    #[must_use]
    pub fn from_raw(raw: i8) -> Option<Self> {
        let position = match raw {
            HOME_SENTINEL => Position::Home,
            FINISHED_SENTINEL => Position::Finished,
            i if i >= 0 => Position::Track(i as u8),
            _ => return None,
        };
        position.is_valid().then_some(position)
    }
}

/// A single piece with its transient per-roll flags.
///
/// `can_move` is derived from the live dice value and `is_selected` is a UI
/// highlight; both are cleared whenever a move is applied or a turn passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub position: Position,
    pub is_selected: bool,
    pub can_move: bool,
}

impl Piece {
    /// A fresh piece waiting at home.
    #[must_use]
    pub const fn new(id: PieceId) -> Self {
        Self {
            id,
            position: Position::Home,
            is_selected: false,
            can_move: false,
        }
    }

    pub fn clear_flags(&mut self) {
        self.is_selected = false;
        self.can_move = false;
    }

    /// Return a captured piece to its home slot.
    pub fn send_home(&mut self) {
        self.position = Position::Home;
        self.clear_flags();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip_bounds() {
        assert_eq!(Position::Home.to_raw(), -1);
        assert_eq!(Position::Finished.to_raw(), 57);
        assert_eq!(Position::from_raw(0), Some(Position::Track(0)));
        assert_eq!(Position::from_raw(55), Some(Position::Track(55)));
        assert_eq!(Position::from_raw(56), None);
        assert_eq!(Position::from_raw(-2), None);
        assert_eq!(Position::from_raw(58), None);
    }

    #[test]
    fn test_validity() {
        assert!(Position::Home.is_valid());
        assert!(Position::Finished.is_valid());
        assert!(Position::Track(55).is_valid());
        assert!(!Position::Track(FINAL_INDEX).is_valid());
    }

    #[test]
    fn test_piece_send_home_clears_flags() {
        let mut piece = Piece::new(PieceId::new(PlayerId::new(1), 2));
        piece.position = Position::Track(17);
        piece.can_move = true;
        piece.is_selected = true;

        piece.send_home();

        assert_eq!(piece.position, Position::Home);
        assert!(!piece.can_move);
        assert!(!piece.is_selected);
    }

    #[test]
    fn test_piece_id_display() {
        let id = PieceId::new(PlayerId::new(2), 3);
        assert_eq!(format!("{}", id), "Player 2 piece 3");
    }

    #[test]
    fn test_serialization() {
        let piece = Piece::new(PieceId::new(PlayerId::new(0), 1));
        let json = serde_json::to_string(&piece).unwrap();
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, back);
    }
}
