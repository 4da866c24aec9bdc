//! Player identification and seats.
//!
//! ## PlayerId
//!
//! Type-safe seat index. A match seats 1-4 players; `PlayerId(i)` is the
//! player at index `i` of `GameState::players`.
//!
//! ## Player
//!
//! A seated player: display name, color, and exactly four pieces.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::piece::{Piece, PieceId, PIECES_PER_PLAYER};

/// Most players a match can seat (one per color).
pub const MAX_PLAYERS: usize = 4;

/// Seat index. Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` seats.
    ///
    /// ```
    /// use rust_ludo::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// What the host supplies per seat when creating a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSpec {
    pub name: String,
    pub color: Color,
}

impl SeatSpec {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
    pub pieces: [Piece; PIECES_PER_PLAYER],

    /// Marks the seat that opened the match. Cosmetic; turn order is driven
    /// by `GameState::current_player_index`.
    pub is_active: bool,
}

impl Player {
    /// Seat a player with all pieces at home.
    #[must_use]
    pub fn new(id: PlayerId, seat: &SeatSpec, is_active: bool) -> Self {
        Self {
            id,
            name: seat.name.clone(),
            color: seat.color,
            pieces: std::array::from_fn(|slot| Piece::new(PieceId::new(id, slot as u8))),
            is_active,
        }
    }

    /// Get a piece by slot.
    #[must_use]
    pub fn piece(&self, slot: usize) -> Option<&Piece> {
        self.pieces.get(slot)
    }

    /// Pieces that reached the center.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.position.is_finished()).count()
    }

    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.finished_count() == PIECES_PER_PLAYER
    }

    #[must_use]
    pub fn all_home(&self) -> bool {
        self.pieces.iter().all(|p| p.position.is_home())
    }

    /// Pieces currently flagged as movable, in slot order.
    #[must_use]
    pub fn movable(&self) -> SmallVec<[PieceId; PIECES_PER_PLAYER]> {
        self.pieces.iter().filter(|p| p.can_move).map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Position;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_new_player_starts_home() {
        let seat = SeatSpec::new("Ada", Color::Green);
        let player = Player::new(PlayerId::new(1), &seat, false);

        assert_eq!(player.name, "Ada");
        assert_eq!(player.color, Color::Green);
        assert!(player.all_home());
        assert_eq!(player.finished_count(), 0);
        for (slot, piece) in player.pieces.iter().enumerate() {
            assert_eq!(piece.id, PieceId::new(PlayerId::new(1), slot as u8));
        }
    }

    #[test]
    fn test_finished_count() {
        let mut player = Player::new(PlayerId::new(0), &SeatSpec::new("Bo", Color::Red), true);
        player.pieces[0].position = Position::Finished;
        player.pieces[2].position = Position::Finished;
        player.pieces[3].position = Position::Track(4);

        assert_eq!(player.finished_count(), 2);
        assert!(!player.all_finished());
        assert!(!player.all_home());

        player.pieces[1].position = Position::Finished;
        player.pieces[3].position = Position::Finished;
        assert!(player.all_finished());
    }

    #[test]
    fn test_movable() {
        let mut player = Player::new(PlayerId::new(0), &SeatSpec::new("Cy", Color::Blue), true);
        player.pieces[1].can_move = true;
        player.pieces[3].can_move = true;

        let movable = player.movable();
        assert_eq!(
            movable.as_slice(),
            &[PieceId::new(PlayerId::new(0), 1), PieceId::new(PlayerId::new(0), 3)]
        );
        assert!(player.piece(4).is_none());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(2), &SeatSpec::new("Di", Color::Yellow), false);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
