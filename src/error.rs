//! Error types.
//!
//! Only match setup can fail. Illegal moves, stale dice and duplicate roll
//! reports are not errors: the engine hands back the state unchanged.

use thiserror::Error;

use crate::core::{Color, PieceId, PlayerId, Position};

/// Why a match could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a match needs at least one player")]
    NoPlayers,

    #[error("a match seats at most 4 players, got {count}")]
    TooManyPlayers { count: usize },

    #[error("color {0} is taken by more than one seat")]
    DuplicateColor(Color),

    #[error("seat {seat} has an empty name")]
    EmptyName { seat: usize },
}

/// A structural invariant a `GameState` violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("invalid player count {0}")]
    PlayerCount(usize),

    #[error("current player index {index} out of range for {count} players")]
    CurrentPlayerOutOfRange { index: usize, count: usize },

    #[error("seat {seat} holds {id}")]
    SeatMismatch { seat: usize, id: PlayerId },

    #[error("{color} used by both {first} and {second}")]
    DuplicateColor {
        color: Color,
        first: PlayerId,
        second: PlayerId,
    },

    #[error("seat {seat} slot {slot} holds {piece}")]
    PieceMismatch { piece: PieceId, seat: usize, slot: usize },

    #[error("{piece} sits on invalid position {position:?}")]
    InvalidPosition { piece: PieceId, position: Position },

    #[error("{0} flagged movable without a live roll")]
    StaleMoveFlag(PieceId),

    #[error("dice value {0} outside 1..=6")]
    DiceOutOfRange(u8),

    #[error("match finished without a winner")]
    MissingWinner,

    #[error("winner {0} has unfinished pieces")]
    WinnerNotFinished(PlayerId),

    #[error("winner {0} set while the match is still open")]
    PrematureWinner(PlayerId),
}

/// Unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color: {0}")]
pub struct ParseColorError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_messages() {
        assert_eq!(
            SetupError::TooManyPlayers { count: 5 }.to_string(),
            "a match seats at most 4 players, got 5"
        );
        assert_eq!(
            SetupError::DuplicateColor(Color::Red).to_string(),
            "color red is taken by more than one seat"
        );
    }

    #[test]
    fn test_state_error_message() {
        let err = StateError::StaleMoveFlag(PieceId::new(PlayerId::new(1), 0));
        assert_eq!(err.to_string(), "Player 1 piece 0 flagged movable without a live roll");
    }
}
