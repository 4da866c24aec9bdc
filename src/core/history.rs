//! Turn history: what happened, to whom, in which order.
//!
//! Every transition that changes the match appends one or more records so a
//! presentation layer can narrate rolls, captures and wins without diffing
//! states.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{PieceId, Position};
use super::player::PlayerId;

/// A single game event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A roll was resolved; `movable` pieces were flagged.
    Rolled { value: u8, movable: u8 },

    /// The turn passed without a move.
    Skipped { value: Option<u8> },

    /// A piece moved, possibly capturing opponents on the landing cell.
    Moved {
        piece: PieceId,
        from: Position,
        to: Position,
        captured: SmallVec<[PieceId; 4]>,
    },

    /// The mover keeps the turn (rolled a six or finished a piece).
    ExtraTurn,

    /// The player finished all pieces.
    Won,
}

/// A recorded event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player the event belongs to.
    pub player: PlayerId,

    pub event: TurnEvent,

    /// Turn number when the event happened.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl TurnRecord {
    #[must_use]
    pub fn new(player: PlayerId, event: TurnEvent, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            event,
            turn,
            sequence,
        }
    }

    /// Pieces captured by this event, if it was a move.
    #[must_use]
    pub fn captured(&self) -> &[PieceId] {
        match &self.event {
            TurnEvent::Moved { captured, .. } => captured.as_slice(),
            _ => &[],
        }
    }
}
