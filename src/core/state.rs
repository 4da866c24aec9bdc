//! Match state.
//!
//! ## GameState
//!
//! The single rule-relevant structure of a match:
//! - Seated players and their pieces
//! - Whose turn it is and the live dice value
//! - Phase, winner and the extra-roll entitlement
//! - Turn clock and the last roll report (for duplicate coalescing)
//! - Event history
//!
//! Transitions never mutate a state in place; they clone it, change the
//! clone, and hand it back. `players` and `history` are `im` vectors so
//! those clones are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::clock::Millis;
use super::dice::{MAX_ROLL, MIN_ROLL};
use super::history::{TurnEvent, TurnRecord};
use super::piece::{Piece, PieceId, PIECES_PER_PLAYER};
use super::player::{Player, PlayerId, MAX_PLAYERS};
use crate::error::StateError;

/// Match lifecycle. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Seats are still being chosen; no `GameState` is playable yet.
    #[default]
    Setup,
    Playing,
    Finished,
}

/// The last accepted roll report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub value: u8,
    pub at: Millis,
}

/// Complete state of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seated players in turn order; `players[i].id == PlayerId(i)`.
    pub players: Vector<Player>,

    /// Whose turn it is.
    pub current_player_index: usize,

    /// Roll awaiting a piece selection.
    pub dice_value: Option<u8>,

    pub phase: GamePhase,

    /// Set only once `phase == Finished`.
    pub winner: Option<PlayerId>,

    /// The current player keeps the turn and may roll again.
    pub can_roll_again: bool,

    /// When the current decision window opened.
    pub turn_started_at: Millis,

    /// Last accepted roll report, consulted to drop duplicates.
    pub last_roll: Option<RollRecord>,

    /// Turn number (starts at 1, bumps whenever the turn passes).
    pub turn_number: u32,

    /// Event sequence within the turn.
    pub action_sequence: u32,

    pub history: Vector<TurnRecord>,
}

impl GameState {
    /// A match in `Playing` with every piece at home and seat 0 to act.
    #[must_use]
    pub(crate) fn new(players: Vector<Player>, now: Millis) -> Self {
        Self {
            players,
            current_player_index: 0,
            dice_value: None,
            phase: GamePhase::Playing,
            winner: None,
            can_roll_again: false,
            turn_started_at: now,
            last_roll: None,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId::new(self.current_player_index as u8)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.player(id.owner)?.piece(id.slot_index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.players
            .get_mut(id.owner.index())?
            .pieces
            .get_mut(id.slot_index())
    }

    /// Finished pieces for a player (0 for an unknown seat).
    #[must_use]
    pub fn finished_count(&self, id: PlayerId) -> usize {
        self.player(id).map_or(0, Player::finished_count)
    }

    /// The current player's pieces flagged for the live roll.
    #[must_use]
    pub fn movable_pieces(&self) -> SmallVec<[PieceId; PIECES_PER_PLAYER]> {
        self.current_player().map(Player::movable).unwrap_or_default()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    // === Transition helpers ===

    /// Clear `can_move`/`is_selected` on every piece.
    pub(crate) fn clear_flags(&mut self) {
        for player in self.players.iter_mut() {
            for piece in player.pieces.iter_mut() {
                piece.clear_flags();
            }
        }
    }

    /// Pass the turn to the next seat.
    pub(crate) fn advance_turn(&mut self, now: Millis) {
        let count = self.player_count().max(1);
        self.current_player_index = (self.current_player_index + 1) % count;
        self.dice_value = None;
        self.can_roll_again = false;
        self.turn_started_at = now;
        self.turn_number += 1;
        self.action_sequence = 0;
        self.clear_flags();
    }

    /// Keep the turn with the current seat for another roll.
    pub(crate) fn grant_extra_turn(&mut self, now: Millis) {
        self.dice_value = None;
        self.can_roll_again = true;
        self.turn_started_at = now;
        self.clear_flags();
    }

    /// Append an event for `player` to the history.
    pub(crate) fn record(&mut self, player: PlayerId, event: TurnEvent) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(TurnRecord::new(player, event, self.turn_number, sequence));
    }

    // === Invariants ===

    /// Check every structural invariant of a match.
    ///
    /// States produced by the engine always pass; this is for hosts that
    /// receive states from elsewhere and for tests.
    pub fn validate(&self) -> Result<(), StateError> {
        let count = self.player_count();
        if count == 0 || count > MAX_PLAYERS {
            return Err(StateError::PlayerCount(count));
        }
        if self.current_player_index >= count {
            return Err(StateError::CurrentPlayerOutOfRange {
                index: self.current_player_index,
                count,
            });
        }

        for (i, player) in self.players.iter().enumerate() {
            if player.id.index() != i {
                return Err(StateError::SeatMismatch { seat: i, id: player.id });
            }
            if let Some(other) = self.players.iter().take(i).find(|p| p.color == player.color) {
                return Err(StateError::DuplicateColor {
                    color: player.color,
                    first: other.id,
                    second: player.id,
                });
            }
            for (slot, piece) in player.pieces.iter().enumerate() {
                if piece.id != PieceId::new(player.id, slot as u8) {
                    return Err(StateError::PieceMismatch { piece: piece.id, seat: i, slot });
                }
                if !piece.position.is_valid() {
                    return Err(StateError::InvalidPosition {
                        piece: piece.id,
                        position: piece.position,
                    });
                }
                if piece.can_move && self.dice_value.is_none() {
                    return Err(StateError::StaleMoveFlag(piece.id));
                }
            }
        }

        if let Some(value) = self.dice_value {
            if !(MIN_ROLL..=MAX_ROLL).contains(&value) {
                return Err(StateError::DiceOutOfRange(value));
            }
        }

        match (self.phase, self.winner) {
            (GamePhase::Finished, None) => Err(StateError::MissingWinner),
            (GamePhase::Finished, Some(winner))
                if self.finished_count(winner) != PIECES_PER_PLAYER =>
            {
                Err(StateError::WinnerNotFinished(winner))
            }
            (GamePhase::Setup | GamePhase::Playing, Some(winner)) => {
                Err(StateError::PrematureWinner(winner))
            }
            _ => Ok(()),
        }
    }
}
