//! Core match types: colors, board, players, pieces, state, dice, clock,
//! configuration.
//!
//! Everything here is data plus small helpers. The rules that move a match
//! forward live in `rules`.

pub mod board;
pub mod clock;
pub mod color;
pub mod config;
pub mod dice;
pub mod history;
pub mod piece;
pub mod player;
pub mod state;

pub use board::{BoardCell, BoardPoint, Spot};
pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use color::Color;
pub use config::EngineConfig;
pub use dice::{DiceRoller, DiceSource, FixedDice};
pub use history::{TurnEvent, TurnRecord};
pub use piece::{Piece, PieceId, Position};
pub use player::{Player, PlayerId, SeatSpec};
pub use state::{GameState, GamePhase, RollRecord};
