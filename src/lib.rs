//! # rust-ludo
//!
//! A rules engine for classic four-color Ludo.
//!
//! ## Design Principles
//!
//! 1. **State In, State Out**: every transition takes a `GameState` and
//!    returns the next one. Illegal or stale requests return the input
//!    unchanged rather than an error.
//!
//! 2. **1-4 Players**: any subset of the four colors can be seated; turn
//!    order follows seating order.
//!
//! 3. **Injected Time and Dice**: the engine reads a `Clock` and takes roll
//!    values from outside, so matches replay exactly under test.
//!
//! ## Architecture
//!
//! - **Per-color paths**: each color walks its own 57-cell path. Captures
//!   compare the physical ring cell, never the raw path index.
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: colors, board geometry, pieces, players, state, dice, clock, config
//! - `rules`: move arithmetic and the `LudoEngine` transitions
//! - `table`: one match driven with its own dice and turn timer
//! - `error`: setup and state-validation errors

pub mod core;
pub mod error;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    BoardCell, BoardPoint, Clock, Color, DiceRoller, DiceSource, EngineConfig, FixedDice, GamePhase,
    GameState, ManualClock, Millis, Piece, PieceId, Player, PlayerId, Position, RollRecord,
    SeatSpec, SystemClock, TurnEvent, TurnRecord,
};

pub use crate::error::{ParseColorError, SetupError, StateError};

pub use crate::rules::{AutoPlay, LudoEngine};

pub use crate::table::{RollOutcome, Table};
