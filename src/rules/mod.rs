//! Ludo rules.
//!
//! - `moves`: pure move arithmetic and capture detection
//! - `engine`: `LudoEngine`, every state transition of a match
//!
//! The engine never mutates a `GameState` it is handed. Each call returns
//! the next state, which is the previous one unchanged when the request was
//! illegal or stale.

pub mod engine;
pub mod moves;

pub use engine::{AutoPlay, LudoEngine};
