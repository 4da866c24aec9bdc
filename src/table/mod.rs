//! A seated match with its own dice and turn timer.
//!
//! `LudoEngine` is stateless over `GameState`; a `Table` owns one match and
//! drives the engine for a host: rolling its own dice, forwarding external
//! roll reports, applying selections, and firing auto-play when a decision
//! window expires.

mod session;

pub use session::{RollOutcome, Table};
