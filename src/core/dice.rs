//! Dice sources.
//!
//! The engine only ever sees a finished roll value. Where that value comes
//! from is a `DiceSource`:
//! - `DiceRoller`: seeded ChaCha8 stream; same seed, same rolls
//! - `FixedDice`: scripted values for tests and demos
//!
//! ```
//! use rust_ludo::core::{DiceRoller, DiceSource};
//!
//! let mut a = DiceRoller::new(42);
//! let mut b = DiceRoller::new(42);
//! for _ in 0..20 {
//!     let v = a.roll();
//!     assert!((1..=6).contains(&v));
//!     assert_eq!(v, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lowest face of the die.
pub const MIN_ROLL: u8 = 1;

/// Highest face of the die. Rolling it releases pieces from home.
pub const MAX_ROLL: u8 = 6;

/// Produces roll values in `MIN_ROLL..=MAX_ROLL`.
pub trait DiceSource {
    fn roll(&mut self) -> u8;
}

/// Deterministic six-sided die.
#[derive(Clone, Debug)]
pub struct DiceRoller {
    inner: ChaCha8Rng,
}

impl DiceRoller {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for DiceRoller {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(MIN_ROLL..=MAX_ROLL)
    }
}

/// Replays a fixed script of values, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct FixedDice {
    values: Vec<u8>,
    cursor: usize,
}

impl FixedDice {
    /// An empty script rolls `MAX_ROLL` forever.
    #[must_use]
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> u8 {
        let Some(&value) = self.values.get(self.cursor % self.values.len().max(1)) else {
            return MAX_ROLL;
        };
        self.cursor += 1;
        value
    }
}
