//! Player colors.
//!
//! Each color owns a home quadrant and a fixed path around the board. The
//! four paths share one 52-cell ring; a color's path starts on the ring at
//! its `ring_offset` and leaves it for a private home run.
//!
//! ```
//! use rust_ludo::core::Color;
//!
//! let color: Color = "blue".parse().unwrap();
//! assert_eq!(color, Color::Blue);
//! assert_eq!(color.ring_offset(), 26);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseColorError;

/// One of the four seat colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Green,
    Blue,
    Red,
}

impl Color {
    /// All colors in seat-selection order.
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Green, Color::Blue, Color::Red];

    /// Ring cell where this color's path enters the shared track.
    ///
    /// Going around the ring the entries are yellow, red, blue, green,
    /// thirteen cells apart.
    #[must_use]
    pub const fn ring_offset(self) -> u8 {
        match self {
            Color::Yellow => 0,
            Color::Red => 13,
            Color::Blue => 26,
            Color::Green => 39,
        }
    }

    /// Dense index (0..4) for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Green => 1,
            Color::Blue => 2,
            Color::Red => 3,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}
