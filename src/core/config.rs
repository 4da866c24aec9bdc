//! Engine configuration parameters.

use serde::{Deserialize, Serialize};

use super::clock::Millis;

/// Tunables for the engine and the table that drives it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Two roll reports with the same value closer together than this are
    /// treated as one (default: 1000 ms).
    pub dedup_window_ms: Millis,

    /// Length of a decision window before auto-play acts for the current
    /// player (default: 30 s).
    pub auto_play_timeout_ms: Millis,

    /// Whether expired decision windows trigger auto-play.
    pub auto_play_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dedup_window_ms: 1_000,
            auto_play_timeout_ms: 30_000,
            auto_play_enabled: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom duplicate-roll window.
    #[must_use]
    pub fn with_dedup_window(mut self, ms: Millis) -> Self {
        self.dedup_window_ms = ms;
        self
    }

    /// Create a new config with a custom auto-play timeout.
    #[must_use]
    pub fn with_auto_play_timeout(mut self, ms: Millis) -> Self {
        self.auto_play_timeout_ms = ms;
        self
    }

    /// Create a new config with auto-play switched on or off.
    #[must_use]
    pub fn with_auto_play(mut self, enabled: bool) -> Self {
        self.auto_play_enabled = enabled;
        self
    }
}
