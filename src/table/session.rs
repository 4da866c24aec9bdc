use tracing::{debug, info};

use crate::core::{
    Clock, DiceRoller, DiceSource, EngineConfig, GameState, Millis, PieceId, PlayerId, SeatSpec,
    SystemClock,
};
use crate::error::SetupError;
use crate::rules::moves;
use crate::rules::LudoEngine;

/// What happened to a roll handed to a `Table`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// The roll is live; `movable` pieces await a selection.
    Flagged { value: u8, movable: usize },
    /// Nothing could move and the turn passed.
    Skipped { value: u8 },
    /// A roll is already live.
    Blocked,
    /// Same report as the last one, inside the coalescing window.
    Duplicate,
    /// Value outside `1..=6`.
    Invalid,
    /// The match is over.
    GameOver,
}

/// One match and everything needed to drive it.
pub struct Table<C: Clock = SystemClock, D: DiceSource = DiceRoller> {
    engine: LudoEngine<C>,
    state: GameState,
    dice: D,
    auto_play: bool,
}

impl Table {
    /// A wall-clock table rolling seeded dice.
    pub fn new(seats: &[SeatSpec], config: EngineConfig, seed: u64) -> Result<Self, SetupError> {
        Self::with_parts(LudoEngine::new(config), DiceRoller::new(seed), seats)
    }
}

impl<C: Clock, D: DiceSource> Table<C, D> {
    pub fn with_parts(
        engine: LudoEngine<C>,
        dice: D,
        seats: &[SeatSpec],
    ) -> Result<Self, SetupError> {
        let state = engine.create_match(seats)?;
        let auto_play = engine.config().auto_play_enabled;
        Ok(Self {
            engine,
            state,
            dice,
            auto_play,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the current state (cheap: `im` vectors inside).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn engine(&self) -> &LudoEngine<C> {
        &self.engine
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    // === Rolling ===

    /// Roll the table's own dice for the current player.
    pub fn roll(&mut self) -> RollOutcome {
        if let Some(outcome) = self.precheck() {
            return outcome;
        }
        let value = self.dice.roll();
        let next = self.engine.resolve_roll(&self.state, value);
        self.commit_roll(next, value)
    }

    /// A roll produced outside the table (physical dice, a remote client).
    pub fn report_roll(&mut self, value: u8) -> RollOutcome {
        if let Some(outcome) = self.precheck() {
            return outcome;
        }
        if self.engine.is_duplicate_roll(&self.state, value) {
            debug!(value, "duplicate roll report");
            return RollOutcome::Duplicate;
        }
        if !moves::is_valid_roll(value) {
            return RollOutcome::Invalid;
        }
        let next = self.engine.on_dice_rolled(&self.state, value);
        self.commit_roll(next, value)
    }

    fn precheck(&self) -> Option<RollOutcome> {
        if !self.state.is_playing() {
            Some(RollOutcome::GameOver)
        } else if self.state.dice_value.is_some() {
            Some(RollOutcome::Blocked)
        } else {
            None
        }
    }

    fn commit_roll(&mut self, next: GameState, value: u8) -> RollOutcome {
        self.state = next;
        match self.state.dice_value {
            Some(_) => RollOutcome::Flagged {
                value,
                movable: self.state.movable_pieces().len(),
            },
            None => RollOutcome::Skipped { value },
        }
    }

    // === Moves ===

    /// Move `piece` with the live roll. Returns whether anything changed.
    pub fn select(&mut self, piece: PieceId) -> bool {
        let next = self.engine.on_piece_selected(&self.state, piece);
        self.replace(next)
    }

    /// Pass the current turn.
    pub fn skip(&mut self) -> bool {
        let next = self.engine.skip_turn(&self.state);
        self.replace(next)
    }

    fn replace(&mut self, next: GameState) -> bool {
        let changed = next != self.state;
        self.state = next;
        changed
    }

    // === Auto-play ===

    pub fn set_auto_play(&mut self, enabled: bool) {
        info!(enabled, "auto-play toggled");
        self.auto_play = enabled;
    }

    #[must_use]
    pub fn auto_play_enabled(&self) -> bool {
        self.auto_play
    }

    /// When the current decision window expires, if auto-play is on and
    /// the match is open.
    #[must_use]
    pub fn auto_play_deadline(&self) -> Option<Millis> {
        let timeout = self.engine.config().auto_play_timeout_ms;
        (self.auto_play && self.state.is_playing())
            .then(|| self.state.turn_started_at.saturating_add(timeout))
    }

    /// Poll the turn timer. Acts for the current player once the deadline
    /// has passed; returns whether it did.
    pub fn tick(&mut self) -> bool {
        let Some(deadline) = self.auto_play_deadline() else {
            return false;
        };
        if self.engine.clock().now() < deadline {
            return false;
        }
        info!(player = %self.state.current_player_id(), "decision window expired");
        self.step()
    }

    // === Self-play ===

    /// Take one auto-play action now, ignoring the timer.
    pub fn step(&mut self) -> bool {
        let next = self.engine.on_auto_play_timeout(&self.state, &mut self.dice);
        self.replace(next)
    }

    /// Auto-play until someone wins or `max_steps` actions were taken.
    pub fn play_out(&mut self, max_steps: usize) -> Option<PlayerId> {
        for _ in 0..max_steps {
            if !self.step() {
                break;
            }
        }
        self.state.winner
    }
}
