//! The match engine: every rule-driven state transition.
//!
//! Each operation takes the current `GameState` by reference and returns a
//! complete replacement. Illegal or stale requests return an unchanged
//! clone, so a caller can always re-render whatever comes back.
//!
//! ## Turn cycle
//!
//! ```text
//! awaiting roll --on_dice_rolled--> pieces flagged --on_piece_selected--> awaiting roll
//!       |                                                  (next seat or extra roll)
//!       +--(no legal move)--> next seat
//! ```

use im::Vector;
use tracing::{debug, info, warn};

use super::moves::{self, RELEASE_ROLL};
use crate::core::history::TurnEvent;
use crate::core::player::MAX_PLAYERS;
use crate::core::state::RollRecord;
use crate::core::{
    Clock, Color, DiceSource, EngineConfig, GamePhase, GameState, PieceId, Player, PlayerId,
    Position, SeatSpec, SystemClock,
};
use crate::error::SetupError;

/// What auto-play does when a decision window expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoPlay {
    /// No live dice: roll for the current player.
    Roll,
    /// Move this piece with the live dice.
    Move(PieceId),
    /// Live dice but nothing can move: pass the turn.
    Skip,
}

/// Ludo rules over a `Clock`.
#[derive(Clone, Debug, Default)]
pub struct LudoEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
}

impl LudoEngine<SystemClock> {
    /// An engine on wall-clock time.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> LudoEngine<C> {
    #[must_use]
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self { config, clock }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // === Setup ===

    /// Seat 1-4 players with unique colors and open the match.
    ///
    /// Seat 0 moves first. Every piece starts at home.
    pub fn create_match(&self, seats: &[SeatSpec]) -> Result<GameState, SetupError> {
        match seats.len() {
            0 => return Err(SetupError::NoPlayers),
            count if count > MAX_PLAYERS => return Err(SetupError::TooManyPlayers { count }),
            _ => {}
        }

        let mut taken: Vec<Color> = Vec::with_capacity(seats.len());
        for (seat, spec) in seats.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(SetupError::EmptyName { seat });
            }
            if taken.contains(&spec.color) {
                return Err(SetupError::DuplicateColor(spec.color));
            }
            taken.push(spec.color);
        }

        let players: Vector<Player> = seats
            .iter()
            .enumerate()
            .map(|(i, spec)| Player::new(PlayerId::new(i as u8), spec, i == 0))
            .collect();

        info!(players = seats.len(), "match created");
        Ok(GameState::new(players, self.clock.now()))
    }

    // === Dice ===

    /// Whether a roll report repeats the last accepted one inside the
    /// coalescing window.
    #[must_use]
    pub fn is_duplicate_roll(&self, state: &GameState, value: u8) -> bool {
        let now = self.clock.now();
        state.last_roll.is_some_and(|last| {
            last.value == value && now.saturating_sub(last.at) < self.config.dedup_window_ms
        })
    }

    /// An external dice producer reported `value`.
    ///
    /// Duplicate reports of the same roll are dropped; everything else goes
    /// through `resolve_roll`.
    #[must_use]
    pub fn on_dice_rolled(&self, state: &GameState, value: u8) -> GameState {
        if self.is_duplicate_roll(state, value) {
            debug!(value, "duplicate roll report ignored");
            return state.clone();
        }
        self.resolve_roll(state, value)
    }

    /// Flag the current player's movable pieces for a fresh roll, or pass
    /// the turn if nothing can move.
    ///
    /// Use this directly only for rolls the caller produced itself and
    /// knows to be unique.
    #[must_use]
    pub fn resolve_roll(&self, state: &GameState, value: u8) -> GameState {
        if !state.is_playing() {
            debug!(value, phase = ?state.phase, "roll outside play ignored");
            return state.clone();
        }
        if !moves::is_valid_roll(value) {
            warn!(value, "roll value out of range ignored");
            return state.clone();
        }
        if let Some(live) = state.dice_value {
            debug!(value, live, "roll while dice are live ignored");
            return state.clone();
        }

        let now = self.clock.now();
        let player_id = state.current_player_id();
        let mut next = state.clone();
        next.last_roll = Some(RollRecord { value, at: now });
        next.clear_flags();

        let mut movable = 0u8;
        if let Some(player) = next.players.get_mut(state.current_player_index) {
            for piece in player.pieces.iter_mut() {
                piece.can_move = moves::can_move(piece, value);
                movable += u8::from(piece.can_move);
            }
        }
        next.record(player_id, TurnEvent::Rolled { value, movable });

        if movable == 0 {
            let all_home = next.current_player().is_some_and(Player::all_home);
            info!(player = %player_id, value, all_home, "no legal move, turn passes");
            next.record(player_id, TurnEvent::Skipped { value: Some(value) });
            next.advance_turn(now);
            return next;
        }

        debug!(player = %player_id, value, movable, "pieces flagged");
        next.dice_value = Some(value);
        next.turn_started_at = now;
        next
    }

    // === Moves ===

    /// The current player picked `piece` to move with the live dice.
    ///
    /// Anything but a flagged piece of the current player with live dice is
    /// a no-op.
    #[must_use]
    pub fn on_piece_selected(&self, state: &GameState, piece_id: PieceId) -> GameState {
        let Some(roll) = state.dice_value.filter(|_| state.is_playing()) else {
            debug!(piece = %piece_id, "selection without live dice ignored");
            return state.clone();
        };
        let mover = state.current_player_id();
        if piece_id.owner != mover {
            debug!(
                piece = %piece_id,
                current = %mover,
                "selection of another player's piece ignored"
            );
            return state.clone();
        }
        let (Some(player), Some(piece)) = (state.player(mover), state.piece(piece_id)) else {
            warn!(piece = %piece_id, "selection of unknown piece ignored");
            return state.clone();
        };
        if !piece.can_move {
            debug!(piece = %piece_id, "selection of unflagged piece ignored");
            return state.clone();
        }
        let Some(to) = moves::destination(piece.position, roll) else {
            warn!(piece = %piece_id, roll, "flagged piece has no destination");
            return state.clone();
        };

        let now = self.clock.now();
        let from = piece.position;
        let color = player.color;
        let captured = moves::capture_victims(state, mover, color, to);

        let mut next = state.clone();
        for &victim in &captured {
            if let Some(p) = next.piece_mut(victim) {
                p.send_home();
            }
            info!(mover = %mover, victim = %victim, "capture");
        }
        if let Some(p) = next.piece_mut(piece_id) {
            p.position = to;
        }
        next.record(
            mover,
            TurnEvent::Moved {
                piece: piece_id,
                from,
                to,
                captured,
            },
        );
        next.dice_value = None;
        next.clear_flags();

        if next.player(mover).is_some_and(Player::all_finished) {
            info!(winner = %mover, "match won");
            next.phase = GamePhase::Finished;
            next.winner = Some(mover);
            next.can_roll_again = false;
            next.record(mover, TurnEvent::Won);
            return next;
        }

        if roll == RELEASE_ROLL || to == Position::Finished {
            debug!(player = %mover, roll, "extra turn");
            next.record(mover, TurnEvent::ExtraTurn);
            next.grant_extra_turn(now);
        } else {
            next.advance_turn(now);
        }
        next
    }

    /// Pass the turn without moving.
    #[must_use]
    pub fn skip_turn(&self, state: &GameState) -> GameState {
        if !state.is_playing() {
            return state.clone();
        }
        let player_id = state.current_player_id();
        let mut next = state.clone();
        next.record(player_id, TurnEvent::Skipped { value: state.dice_value });
        next.advance_turn(self.clock.now());
        info!(player = %player_id, "turn skipped");
        next
    }

    // === Auto-play ===

    /// What auto-play would do right now, or `None` once the match is over.
    ///
    /// With live dice the piece is chosen by priority: one leaving home,
    /// else one that would finish, else the first movable piece.
    #[must_use]
    pub fn auto_play_decision(&self, state: &GameState) -> Option<AutoPlay> {
        if !state.is_playing() {
            return None;
        }
        let Some(roll) = state.dice_value else {
            return Some(AutoPlay::Roll);
        };
        let player = state.current_player()?;
        let movable = || player.pieces.iter().filter(|p| p.can_move);

        let choice = movable()
            .find(|p| p.position.is_home())
            .or_else(|| {
                movable().find(|p| moves::destination(p.position, roll) == Some(Position::Finished))
            })
            .or_else(|| movable().next());

        Some(choice.map_or(AutoPlay::Skip, |p| AutoPlay::Move(p.id)))
    }

    /// The current decision window expired: act for the current player.
    #[must_use]
    pub fn on_auto_play_timeout<D: DiceSource + ?Sized>(
        &self,
        state: &GameState,
        dice: &mut D,
    ) -> GameState {
        match self.auto_play_decision(state) {
            None => state.clone(),
            Some(AutoPlay::Roll) => {
                let value = dice.roll();
                debug!(player = %state.current_player_id(), value, "auto-play roll");
                self.resolve_roll(state, value)
            }
            Some(AutoPlay::Move(piece)) => {
                debug!(piece = %piece, "auto-play move");
                self.on_piece_selected(state, piece)
            }
            Some(AutoPlay::Skip) => self.skip_turn(state),
        }
    }
}
