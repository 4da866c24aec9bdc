//! Board topology: per-color paths, the shared ring, and safe cells.
//!
//! ## Path Layout
//!
//! Every color walks its own 57-entry path table:
//! - `0..HOME_RUN_START` (51 cells): the shared ring, starting at the
//!   color's entry cell
//! - `HOME_RUN_START..=FINAL_INDEX` (6 cells): the private home run
//!
//! Shared cells coincide across colors: index `i` of a color maps to ring
//! cell `(ring_offset + i) % RING_LEN`. Captures and safe cells are decided
//! on ring cells, never on raw per-color indices.
//!
//! ## Renderer Queries
//!
//! `locate` maps a logical position to a board point, and `occupancy`
//! groups on-board pieces by the cell they share so stacked pieces can be
//! fanned out.
//!
//! ```
//! use rust_ludo::core::board::{self, BoardCell};
//! use rust_ludo::core::Color;
//!
//! // Yellow's 13th cell is red's entry cell.
//! assert_eq!(board::ring_cell(Color::Yellow, 13), board::ring_cell(Color::Red, 0));
//! assert_eq!(board::path(Color::Red)[0], BoardCell::new(1, -6));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::piece::{PieceId, Position};
use super::state::GameState;

/// Entries in every color's path table.
pub const PATH_LEN: usize = 57;

/// Last path index. Landing here exactly finishes the piece.
pub const FINAL_INDEX: u8 = (PATH_LEN - 1) as u8;

/// Path index a piece enters on when leaving home.
pub const ENTRY_INDEX: u8 = 0;

/// First path index of the private home run.
pub const HOME_RUN_START: u8 = 51;

/// Cells on the shared ring.
pub const RING_LEN: u8 = 52;

/// Ring cells where captures never happen: the four entry cells and the
/// four neutral stars.
pub const SAFE_RING_CELLS: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Integer grid cell; `x` runs east, `z` runs south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCell {
    pub x: i8,
    pub z: i8,
}

impl BoardCell {
    #[must_use]
    pub const fn new(x: i8, z: i8) -> Self {
        Self { x, z }
    }
}

const fn c(x: i8, z: i8) -> BoardCell {
    BoardCell::new(x, z)
}

/// Continuous board coordinate for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardPoint {
    pub x: f32,
    pub z: f32,
}

impl BoardPoint {
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

impl From<BoardCell> for BoardPoint {
    fn from(cell: BoardCell) -> Self {
        Self::new(f32::from(cell.x), f32::from(cell.z))
    }
}

/// Where finished pieces gather.
pub const CENTER: BoardPoint = BoardPoint::new(0.0, 0.0);

const fn p(x: f32, z: f32) -> BoardPoint {
    BoardPoint::new(x, z)
}

/// Home slots per color, indexed by `Color::index`.
const HOME_SLOTS: [[BoardPoint; 4]; 4] = [
    [p(-5.6, -5.6), p(-3.4, -5.6), p(-5.6, -3.4), p(-3.4, -3.4)],
    [p(-5.6, 3.4), p(-3.4, 3.4), p(-5.6, 5.6), p(-3.4, 5.6)],
    [p(3.4, 3.4), p(5.6, 3.4), p(3.4, 5.6), p(5.6, 5.6)],
    [p(3.4, -5.6), p(5.6, -5.6), p(3.4, -3.4), p(5.6, -3.4)],
];

static YELLOW_PATH: [BoardCell; PATH_LEN] = [
    c(-6, -1), c(-5, -1), c(-4, -1), c(-3, -1), c(-2, -1), c(-1, -2),
    c(-1, -3), c(-1, -4), c(-1, -5), c(-1, -6), c(-1, -7), c(0, -7),
    c(1, -7), c(1, -6), c(1, -5), c(1, -4), c(1, -3), c(1, -2),
    c(2, -1), c(3, -1), c(4, -1), c(5, -1), c(6, -1), c(7, -1),
    c(7, 0), c(7, 1), c(6, 1), c(5, 1), c(4, 1), c(3, 1),
    c(2, 1), c(1, 2), c(1, 3), c(1, 4), c(1, 5), c(1, 6),
    c(1, 7), c(0, 7), c(-1, 7), c(-1, 6), c(-1, 5), c(-1, 4),
    c(-1, 3), c(-1, 2), c(-2, 1), c(-3, 1), c(-4, 1), c(-5, 1),
    c(-6, 1), c(-7, 1), c(-7, 0), c(-6, 0), c(-5, 0), c(-4, 0),
    c(-3, 0), c(-2, 0), c(-1, 0),
];

static GREEN_PATH: [BoardCell; PATH_LEN] = [
    c(-1, 6), c(-1, 5), c(-1, 4), c(-1, 3), c(-1, 2), c(-2, 1),
    c(-3, 1), c(-4, 1), c(-5, 1), c(-6, 1), c(-7, 1), c(-7, 0),
    c(-7, -1), c(-6, -1), c(-5, -1), c(-4, -1), c(-3, -1), c(-2, -1),
    c(-1, -2), c(-1, -3), c(-1, -4), c(-1, -5), c(-1, -6), c(-1, -7),
    c(0, -7), c(1, -7), c(1, -6), c(1, -5), c(1, -4), c(1, -3),
    c(1, -2), c(2, -1), c(3, -1), c(4, -1), c(5, -1), c(6, -1),
    c(7, -1), c(7, 0), c(7, 1), c(6, 1), c(5, 1), c(4, 1),
    c(3, 1), c(2, 1), c(1, 2), c(1, 3), c(1, 4), c(1, 5),
    c(1, 6), c(1, 7), c(0, 7), c(0, 6), c(0, 5), c(0, 4),
    c(0, 3), c(0, 2), c(0, 1),
];

static BLUE_PATH: [BoardCell; PATH_LEN] = [
    c(6, 1), c(5, 1), c(4, 1), c(3, 1), c(2, 1), c(1, 2),
    c(1, 3), c(1, 4), c(1, 5), c(1, 6), c(1, 7), c(0, 7),
    c(-1, 7), c(-1, 6), c(-1, 5), c(-1, 4), c(-1, 3), c(-1, 2),
    c(-2, 1), c(-3, 1), c(-4, 1), c(-5, 1), c(-6, 1), c(-7, 1),
    c(-7, 0), c(-7, -1), c(-6, -1), c(-5, -1), c(-4, -1), c(-3, -1),
    c(-2, -1), c(-1, -2), c(-1, -3), c(-1, -4), c(-1, -5), c(-1, -6),
    c(-1, -7), c(0, -7), c(1, -7), c(1, -6), c(1, -5), c(1, -4),
    c(1, -3), c(1, -2), c(2, -1), c(3, -1), c(4, -1), c(5, -1),
    c(6, -1), c(7, -1), c(7, 0), c(6, 0), c(5, 0), c(4, 0),
    c(3, 0), c(2, 0), c(1, 0),
];

static RED_PATH: [BoardCell; PATH_LEN] = [
    c(1, -6), c(1, -5), c(1, -4), c(1, -3), c(1, -2), c(2, -1),
    c(3, -1), c(4, -1), c(5, -1), c(6, -1), c(7, -1), c(7, 0),
    c(7, 1), c(6, 1), c(5, 1), c(4, 1), c(3, 1), c(2, 1),
    c(1, 2), c(1, 3), c(1, 4), c(1, 5), c(1, 6), c(1, 7),
    c(0, 7), c(-1, 7), c(-1, 6), c(-1, 5), c(-1, 4), c(-1, 3),
    c(-1, 2), c(-2, 1), c(-3, 1), c(-4, 1), c(-5, 1), c(-6, 1),
    c(-7, 1), c(-7, 0), c(-7, -1), c(-6, -1), c(-5, -1), c(-4, -1),
    c(-3, -1), c(-2, -1), c(-1, -2), c(-1, -3), c(-1, -4), c(-1, -5),
    c(-1, -6), c(-1, -7), c(0, -7), c(0, -6), c(0, -5), c(0, -4),
    c(0, -3), c(0, -2), c(0, -1),
];
/// The fixed path table for a color.
#[must_use]
pub fn path(color: Color) -> &'static [BoardCell; PATH_LEN] {
    match color {
        Color::Yellow => &YELLOW_PATH,
        Color::Green => &GREEN_PATH,
        Color::Blue => &BLUE_PATH,
        Color::Red => &RED_PATH,
    }
}

/// Ring cell for a path index, or `None` inside the home run.
#[must_use]
pub fn ring_cell(color: Color, index: u8) -> Option<u8> {
    (index < HOME_RUN_START).then(|| (color.ring_offset() + index) % RING_LEN)
}

/// Whether a ring cell is safe from captures.
#[must_use]
pub fn is_safe_ring_cell(cell: u8) -> bool {
    SAFE_RING_CELLS.contains(&cell)
}

/// Whether a color's path index is a safe cell.
///
/// Home-run cells are private and count as safe.
#[must_use]
pub fn is_safe(color: Color, index: u8) -> bool {
    ring_cell(color, index).map_or(true, is_safe_ring_cell)
}

/// Home slot point for a piece slot (wraps past 4).
#[must_use]
pub fn home_slot(color: Color, slot: usize) -> BoardPoint {
    HOME_SLOTS[color.index()][slot % 4]
}

/// Board point for a logical position.
///
/// A track index outside the path table falls back to the center.
#[must_use]
pub fn locate(color: Color, position: Position, slot: usize) -> BoardPoint {
    match position {
        Position::Home => home_slot(color, slot),
        Position::Finished => CENTER,
        Position::Track(i) => path(color)
            .get(usize::from(i))
            .copied()
            .map_or(CENTER, BoardPoint::from),
    }
}

/// A spot that several pieces can share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spot {
    Cell(BoardCell),
    Center,
}

/// Spot a piece occupies on the board; home pieces have their own slot and
/// never stack.
#[must_use]
pub fn spot(color: Color, position: Position) -> Option<Spot> {
    match position {
        Position::Home => None,
        Position::Finished => Some(Spot::Center),
        Position::Track(i) => Some(
            path(color)
                .get(usize::from(i))
                .map_or(Spot::Center, |&cell| Spot::Cell(cell)),
        ),
    }
}

/// Group every on-board piece by the spot it occupies.
#[must_use]
pub fn occupancy(state: &GameState) -> FxHashMap<Spot, SmallVec<[PieceId; 4]>> {
    let mut spots: FxHashMap<Spot, SmallVec<[PieceId; 4]>> = FxHashMap::default();

    for player in state.players.iter() {
        for piece in &player.pieces {
            if let Some(spot) = spot(player.color, piece.position) {
                spots.entry(spot).or_default().push(piece.id);
            }
        }
    }

    spots
}
