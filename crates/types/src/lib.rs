//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//!
//! # Spawn Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance that a spawned tile is a 2 |
//! | `SPAWN_LOW_VALUE` | 2 | Common spawn value |
//! | `SPAWN_HIGH_VALUE` | 4 | Rare spawn value |
//! | `INITIAL_TILES` | 2 | Tiles spawned when a session starts |
//! | `GOAL_VALUE` | 2048 | Reaching it sets the sticky goal flag |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Pos, GRID_SIZE};
//!
//! assert_eq!(Direction::ALL.len(), 4);
//! assert_eq!(Direction::Left.as_str(), "left");
//!
//! // Cells are stored row-major
//! assert_eq!(Pos::new(1, 2).index(), GRID_SIZE + 2);
//! ```

/// Grid side length (4 rows and 4 columns)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that sets the sticky goal flag when produced by a merge
pub const GOAL_VALUE: u32 = 2048;

/// Number of tiles spawned on an empty grid at session start
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 2 (otherwise 4)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Common spawn value
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Rare spawn value
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// The four move directions
///
/// The direction names the edge tiles slide toward:
/// - **Up**: columns compress toward row 0
/// - **Down**: columns compress toward row 3
/// - **Left**: rows compress toward column 0
/// - **Right**: rows compress toward column 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands accepted by a game session
///
/// These are produced by the input layer; the session never sees raw
/// device events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every line toward the given edge
    Move(Direction),
    /// Discard the current session and reseed a fresh grid
    NewGame,
}

/// A grid coordinate
///
/// `row` runs top to bottom, `col` left to right, both in `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index into a flat cell array
    #[inline(always)]
    pub const fn index(&self) -> usize {
        (self.row as usize) * GRID_SIZE + (self.col as usize)
    }

    /// Inverse of [`Pos::index`]
    #[inline(always)]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        }
    }
}
