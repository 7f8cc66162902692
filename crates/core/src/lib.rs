//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board state machine: the grid model, the move engine,
//! tile spawning and terminal detection, plus the session that ties them together.
//! It has **zero dependencies** on terminal, input, or storage, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a pure function over a `Copy` grid
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Lines and empty-cell lists live on the stack
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid with adjacency and empty-cell queries
//! - [`engine`]: One line routine shared by all four directions
//! - [`spawner`]: Random 2/4 tile placement with an injected generator
//! - [`terminal`]: Game-over detection
//! - [`session`]: Score, sticky goal flag, terminal status and lifecycle
//! - [`snapshot`]: Plain-data view for renderers
//!
//! # Game Rules
//!
//! - **Merge once**: a tile produced by a merge cannot merge again in the same move
//! - **Spawn**: after every move that changes the grid, one tile (2 at 90%, 4 at 10%)
//! - **Goal**: producing 2048 sets a sticky flag; play continues
//! - **Game over**: no empty cell and no adjacent equal pair after the spawn
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameSession::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Some direction always changes a fresh two-tile grid.
//! let moved = Direction::ALL.iter().any(|&d| game.apply_move(d));
//! assert!(moved);
//! assert_eq!(game.moves(), 1);
//! ```

pub mod engine;
pub mod grid;
pub mod session;
pub mod snapshot;
pub mod spawner;
pub mod terminal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{available_moves, can_move, line_positions, merge_line, slide, LineMerge, MoveOutcome};
pub use grid::{Cell, Grid, GridError, Tile, MAX_EXPONENT};
pub use session::{GameSession, MoveEvent, SessionStatus};
pub use snapshot::GameSnapshot;
pub use spawner::{spawn, spawn_tile, Spawned};
pub use terminal::is_terminal;
