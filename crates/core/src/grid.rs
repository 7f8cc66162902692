//! Grid module - the 4x4 tile matrix
//!
//! The grid is a 4x4 array where each cell is empty or holds a power-of-two tile.
//! Uses a flat array for cache locality and cheap `Copy` snapshots.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).
//!
//! Grids are immutable values from the outside: callers read them, the move
//! engine and the spawner produce new ones.

use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Pos, CELL_COUNT, GRID_SIZE};

/// Largest supported tile exponent (2^31 still fits in a `u32`)
///
/// A tile at this exponent is the ceiling: it never merges, not even with an
/// equal neighbour, so two adjacent 2^31 tiles do not keep a full grid alive.
pub const MAX_EXPONENT: u8 = 31;

/// A tile holding a power-of-two value, stored as its base-2 exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    exponent: u8,
}

impl Tile {
    /// Build a tile from its face value.
    ///
    /// Returns `None` for anything that is not a power of two in `2..=2^31`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Tile;
    ///
    /// assert_eq!(Tile::new(8).map(|t| t.value()), Some(8));
    /// assert_eq!(Tile::new(0), None);
    /// assert_eq!(Tile::new(1), None);
    /// assert_eq!(Tile::new(6), None);
    /// ```
    pub fn new(value: u32) -> Option<Self> {
        if value < 2 || !value.is_power_of_two() {
            return None;
        }
        Some(Self {
            exponent: value.trailing_zeros() as u8,
        })
    }

    #[inline(always)]
    pub fn value(&self) -> u32 {
        1u32 << self.exponent
    }

    /// Merge two tiles, producing the doubled tile.
    ///
    /// Only equal tiles merge, and a tile at [`MAX_EXPONENT`] never does.
    #[inline]
    pub fn merge(self, other: Tile) -> Option<Tile> {
        if self == other && self.exponent < MAX_EXPONENT {
            Some(Tile {
                exponent: self.exponent + 1,
            })
        } else {
            None
        }
    }

    /// True if `self` and `other` would merge when they meet on a line.
    #[inline]
    pub fn can_merge(self, other: Tile) -> bool {
        self.merge(other).is_some()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding a tile
pub type Cell = Option<Tile>;

/// Errors raised when building a grid from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// The game grid - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a grid from raw face values, 0 meaning empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows([
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 2048],
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.tile_count(), 3);
    ///
    /// assert!(Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut cells = [None; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let tile = Tile::new(value).ok_or(GridError::InvalidTile { row, col, value })?;
                cells[row * GRID_SIZE + col] = Some(tile);
            }
        }
        Ok(Self { cells })
    }

    /// Raw face values, 0 meaning empty.
    pub fn rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            let pos = Pos::from_index(i);
            out[pos.row as usize][pos.col as usize] = cell.map_or(0, |t| t.value());
        }
        out
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        if (pos.row as usize) >= GRID_SIZE || (pos.col as usize) >= GRID_SIZE {
            return None;
        }
        Some(self.cells[pos.index()])
    }

    /// Set cell at position. Only the engine and spawner write cells.
    #[inline(always)]
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// All empty positions in row-major order.
    ///
    /// Recomputed on every call; stack-only, no allocation.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Pos::from_index(i))
            .collect()
    }

    /// True if any horizontally or vertically adjacent pair of tiles would merge.
    ///
    /// Equal tiles at [`MAX_EXPONENT`] do not count as a pair.
    pub fn has_adjacent_equal_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let Some(tile) = self.cells[row * GRID_SIZE + col] else {
                    continue;
                };
                if col + 1 < GRID_SIZE {
                    if let Some(right) = self.cells[row * GRID_SIZE + col + 1] {
                        if tile.can_merge(right) {
                            return true;
                        }
                    }
                }
                if row + 1 < GRID_SIZE {
                    if let Some(below) = self.cells[(row + 1) * GRID_SIZE + col] {
                        if tile.can_merge(below) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|t| t.value() as u64).sum()
    }

    /// Largest tile on the grid, if any
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in values.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(value: u32) -> Tile {
        Tile::new(value).unwrap()
    }

    #[test]
    fn test_tile_exponent_encoding() {
        assert_eq!(tile(2).exponent, 1);
        assert_eq!(tile(2048).exponent, 11);
        assert_eq!(tile(1 << 31).exponent, MAX_EXPONENT);
        assert_eq!(tile(1 << 31).value(), 1 << 31);
    }

    #[test]
    fn test_tile_merge_rules() {
        assert_eq!(tile(2).merge(tile(2)), Some(tile(4)));
        assert_eq!(tile(2).merge(tile(4)), None);
        assert_eq!(tile(1 << 30).merge(tile(1 << 30)), Some(tile(1 << 31)));

        let top = tile(1 << 31);
        assert!(!top.can_merge(top));
    }

    #[test]
    fn test_top_tiles_are_not_a_pair() {
        let top = 1u32 << 31;
        let grid = Grid::from_rows([[top, top, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert!(!grid.has_adjacent_equal_pair());

        let below = 1u32 << 30;
        let grid = Grid::from_rows([[below, below, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert!(grid.has_adjacent_equal_pair());
    }

    #[test]
    fn test_grid_flat_layout() {
        let grid = Grid::from_rows([[0, 2, 0, 0], [0; 4], [0, 0, 0, 8], [0; 4]]).unwrap();
        assert_eq!(grid.cells[1], Some(tile(2)));
        assert_eq!(grid.cells[2 * GRID_SIZE + 3], Tile::new(8));
    }

    #[test]
    fn test_from_rows_reports_position() {
        let err = Grid::from_rows([[0; 4], [0, 0, 12, 0], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidTile {
                row: 1,
                col: 2,
                value: 12
            }
        );
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 0], [0, 2, 2, 2]]).unwrap();
        let empty: Vec<Pos> = grid.empty_cells().into_iter().collect();
        assert_eq!(empty, vec![Pos::new(1, 1), Pos::new(2, 3), Pos::new(3, 0)]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new();
        assert_eq!(grid.get(Pos::new(0, 0)), Some(None));
        assert_eq!(grid.get(Pos::new(4, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 4)), None);
    }

    #[test]
    fn test_display_renders_dots_for_empty() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 16]]).unwrap();
        let text = grid.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().trim_start().starts_with('2'));
        assert!(text.lines().last().unwrap().ends_with("16"));
    }
}
