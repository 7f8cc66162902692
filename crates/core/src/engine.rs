//! Move engine - directional compress/merge
//!
//! Every direction runs the same line routine. A direction only decides which
//! four cells make up each line and in which order they are read: the first
//! position of a line is the cell touching the target edge.
//!
//! Per line:
//! 1. Extract the tiles nearest-to-farthest from the target edge.
//! 2. Merge pass: equal neighbours combine once; the merged tile is not
//!    compared again within the same move.
//! 3. Pad with empties at the far end.
//! 4. Write back through the same positions.

use arrayvec::ArrayVec;

use crate::grid::{Grid, Tile};
use crate::types::{Direction, Pos, GOAL_VALUE, GRID_SIZE};

/// Result of sliding a grid in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The grid after compress/merge (no spawn applied)
    pub grid: Grid,
    /// Sum of every tile produced by a merge this move
    pub score_delta: u64,
    /// True iff any cell differs from the input grid
    pub changed: bool,
    /// True if some merge produced the goal tile
    pub produced_goal: bool,
}

impl MoveOutcome {
    /// Whether this move reaches the goal for a session that may already have reached it.
    pub fn reached_goal_this_move(&self, already_reached: bool) -> bool {
        self.produced_goal && !already_reached
    }
}

/// Merge result for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMerge {
    /// Tiles after merging, nearest-to-farthest from the target edge
    pub tiles: ArrayVec<Tile, GRID_SIZE>,
    pub score_delta: u64,
    pub produced_goal: bool,
}

/// Ordered positions of line `line` for `direction`, target edge first.
#[inline]
pub fn line_positions(direction: Direction, line: usize) -> [Pos; GRID_SIZE] {
    let fixed = line as u8;
    let last = (GRID_SIZE - 1) as u8;
    let mut out = [Pos::new(0, 0); GRID_SIZE];
    for (i, slot) in out.iter_mut().enumerate() {
        let step = i as u8;
        *slot = match direction {
            Direction::Left => Pos::new(fixed, step),
            Direction::Right => Pos::new(fixed, last - step),
            Direction::Up => Pos::new(step, fixed),
            Direction::Down => Pos::new(last - step, fixed),
        };
    }
    out
}

/// Single merge pass over tiles already ordered from the target edge outward.
pub fn merge_line(tiles: &[Tile]) -> LineMerge {
    let mut out = ArrayVec::new();
    let mut score_delta = 0u64;
    let mut produced_goal = false;

    let mut i = 0;
    while i < tiles.len() {
        let merged = tiles
            .get(i + 1)
            .and_then(|&next| tiles[i].merge(next));
        match merged {
            Some(tile) => {
                score_delta += tile.value() as u64;
                produced_goal |= tile.value() == GOAL_VALUE;
                out.push(tile);
                // Skip the partner; the merged tile is not re-examined.
                i += 2;
            }
            None => {
                out.push(tiles[i]);
                i += 1;
            }
        }
    }

    LineMerge {
        tiles: out,
        score_delta,
        produced_goal,
    }
}

/// Slide every line of `grid` toward the `direction` edge.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{slide, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let outcome = slide(&grid, Direction::Left);
/// assert_eq!(outcome.grid.rows()[0], [4, 4, 0, 0]);
/// assert_eq!(outcome.score_delta, 8);
/// assert!(outcome.changed);
/// ```
pub fn slide(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = Grid::new();
    let mut score_delta = 0u64;
    let mut produced_goal = false;

    for line in 0..GRID_SIZE {
        let positions = line_positions(direction, line);

        let extracted: ArrayVec<Tile, GRID_SIZE> = positions
            .iter()
            .filter_map(|&pos| grid.cells()[pos.index()])
            .collect();

        let merged = merge_line(&extracted);
        score_delta += merged.score_delta;
        produced_goal |= merged.produced_goal;

        // `next` starts empty, so unwritten positions are the padding.
        for (&pos, &tile) in positions.iter().zip(merged.tiles.iter()) {
            next.set(pos, Some(tile));
        }
    }

    MoveOutcome {
        changed: next != *grid,
        grid: next,
        score_delta,
        produced_goal,
    }
}

/// True if sliding toward `direction` would change the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    slide(grid, direction).changed
}

/// Directions that would change the grid, in [`Direction::ALL`] order.
pub fn available_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(grid, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(values: &[u32]) -> Vec<Tile> {
        values.iter().map(|&v| Tile::new(v).unwrap()).collect()
    }

    fn values(merge: &LineMerge) -> Vec<u32> {
        merge.tiles.iter().map(|t| t.value()).collect()
    }

    #[test]
    fn test_line_positions_start_at_target_edge() {
        assert_eq!(line_positions(Direction::Left, 2)[0], Pos::new(2, 0));
        assert_eq!(line_positions(Direction::Right, 2)[0], Pos::new(2, 3));
        assert_eq!(line_positions(Direction::Up, 1)[0], Pos::new(0, 1));
        assert_eq!(line_positions(Direction::Down, 1)[0], Pos::new(3, 1));
        assert_eq!(line_positions(Direction::Down, 1)[3], Pos::new(0, 1));
    }

    #[test]
    fn test_line_positions_cover_grid_once_per_direction() {
        for d in Direction::ALL {
            let mut seen = [false; GRID_SIZE * GRID_SIZE];
            for line in 0..GRID_SIZE {
                for pos in line_positions(d, line) {
                    assert!(!seen[pos.index()], "{:?} visits {:?} twice", d, pos);
                    seen[pos.index()] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_merge_line_merge_once() {
        let m = merge_line(&tiles(&[2, 2, 2, 2]));
        assert_eq!(values(&m), vec![4, 4]);
        assert_eq!(m.score_delta, 8);

        let m = merge_line(&tiles(&[4, 4, 8]));
        assert_eq!(values(&m), vec![8, 8]);
        assert_eq!(m.score_delta, 8);
    }

    #[test]
    fn test_merge_line_odd_run_keeps_trailing_tile() {
        let m = merge_line(&tiles(&[2, 2, 2]));
        assert_eq!(values(&m), vec![4, 2]);
    }

    #[test]
    fn test_merge_line_no_pairs() {
        let m = merge_line(&tiles(&[2, 4, 2, 4]));
        assert_eq!(values(&m), vec![2, 4, 2, 4]);
        assert_eq!(m.score_delta, 0);
        assert!(merge_line(&[]).tiles.is_empty());
    }

    #[test]
    fn test_merge_line_reports_goal() {
        let m = merge_line(&tiles(&[1024, 1024]));
        assert!(m.produced_goal);
        assert_eq!(m.score_delta, 2048);

        let m = merge_line(&tiles(&[2048, 2048]));
        assert!(!m.produced_goal);
    }

    #[test]
    fn test_reached_goal_this_move_respects_sticky_flag() {
        let grid = Grid::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let outcome = slide(&grid, Direction::Left);
        assert!(outcome.reached_goal_this_move(false));
        assert!(!outcome.reached_goal_this_move(true));
    }

    #[test]
    fn test_available_moves_on_corner_tile() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let moves = available_moves(&grid);
        assert_eq!(moves.as_slice(), &[Direction::Down, Direction::Right]);
    }
}
