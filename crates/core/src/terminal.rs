//! Terminal detection - has the game run out of moves?

use crate::grid::Grid;

/// True iff the grid has no empty cell and no mergeable neighbours.
///
/// Must be evaluated after the post-move spawn: the spawned tile can take the
/// last free cell. Tiles at [`MAX_EXPONENT`](crate::grid::MAX_EXPONENT) never
/// merge, so a full grid whose only equal neighbours are 2^31 tiles is terminal,
/// matching an empty [`available_moves`](crate::engine::available_moves).
pub fn is_terminal(grid: &Grid) -> bool {
    grid.is_full() && !grid.has_adjacent_equal_pair()
}
