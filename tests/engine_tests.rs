//! Move engine tests - compress/merge in all four directions

use tui_2048::core::{available_moves, can_move, slide, Grid};
use tui_2048::types::Direction;

fn grid(rows: [[u32; 4]; 4]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

fn single_row(row: [u32; 4]) -> Grid {
    grid([row, [0; 4], [0; 4], [0; 4]])
}

fn single_col(col: [u32; 4]) -> Grid {
    let mut rows = [[0u32; 4]; 4];
    for (r, &v) in col.iter().enumerate() {
        rows[r][0] = v;
    }
    grid(rows)
}

fn column(g: &Grid, c: usize) -> [u32; 4] {
    let rows = g.rows();
    [rows[0][c], rows[1][c], rows[2][c], rows[3][c]]
}

#[test]
fn test_four_equal_left_merges_pairwise() {
    let outcome = slide(&single_row([2, 2, 2, 2]), Direction::Left);
    assert_eq!(outcome.grid.rows()[0], [4, 4, 0, 0]);
    assert_eq!(outcome.score_delta, 8);
    assert!(outcome.changed);
}

#[test]
fn test_gapped_pair_right() {
    let outcome = slide(&single_row([0, 2, 0, 2]), Direction::Right);
    assert_eq!(outcome.grid.rows()[0], [0, 0, 0, 4]);
    assert_eq!(outcome.score_delta, 4);
}

#[test]
fn test_right_merges_from_the_right_edge() {
    // Nearest pair to the target edge merges first.
    let outcome = slide(&single_row([2, 2, 2, 0]), Direction::Right);
    assert_eq!(outcome.grid.rows()[0], [0, 0, 2, 4]);

    let outcome = slide(&single_row([2, 2, 2, 0]), Direction::Left);
    assert_eq!(outcome.grid.rows()[0], [4, 2, 0, 0]);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    let outcome = slide(&single_row([4, 2, 2, 0]), Direction::Left);
    assert_eq!(outcome.grid.rows()[0], [4, 4, 0, 0]);
    assert_eq!(outcome.score_delta, 4);

    let outcome = slide(&single_row([8, 4, 4, 8]), Direction::Right);
    assert_eq!(outcome.grid.rows()[0], [0, 8, 8, 8]);
}

#[test]
fn test_up_and_down_columns() {
    let g = single_col([2, 0, 2, 4]);

    let up = slide(&g, Direction::Up);
    assert_eq!(column(&up.grid, 0), [4, 4, 0, 0]);
    assert_eq!(up.score_delta, 4);

    let down = slide(&g, Direction::Down);
    assert_eq!(column(&down.grid, 0), [0, 0, 4, 4]);
    assert_eq!(down.score_delta, 4);
}

#[test]
fn test_down_merges_from_the_bottom_edge() {
    let outcome = slide(&single_col([2, 2, 2, 0]), Direction::Down);
    assert_eq!(column(&outcome.grid, 0), [0, 0, 2, 4]);
}

#[test]
fn test_unchanged_move_reports_not_changed() {
    let g = single_row([2, 4, 8, 16]);
    let outcome = slide(&g, Direction::Left);
    assert!(!outcome.changed);
    assert_eq!(outcome.grid, g);
    assert_eq!(outcome.score_delta, 0);
    assert!(!can_move(&g, Direction::Left));
    assert!(!can_move(&g, Direction::Right));
    assert!(can_move(&g, Direction::Down));
}

#[test]
fn test_lines_are_independent() {
    let g = grid([[2, 2, 0, 0], [0, 4, 0, 4], [8, 0, 8, 8], [2, 4, 8, 16]]);
    let outcome = slide(&g, Direction::Left);
    assert_eq!(
        outcome.grid.rows(),
        [[4, 0, 0, 0], [8, 0, 0, 0], [16, 8, 0, 0], [2, 4, 8, 16]]
    );
    assert_eq!(outcome.score_delta, 4 + 8 + 16);
}

#[test]
fn test_goal_tile_flag() {
    let g = single_row([1024, 1024, 0, 0]);
    let outcome = slide(&g, Direction::Right);
    assert!(outcome.produced_goal);
    assert_eq!(outcome.grid.rows()[0], [0, 0, 0, 2048]);

    let g = single_row([512, 512, 0, 0]);
    assert!(!slide(&g, Direction::Right).produced_goal);
}

#[test]
fn test_value_conservation_on_mixed_grid() {
    let g = grid([[2, 2, 4, 4], [8, 0, 8, 2], [0, 16, 16, 16], [4, 0, 0, 4]]);
    for d in Direction::ALL {
        let outcome = slide(&g, d);
        assert_eq!(outcome.grid.tile_sum(), g.tile_sum(), "{:?}", d);
    }
}

#[test]
fn test_slide_does_not_touch_input() {
    let g = single_row([2, 2, 0, 0]);
    let before = g;
    let _ = slide(&g, Direction::Left);
    assert_eq!(g, before);
}

#[test]
fn test_available_moves_empty_on_terminal_grid() {
    let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(available_moves(&g).is_empty());
}
