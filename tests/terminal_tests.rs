//! Terminal detection - exhaustive check over small full grids

use tui_2048::core::{available_moves, is_terminal, Grid};

/// Full grid whose cell `i` is 4 when bit `i` of `mask` is set, 2 otherwise.
fn two_four_grid(mask: u16) -> Grid {
    let mut rows = [[0u32; 4]; 4];
    for i in 0..16 {
        rows[i / 4][i % 4] = if mask & (1 << i) != 0 { 4 } else { 2 };
    }
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_only_checkerboards_are_terminal() {
    let mut terminal = Vec::new();
    for mask in 0..=u16::MAX {
        let grid = two_four_grid(mask);
        assert!(grid.is_full());
        let stuck = is_terminal(&grid);
        assert_eq!(stuck, available_moves(&grid).is_empty(), "mask {:#06x}", mask);
        if stuck {
            terminal.push(grid.rows());
        }
    }

    assert_eq!(terminal.len(), 2);
    for rows in terminal {
        for r in 0..4 {
            for c in 0..4 {
                if c + 1 < 4 {
                    assert_ne!(rows[r][c], rows[r][c + 1]);
                }
                if r + 1 < 4 {
                    assert_ne!(rows[r][c], rows[r + 1][c]);
                }
            }
        }
    }
}

#[test]
fn test_grid_with_empty_cell_is_never_terminal() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]];
    let grid = Grid::from_rows(rows).unwrap();
    assert!(!is_terminal(&grid));
    assert!(!available_moves(&grid).is_empty());
}

#[test]
fn test_empty_grid_is_not_terminal() {
    assert!(!is_terminal(&Grid::new()));
}
