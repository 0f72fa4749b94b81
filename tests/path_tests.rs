//! Connectivity search tests - corridor rule, symmetry, determinism

use onet_engine::core::{find_path, Grid};
use onet_engine::types::{Cell, Coord};

/// 6x6 board with a handful of occupied cells and plenty of empty space
fn playground() -> Grid {
    let mut rows: Vec<Vec<Cell>> = vec![vec![None; 6]; 6];
    rows[0][0] = Some(1);
    rows[0][5] = Some(1);
    rows[2][2] = Some(2);
    rows[2][3] = Some(2);
    rows[3][2] = Some(3);
    rows[5][0] = Some(3);
    rows[4][4] = Some(4);
    Grid::from_rows(rows)
}

#[test]
fn test_path_endpoints_and_empty_interior() {
    let grid = playground();
    let path = find_path(&grid, Coord::new(0, 0), Coord::new(0, 5)).unwrap();

    assert_eq!(path.first(), Some(&Coord::new(0, 0)));
    assert_eq!(path.last(), Some(&Coord::new(0, 5)));
    for coord in &path[1..path.len() - 1] {
        assert!(grid.is_empty_at(*coord), "interior cell {coord:?} not empty");
    }
    for pair in path.windows(2) {
        let dr = pair[0].row.abs_diff(pair[1].row);
        let dc = pair[0].col.abs_diff(pair[1].col);
        assert_eq!(dr + dc, 1, "non-orthogonal step {pair:?}");
    }
}

#[test]
fn test_connectivity_is_symmetric_for_all_occupied_pairs() {
    let grid = playground();
    let occupied: Vec<Coord> = grid.coords().filter(|&c| grid.is_occupied(c)).collect();

    for &a in &occupied {
        for &b in &occupied {
            if a == b {
                continue;
            }
            let forward = find_path(&grid, a, b);
            let backward = find_path(&grid, b, a);
            assert_eq!(
                forward.is_some(),
                backward.is_some(),
                "symmetry broken between {a:?} and {b:?}"
            );
            if let (Some(f), Some(r)) = (forward, backward) {
                assert_eq!(f.len(), r.len());
            }
        }
    }
}

#[test]
fn test_bfs_returns_shortest_hop_count() {
    let grid = playground();
    // (2,2) to (3,2) are vertically adjacent
    let path = find_path(&grid, Coord::new(2, 2), Coord::new(3, 2)).unwrap();
    assert_eq!(path.len(), 2);

    // (2,2) to (2,3) horizontally adjacent
    let path = find_path(&grid, Coord::new(2, 2), Coord::new(2, 3)).unwrap();
    assert_eq!(path.len(), 2);
}

#[test]
fn test_unbounded_bend_count_is_allowed() {
    // Corridor that needs more than two turns: a spiral of occupied
    // cells forcing the path to wind. Classic Onet would reject this;
    // this engine's rule only requires an empty corridor.
    let mut rows: Vec<Vec<Cell>> = vec![vec![None; 6]; 6];
    rows[0][0] = Some(7);
    rows[4][3] = Some(7);
    // Wall across row 1 with a gap at the right edge, wall across row 3
    // with a gap at the left edge: the corridor has to snake.
    for col in 0..5 {
        rows[1][col] = Some(9);
    }
    for col in 1..6 {
        rows[3][col] = Some(8);
    }
    let grid = Grid::from_rows(rows);

    let path = find_path(&grid, Coord::new(0, 0), Coord::new(4, 3)).unwrap();
    let mut bends = 0;
    for window in path.windows(3) {
        let first = (
            window[1].row as isize - window[0].row as isize,
            window[1].col as isize - window[0].col as isize,
        );
        let second = (
            window[2].row as isize - window[1].row as isize,
            window[2].col as isize - window[1].col as isize,
        );
        if first != second {
            bends += 1;
        }
    }
    assert!(bends > 2, "expected a winding path, got {bends} bends");
}

#[test]
fn test_fully_walled_cell_is_unreachable() {
    let mut rows: Vec<Vec<Cell>> = vec![vec![None; 4]; 4];
    rows[0][0] = Some(6);
    rows[2][2] = Some(6);
    // Box in (2,2) completely
    rows[1][2] = Some(9);
    rows[3][2] = Some(9);
    rows[2][1] = Some(9);
    rows[2][3] = Some(9);
    let grid = Grid::from_rows(rows);

    assert!(find_path(&grid, Coord::new(0, 0), Coord::new(2, 2)).is_none());
}
