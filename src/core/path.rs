//! Connectivity search - BFS over empty cells
//!
//! Two occupied cells connect when an orthogonal corridor of empty cells
//! joins them; the endpoints themselves are traversable regardless of
//! occupancy. BFS returns the shortest such path in hop count. There is
//! deliberately no bend limit (looser than the classic two-bend rule);
//! that matches the original game and is a product decision, not a bug.

use std::collections::VecDeque;

use crate::core::grid::Grid;
use crate::types::Coord;

/// Neighbor order {+row, -row, +col, -col}; fixed so equal-length paths
/// tie-break the same way on every run.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Find the shortest empty-corridor path from `start` to `end`.
///
/// Returns the full coordinate sequence including both endpoints, or
/// None when no corridor exists. `start == end` and out-of-bounds
/// coordinates also yield None; callers validate selections before
/// asking for a path.
pub fn find_path(grid: &Grid, start: Coord, end: Coord) -> Option<Vec<Coord>> {
    if start == end || !grid.in_bounds(start) || !grid.in_bounds(end) {
        return None;
    }

    let size = grid.size();
    let flat = |c: Coord| c.row * size + c.col;

    let mut visited = vec![false; size * size];
    let mut prev: Vec<Option<Coord>> = vec![None; size * size];
    let mut queue = VecDeque::new();

    visited[flat(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Some(reconstruct(&prev, size, end));
        }

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let row = current.row as isize + dr;
            let col = current.col as isize + dc;
            if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
                continue;
            }
            let next = Coord::new(row as usize, col as usize);

            // Corridor cells must be empty; the far endpoint is always fair game.
            if visited[flat(next)] || !(grid.is_empty_at(next) || next == end) {
                continue;
            }
            visited[flat(next)] = true;
            prev[flat(next)] = Some(current);
            queue.push_back(next);
        }
    }

    None
}

/// Walk the predecessor chain back from `end` and reverse it
fn reconstruct(prev: &[Option<Coord>], size: usize, end: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut at = Some(end);
    while let Some(coord) = at {
        path.push(coord);
        at = prev[coord.row * size + coord.col];
    }
    path.reverse();
    path
}
