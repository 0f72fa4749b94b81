//! Grid module - the square tile matrix
//!
//! A cell is either empty or holds an icon id. Dense row-major storage;
//! the original's array-backed and map-backed variants behave identically,
//! so only one representation survives here. Callers go through
//! `get`/`set`/`size`, which keeps the backing store an implementation
//! detail.

use crate::types::{Cell, Coord};

/// Square grid of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid with the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Flat index for a coordinate, or None when out of bounds
    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        Some(coord.row * self.size + coord.col)
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Get cell at `coord`.
    /// Returns None if out of bounds, Some(None) for an in-bounds empty cell.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell at `coord`.
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if `coord` is within bounds and empty
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(None))
    }

    /// Check if `coord` is within bounds and holds an icon
    pub fn is_occupied(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Some(_)))
    }

    /// True when every cell is empty (level complete)
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of cells currently holding an icon
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate all coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Build a grid from rows of cells. Intended for tests and tooling.
    ///
    /// Panics if the rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size), "rows must be square");

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            cells.extend(row);
        }
        Self { size, cells }
    }

    /// Convert to rows of cells for assertions and display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size)
            .map(|row| {
                let start = row * self.size;
                self.cells[start..start + self.size].to_vec()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(4);
        assert_eq!(grid.index(Coord::new(0, 0)), Some(0));
        assert_eq!(grid.index(Coord::new(0, 3)), Some(3));
        assert_eq!(grid.index(Coord::new(1, 0)), Some(4));
        assert_eq!(grid.index(Coord::new(3, 3)), Some(15));
        assert_eq!(grid.index(Coord::new(4, 0)), None);
        assert_eq!(grid.index(Coord::new(0, 4)), None);
    }

    #[test]
    fn test_grid_set_and_get() {
        let mut grid = Grid::new(4);

        assert!(grid.set(Coord::new(1, 2), Some(7)));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(Some(7)));

        assert!(grid.set(Coord::new(1, 2), None));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(None));

        // Out of bounds
        assert!(!grid.set(Coord::new(4, 0), Some(0)));
        assert_eq!(grid.get(Coord::new(4, 0)), None);
    }

    #[test]
    fn test_grid_cleared_and_occupied_count() {
        let mut grid = Grid::new(2);
        assert!(grid.is_cleared());
        assert_eq!(grid.occupied_count(), 0);

        grid.set(Coord::new(0, 0), Some(3));
        grid.set(Coord::new(1, 1), Some(3));
        assert!(!grid.is_cleared());
        assert_eq!(grid.occupied_count(), 2);

        grid.set(Coord::new(0, 0), None);
        grid.set(Coord::new(1, 1), None);
        assert!(grid.is_cleared());
    }

    #[test]
    fn test_grid_from_rows_roundtrip() {
        let rows = vec![
            vec![Some(0), None],
            vec![None, Some(1)],
        ];
        let grid = Grid::from_rows(rows.clone());

        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Some(0)));
        assert_eq!(grid.get(Coord::new(1, 0)), Some(None));
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_grid_coords_row_major() {
        let grid = Grid::new(2);
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
    }
}
