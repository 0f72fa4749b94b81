//! Read-only state snapshot consumed by render layers
//!
//! A snapshot is a plain value copy: the UI can hold it across frames
//! without touching the live session. With the `serde` feature enabled
//! it also serializes, so front ends can ship state across a process
//! boundary without the engine owning any I/O.

use crate::types::{Cell, Coord};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Grid side length
    pub size: usize,
    /// Cells in row-major order (`size * size` entries)
    pub cells: Vec<Cell>,
    pub score: u32,
    pub level: u32,
    pub time_remaining: u32,
    /// First tile of an in-progress pair selection
    pub pending: Option<Coord>,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cells regrouped into rows for display code
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }
}
