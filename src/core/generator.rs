//! Board generator - shuffled paired layouts
//!
//! Every board is built from whole pairs, so each icon id present always
//! has even multiplicity. Removal takes two cells of the same id at a
//! time, which preserves the invariant for the life of the board.

use log::debug;

use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::types::{GameError, IconId};

/// Generate a freshly shuffled board.
///
/// Builds `size^2 / 2` pairs cycling through `0..icon_count` (wrapping
/// when there are more pairs than icons), shuffles all values uniformly,
/// and assigns them row-major. No cell is left empty.
pub fn generate(size: usize, icon_count: u16, rng: &mut SimpleRng) -> Result<Grid, GameError> {
    if icon_count < 1 {
        return Err(GameError::InvalidConfig {
            reason: "icon_count must be >= 1",
        });
    }
    if size < 2 || size % 2 != 0 {
        return Err(GameError::InvalidConfig {
            reason: "grid size must be even and >= 2",
        });
    }

    let pair_count = size * size / 2;
    let mut values: Vec<IconId> = Vec::with_capacity(size * size);
    for i in 0..pair_count {
        let id = (i % icon_count as usize) as IconId;
        values.push(id);
        values.push(id);
    }

    rng.shuffle(&mut values);

    let mut grid = Grid::new(size);
    for (coord, value) in grid.coords().collect::<Vec<_>>().into_iter().zip(values) {
        grid.set(coord, Some(value));
    }

    debug!("generated {size}x{size} board with {pair_count} pairs");
    Ok(grid)
}

/// Permute the icons of currently occupied cells in place.
///
/// Collects occupied values row-major, shuffles them, and writes them
/// back into the same occupied coordinates. Which cells are empty never
/// changes, so the even-multiplicity invariant survives.
pub fn shuffle_occupied(grid: &mut Grid, rng: &mut SimpleRng) {
    let targets: Vec<_> = grid.coords().filter(|&c| grid.is_occupied(c)).collect();

    let mut values: Vec<IconId> = targets
        .iter()
        .filter_map(|&c| grid.get(c).flatten())
        .collect();

    rng.shuffle(&mut values);

    for (coord, value) in targets.into_iter().zip(values) {
        grid.set(coord, Some(value));
    }
}
