//! Random input generation for the generators.

use algoviz_topology::Grid;

use crate::error::{Error, Result};
use crate::rng::UnitSource;

/// Smallest value [`generate_array`] produces.
pub const MIN_ARRAY_VALUE: u32 = 5;

/// Largest value [`generate_array`] produces.
pub const MAX_ARRAY_VALUE: u32 = 105;

/// Build a `size × size` grid where each cell is a wall with probability `p`.
///
/// One draw is taken per cell in row-major order; a cell is a wall when its
/// draw is below `p`. The top-left and bottom-right corners are then forced
/// open, so with `p = 1.0` exactly those two cells are free.
pub fn generate_grid(size: usize, wall_probability: f64, rng: &mut impl UnitSource) -> Result<Grid> {
    if size == 0 {
        tracing::warn!(size, "rejected grid size");
        return Err(Error::InvalidSize(size));
    }
    if !(0.0..=1.0).contains(&wall_probability) {
        tracing::warn!(wall_probability, "rejected wall probability");
        return Err(Error::InvalidWallProbability(wall_probability));
    }

    let mut grid = Grid::from_fn(size, |_| rng.next_unit() < wall_probability)?;
    let (first, last) = (grid.top_left(), grid.bottom_right());
    grid.set_wall(first, false)?;
    grid.set_wall(last, false)?;

    tracing::debug!(size, walls = grid.wall_count(), "grid generated");
    Ok(grid)
}

/// Build `len` values in `5..=105`, one draw each: `round(draw * 100) + 5`.
pub fn generate_array(len: usize, rng: &mut impl UnitSource) -> Result<Vec<u32>> {
    if len == 0 {
        tracing::warn!(len, "rejected array length");
        return Err(Error::InvalidLength(len));
    }
    // draw < 1.0, so the rounded product never exceeds 100
    let values = (0..len)
        .map(|_| (rng.next_unit() * 100.0).round() as u32 + MIN_ARRAY_VALUE)
        .collect();
    Ok(values)
}
