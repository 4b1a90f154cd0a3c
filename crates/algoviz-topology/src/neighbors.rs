//! 4-connected neighbor computation.
//!
//! Neighbors are always produced in the fixed order down, up, right, left.
//! Breadth-first search discovers cells in this order, so changing it
//! changes every recorded step log.

use crate::CellCoord;

/// One of the four edge-sharing directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// All directions in neighbor order.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Row/column delta for this direction.
    pub const fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}

/// Neighbor lookup on a `size × size` grid.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors;

impl Neighbors {
    /// In-bounds neighbors of `coord`, in [`Direction::ALL`] order.
    pub fn of(coord: CellCoord, size: usize) -> impl Iterator<Item = CellCoord> {
        Direction::ALL.into_iter().filter_map(move |dir| {
            let (dr, dc) = dir.delta();
            coord.offset(dr, dc).filter(|n| n.within(size))
        })
    }
}

/// Check whether two cells are 4-adjacent.
pub fn are_neighbors(a: CellCoord, b: CellCoord) -> bool {
    a.is_adjacent(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn interior_cell_has_four_in_order() {
        let n: Vec<_> = Neighbors::of(CellCoord::new(1, 1), 3).collect();
        assert_eq!(
            n,
            vec![
                CellCoord::new(2, 1),
                CellCoord::new(0, 1),
                CellCoord::new(1, 2),
                CellCoord::new(1, 0),
            ]
        );
    }

    #[test]
    fn corners_have_two() {
        let top_left: Vec<_> = Neighbors::of(CellCoord::ORIGIN, 3).collect();
        assert_eq!(top_left, vec![CellCoord::new(1, 0), CellCoord::new(0, 1)]);

        let bottom_right: Vec<_> = Neighbors::of(CellCoord::new(2, 2), 3).collect();
        assert_eq!(bottom_right, vec![CellCoord::new(1, 2), CellCoord::new(2, 1)]);
    }

    #[test]
    fn single_cell_grid_has_none() {
        assert_eq!(Neighbors::of(CellCoord::ORIGIN, 1).count(), 0);
    }

    #[test]
    fn deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }

    proptest! {
        #[test]
        fn neighbors_stay_on_grid(size in 1usize..20, row in 0usize..20, col in 0usize..20) {
            let coord = CellCoord::new(row % size, col % size);
            let found: Vec<_> = Neighbors::of(coord, size).collect();
            prop_assert!(found.len() <= crate::MAX_NEIGHBORS);
            for n in found {
                prop_assert!(n.within(size));
                prop_assert!(are_neighbors(coord, n));
            }
        }
    }

    #[test]
    fn all_neighbors_are_adjacent() {
        let c = CellCoord::new(2, 3);
        for n in Neighbors::of(c, 5) {
            assert!(are_neighbors(c, n));
        }
    }
}
