//! Breadth-first search step generation on a walled grid.
//!
//! # Event order
//!
//! 1. `Frontier(source)` at initialization.
//! 2. For each dequeued cell other than the destination: `Visit(cell)`, then
//!    one `Frontier` per newly discovered neighbor (down, up, right, left).
//! 3. Dequeuing the destination stops the search without a `Visit`.
//!    Discovering it does not.
//! 4. If the destination was reached, one `Path` per cell walking
//!    predecessors from destination back to source.
//!
//! The grid is only read. Callers must not edit it while a search runs.

use std::collections::VecDeque;

use algoviz_topology::{CellCoord, Grid, Neighbors};

use crate::error::{Endpoint, Error, Result};
use crate::step::{GridStep, StepLog};

/// Record a breadth-first search from `source` to `destination`.
///
/// Fails before recording anything if either endpoint is off the grid or on
/// a wall. An unreachable destination is not an error: the log simply has no
/// `Path` steps.
///
/// Logs from the earlier TypeScript visualizer put each `Visit` after the
/// cell's neighbor `Frontier` steps, so they differ in order from these.
pub fn bfs_steps(grid: &Grid, source: CellCoord, destination: CellCoord) -> Result<StepLog<GridStep>> {
    check_endpoint(grid, Endpoint::Source, source)?;
    check_endpoint(grid, Endpoint::Destination, destination)?;

    let size = grid.size();
    let mut steps = StepLog::new();
    let mut seen = vec![false; grid.cell_count()];
    let mut parent: Vec<Option<CellCoord>> = vec![None; grid.cell_count()];
    let mut queue = VecDeque::from([source]);

    seen[source.index(size)] = true;
    steps.push(GridStep::Frontier(source));

    while let Some(cell) = queue.pop_front() {
        if cell == destination {
            break;
        }
        steps.push(GridStep::Visit(cell));
        for next in Neighbors::of(cell, size) {
            let idx = next.index(size);
            if seen[idx] || grid.is_wall(next) {
                continue;
            }
            seen[idx] = true;
            parent[idx] = Some(cell);
            queue.push_back(next);
            steps.push(GridStep::Frontier(next));
        }
    }

    let reached = source == destination || parent[destination.index(size)].is_some();
    let mut path_len = 0;
    if reached {
        let mut cursor = Some(destination);
        while let Some(cell) = cursor {
            steps.push(GridStep::Path(cell));
            path_len += 1;
            cursor = parent[cell.index(size)];
        }
    }

    tracing::debug!(
        size,
        %source,
        %destination,
        steps = steps.len(),
        path_len,
        "bfs steps generated"
    );
    Ok(steps)
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, coord: CellCoord) -> Result<()> {
    if !grid.contains(coord) {
        tracing::warn!(%endpoint, %coord, "search endpoint off grid");
        return Err(Error::EndpointOutOfBounds {
            endpoint,
            coord,
            size: grid.size(),
        });
    }
    if grid.is_wall(coord) {
        tracing::warn!(%endpoint, %coord, "search endpoint on wall");
        return Err(Error::EndpointOnWall { endpoint, coord });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> CellCoord {
        CellCoord::new(row, col)
    }

    #[test]
    fn open_three_by_three() {
        let grid = Grid::open(3).unwrap();
        let log = bfs_steps(&grid, c(0, 0), c(2, 2)).unwrap();

        use GridStep::*;
        #[rustfmt::skip]
        let expected = vec![
            Frontier(c(0, 0)),
            Visit(c(0, 0)), Frontier(c(1, 0)), Frontier(c(0, 1)),
            Visit(c(1, 0)), Frontier(c(2, 0)), Frontier(c(1, 1)),
            Visit(c(0, 1)), Frontier(c(0, 2)),
            Visit(c(2, 0)), Frontier(c(2, 1)),
            Visit(c(1, 1)), Frontier(c(1, 2)),
            Visit(c(0, 2)),
            Visit(c(2, 1)), Frontier(c(2, 2)),
            Visit(c(1, 2)),
            // (2,2) dequeued: stop
            Path(c(2, 2)), Path(c(2, 1)), Path(c(2, 0)), Path(c(1, 0)), Path(c(0, 0)),
        ];
        assert_eq!(log.as_slice(), expected.as_slice());

        assert_eq!(log.discovered().len(), 9);
        let path = log.path();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&c(2, 2)));
        assert_eq!(path.last(), Some(&c(0, 0)));
        // Monotone staircase: each step moves up or left.
        for w in path.windows(2) {
            assert_eq!(w[0].manhattan(&c(0, 0)), w[1].manhattan(&c(0, 0)) + 1);
        }
    }

    #[test]
    fn all_cells_discovered_before_destination_dequeued() {
        let grid = Grid::open(3).unwrap();
        let log = bfs_steps(&grid, c(0, 0), c(2, 2)).unwrap();
        let first_path = log
            .iter()
            .position(|s| matches!(s, GridStep::Path(_)))
            .unwrap();
        let frontier_before = log.as_slice()[..first_path]
            .iter()
            .filter(|s| matches!(s, GridStep::Frontier(_)))
            .count();
        assert_eq!(frontier_before, 9);
        assert!(!log.iter().any(|s| *s == GridStep::Visit(c(2, 2))));
    }

    #[test]
    fn source_equals_destination() {
        let grid = Grid::open(4).unwrap();
        let log = bfs_steps(&grid, c(1, 2), c(1, 2)).unwrap();
        assert_eq!(
            log.as_slice(),
            &[GridStep::Frontier(c(1, 2)), GridStep::Path(c(1, 2))]
        );
    }

    #[test]
    fn walled_off_destination_has_no_path() {
        // Column 1 is a solid wall.
        let grid = Grid::from_fn(3, |coord| coord.col == 1).unwrap();
        let log = bfs_steps(&grid, c(0, 0), c(2, 2)).unwrap();
        assert!(log.path().is_empty());
        assert!(!log.found_path());
        assert_eq!(log.discovered().len(), 3);
        assert_eq!(log.visits(), 3);
    }

    #[test]
    fn path_routes_around_walls() {
        // . # .
        // . # .
        // . . .
        let grid = Grid::from_fn(3, |coord| coord.col == 1 && coord.row < 2).unwrap();
        let log = bfs_steps(&grid, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(
            log.path(),
            vec![c(0, 2), c(1, 2), c(2, 2), c(2, 1), c(2, 0), c(1, 0), c(0, 0)]
        );
    }

    #[test]
    fn walls_are_never_discovered() {
        let grid = Grid::from_fn(4, |coord| (coord.row + coord.col) % 3 == 1).unwrap();
        let log = bfs_steps(&grid, c(0, 0), c(3, 3)).unwrap();
        for coord in log.discovered() {
            assert!(grid.is_open(coord));
        }
    }

    #[test]
    fn frontier_once_and_visit_after_frontier() {
        let grid = Grid::open(5).unwrap();
        let log = bfs_steps(&grid, c(2, 2), c(4, 0)).unwrap();
        let mut frontier = std::collections::HashSet::new();
        for step in &log {
            match step {
                GridStep::Frontier(cell) => assert!(frontier.insert(*cell)),
                GridStep::Visit(cell) => assert!(frontier.contains(cell)),
                GridStep::Path(_) => {}
            }
        }
    }

    #[test]
    fn endpoint_validation() {
        let mut grid = Grid::open(3).unwrap();
        assert_eq!(
            bfs_steps(&grid, c(3, 0), c(2, 2)),
            Err(Error::EndpointOutOfBounds {
                endpoint: Endpoint::Source,
                coord: c(3, 0),
                size: 3,
            })
        );
        assert_eq!(
            bfs_steps(&grid, c(0, 0), c(0, 7)),
            Err(Error::EndpointOutOfBounds {
                endpoint: Endpoint::Destination,
                coord: c(0, 7),
                size: 3,
            })
        );

        grid.set_wall(c(2, 2), true).unwrap();
        assert_eq!(
            bfs_steps(&grid, c(0, 0), c(2, 2)),
            Err(Error::EndpointOnWall {
                endpoint: Endpoint::Destination,
                coord: c(2, 2),
            })
        );
    }

    #[test]
    fn decoded_grid_is_searchable_or_rejected() {
        assert!(serde_json::from_str::<Grid>(r#"{"size":3,"cells":[]}"#).is_err());

        let json = serde_json::to_string(&Grid::open(3).unwrap()).unwrap();
        let grid: Grid = serde_json::from_str(&json).unwrap();
        let log = bfs_steps(&grid, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(log.path().len(), 5);
    }

    #[test]
    fn grid_is_not_modified() {
        let grid = Grid::from_fn(4, |coord| coord == c(1, 1)).unwrap();
        let before = grid.clone();
        let _ = bfs_steps(&grid, c(0, 0), c(3, 3)).unwrap();
        assert_eq!(grid, before);
    }
}
