//! Reachability checks and solution paths for generated mazes.
//!
//! This module contains the post-condition checks the generator's best-effort contract asks
//! callers to perform: a flood fill over walkable cells and a depth-first search that recovers
//! the unique start-to-end path of a perfect maze. Both walk on explicit stacks, so maze size is
//! bounded by heap memory rather than call depth.

use std::collections::HashSet;

use crate::maze::{offset, CellState, Grid};

/// Single-cell moves between adjacent cells.
///
/// This constant holds the four orthogonal steps used when walking an already carved maze, as
/// opposed to the two-cell moves of the carving phase.
const STEP_MOVES: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Returns every cell reachable from the start marker.
///
/// This function flood fills the walkable cells of the grid starting at the [`CellState::Start`]
/// marker. An empty set is returned when the grid carries no start marker, which only happens for
/// degenerate grids too small to hold both markers.
pub fn reachable_from_start(grid: &Grid) -> HashSet<(usize, usize)> {
    let mut reached = HashSet::new();
    let Some(start) = grid.find(CellState::Start) else {
        return reached;
    };

    let _ = reached.insert(start);
    let mut frontier = vec![start];

    while let Some((x, y)) = frontier.pop() {
        for (step_x, step_y) in STEP_MOVES {
            let Some(next) = offset(x, y, step_x, step_y) else {
                continue;
            };
            if grid.is_walkable(next.0, next.1) && reached.insert(next) {
                frontier.push(next);
            }
        }
    }

    reached
}

/// Returns whether the end marker is reachable from the start marker.
///
/// This function is the solvability post-condition for generated grids: the generator forces the
/// end marker onto its corner cell even when carving never got there, and this check is how
/// callers detect that degenerate case.
pub fn is_solvable(grid: &Grid) -> bool {
    grid.find(CellState::End)
        .is_some_and(|end| reachable_from_start(grid).contains(&end))
}

/// Returns the path from the start marker to the end marker.
///
/// This function runs a depth-first search with backtracking: dead ends are popped off the path
/// until an unvisited neighbor is available. In a perfect maze the surviving path is the unique
/// simple path between the two markers, listed start first and end last. `None` is returned when
/// either marker is missing or the end is unreachable.
pub fn solution_path(grid: &Grid) -> Option<Vec<(usize, usize)>> {
    let start = grid.find(CellState::Start)?;
    let end = grid.find(CellState::End)?;

    let mut visited = HashSet::from([start]);
    let mut path = vec![start];

    'walk: while let Some(&(x, y)) = path.last() {
        if (x, y) == end {
            return Some(path);
        }

        for (step_x, step_y) in STEP_MOVES {
            let Some(next) = offset(x, y, step_x, step_y) else {
                continue;
            };
            if grid.is_walkable(next.0, next.1) && visited.insert(next) {
                path.push(next);
                continue 'walk;
            }
        }

        // Dead end: backtrack one cell.
        let _ = path.pop();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MazeGenerator;

    /// Builds a grid from legacy-encoded rows for hand-crafted cases.
    fn grid_from_rows(rows: &[&str]) -> Grid {
        let width = rows.first().map_or(0, |row| row.len());
        let mut grid = Grid::filled(width, rows.len());

        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                let state = match symbol {
                    '0' => CellState::Passage,
                    'S' => CellState::Start,
                    'E' => CellState::End,
                    _ => CellState::Wall,
                };
                grid.set(x, y, state);
            }
        }

        grid
    }

    #[test]
    fn test_flood_fill_covers_connected_corridor() {
        let grid = grid_from_rows(&[
            "11111",
            "1S001",
            "11101",
            "1E001",
            "11111",
        ]);

        let reached = reachable_from_start(&grid);

        assert_eq!(reached.len(), 7);
        assert!(reached.contains(&(1, 1)));
        assert!(reached.contains(&(3, 2)));
        assert!(reached.contains(&(1, 3)));
    }

    #[test]
    fn test_flood_fill_without_start_is_empty() {
        let grid = grid_from_rows(&["111", "101", "111"]);

        assert!(reachable_from_start(&grid).is_empty());
    }

    #[test]
    fn test_walled_off_end_is_not_solvable() {
        let grid = grid_from_rows(&[
            "11111",
            "1S011",
            "11111",
            "110E1",
            "11111",
        ]);

        assert!(!is_solvable(&grid));
        assert_eq!(solution_path(&grid), None);
    }

    #[test]
    fn test_solution_path_spans_markers_with_unit_steps() {
        let grid = grid_from_rows(&[
            "1111111",
            "1S10001",
            "1010101",
            "1000101",
            "1110101",
            "10001E1",
            "1111111",
        ]);

        let path = solution_path(&grid).expect("maze should be solvable");

        assert_eq!(path.first().copied(), Some((1, 1)));
        assert_eq!(path.last().copied(), Some((5, 5)));
        for pair in path.windows(2) {
            let [(from_x, from_y), (to_x, to_y)] = *pair else {
                panic!("windows(2) should yield pairs");
            };
            assert_eq!(
                from_x.abs_diff(to_x) + from_y.abs_diff(to_y),
                1,
                "non-adjacent step in solution path"
            );
        }
        for &(x, y) in &path {
            assert!(grid.is_walkable(x, y), "solution path crosses a wall at ({x}, {y})");
        }
    }

    #[test]
    fn test_solution_path_on_generated_maze() {
        let mut generator = MazeGenerator::new(Some(9));
        let grid = generator.generate(15, 15);

        let path = solution_path(&grid).expect("generated maze should be solvable");

        assert_eq!(path.first().copied(), grid.find(CellState::Start));
        assert_eq!(path.last().copied(), grid.find(CellState::End));
    }
}
