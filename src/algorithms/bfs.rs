use crate::algorithms::common::{PathfindingAlgorithm, SearchResult};
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::path::reconstruct_path;
use crate::search_state::SearchState;
use std::collections::VecDeque;

/// Breadth-first search. Returns a path with the fewest moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl PathfindingAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn run(&self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        let start_idx = grid.index_of(start)?;
        let goal_idx = grid.index_of(goal)?;

        let mut state = SearchState::new(grid);
        let mut queue = VecDeque::from([start_idx]);
        let mut visited_order = Vec::new();
        state.set_root(start_idx, 0.0);

        while let Some(current) = queue.pop_front() {
            state.finalize(current);
            visited_order.push(grid.position(current));

            if current == goal_idx {
                return Ok(SearchResult {
                    path: reconstruct_path(grid, &state, current),
                    visited_order,
                });
            }

            let next_distance = state.distance(current) + 1;
            for neighbor in grid.neighbors(current) {
                // Discovery, not expansion, fixes the parent.
                if !state.is_discovered(neighbor) {
                    state.relax(neighbor, current, next_distance, next_distance as f64);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(SearchResult {
            path: Vec::new(),
            visited_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn open_three_by_three_prefers_right_then_down() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        let result = Bfs.run(&grid, p(0, 0), p(2, 2)).unwrap();
        assert_eq!(result.path, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
        assert_eq!(
            result.visited_order,
            vec![
                p(0, 0),
                p(1, 0),
                p(0, 1),
                p(2, 0),
                p(1, 1),
                p(0, 2),
                p(2, 1),
                p(1, 2),
                p(2, 2),
            ]
        );
    }

    #[test]
    fn routes_around_walls_with_fewest_moves() {
        let grid = Grid::parse(
            "
            .#...
            .#.#.
            ...#.
            ",
        )
        .unwrap();
        let result = Bfs.run(&grid, p(0, 0), p(4, 0)).unwrap();
        assert_eq!(result.path_len(), Some(8));
    }

    #[test]
    fn exhausts_reachable_region_when_blocked() {
        let grid = Grid::parse("...\n###\n...").unwrap();
        let result = Bfs.run(&grid, p(0, 0), p(2, 2)).unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.visited_order, vec![p(0, 0), p(1, 0), p(2, 0)]);
    }

    #[test]
    fn out_of_bounds_goal_is_an_error() {
        let grid = Grid::parse("..").unwrap();
        assert!(Bfs.run(&grid, p(0, 0), p(5, 0)).is_err());
    }
}
