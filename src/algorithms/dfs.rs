use crate::algorithms::common::{PathfindingAlgorithm, SearchResult};
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::path::reconstruct_path;
use crate::search_state::SearchState;

/// Depth-first search. Finds some path, not necessarily a short one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dfs;

impl Dfs {
    pub fn new() -> Self {
        Dfs
    }
}

impl PathfindingAlgorithm for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn run(&self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        let start_idx = grid.index_of(start)?;
        let goal_idx = grid.index_of(goal)?;

        let mut state = SearchState::new(grid);
        let mut stack = vec![start_idx];
        let mut visited_order = Vec::new();
        let mut neighbors = Vec::with_capacity(4);
        state.set_root(start_idx, 0.0);

        while let Some(current) = stack.pop() {
            // Cells can sit on the stack more than once; only the first pop counts.
            if state.is_finalized(current) {
                continue;
            }
            state.finalize(current);
            visited_order.push(grid.position(current));

            if current == goal_idx {
                return Ok(SearchResult {
                    path: reconstruct_path(grid, &state, current),
                    visited_order,
                });
            }

            neighbors.clear();
            neighbors.extend(grid.neighbors(current));
            // Push in reverse so Right is popped first.
            for &neighbor in neighbors.iter().rev() {
                if !state.is_finalized(neighbor) {
                    // The latest push is popped first, so it owns the parent link.
                    state.set_predecessor(neighbor, current);
                    stack.push(neighbor);
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
    use crate::path::is_valid_path;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn follows_right_branch_first() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        let result = Dfs.run(&grid, p(0, 0), p(2, 2)).unwrap();
        assert_eq!(result.path, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
        assert_eq!(result.visited_order, result.path);
    }

    #[test]
    fn takes_the_long_way_round() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        let result = Dfs.run(&grid, p(0, 0), p(0, 1)).unwrap();
        assert_eq!(
            result.path,
            vec![
                p(0, 0),
                p(1, 0),
                p(2, 0),
                p(2, 1),
                p(2, 2),
                p(1, 2),
                p(0, 2),
                p(0, 1),
            ]
        );
        assert_eq!(result.path_len(), Some(7));
        assert!(is_valid_path(&grid, &result.path));
    }

    #[test]
    fn stale_stack_entries_do_not_rewrite_parents() {
        let grid = Grid::parse(
            "
            ....
            .##.
            ....
            ",
        )
        .unwrap();
        let result = Dfs.run(&grid, p(0, 0), p(0, 2)).unwrap();
        assert!(is_valid_path(&grid, &result.path));
        assert_eq!(result.path.first(), Some(&p(0, 0)));
        assert_eq!(result.path.last(), Some(&p(0, 2)));
    }

    #[test]
    fn reports_visited_cells_when_blocked() {
        let grid = Grid::parse(".#.\n.#.\n.#.").unwrap();
        let result = Dfs.run(&grid, p(0, 0), p(2, 2)).unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.visited_order, vec![p(0, 0), p(0, 1), p(0, 2)]);
    }
}
