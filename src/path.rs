use crate::grid::{Grid, Position};
use crate::search_state::SearchState;

/// Walks predecessor links back from `goal` and returns the start-to-goal path.
///
/// The root has no predecessor, so it ends the walk and is included in the result.
pub fn reconstruct_path(grid: &Grid, state: &SearchState, goal: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(index) = current {
        path.push(grid.position(index));
        current = state.predecessor(index);
        // A chain longer than the grid means a cycle slipped in.
        debug_assert!(path.len() <= grid.len());
    }
    path.reverse();
    path
}

/// Whether `path` is a walkable sequence of open, orthogonally adjacent cells.
pub fn is_valid_path(grid: &Grid, path: &[Position]) -> bool {
    path.iter()
        .all(|&pos| grid.contains(pos) && !grid.is_wall(pos))
        && path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
}
