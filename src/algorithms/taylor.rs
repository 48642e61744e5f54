use crate::algorithms::best_first;
use crate::algorithms::common::{PathfindingAlgorithm, SearchResult};
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::heuristics::taylor;

/// Best-first search ordered by `g + taylor(cell, goal)`.
///
/// The heuristic overestimates, which pulls the search toward the goal
/// harder than A* does. Expect fewer expansions and, around obstacles,
/// paths that can be longer than the shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Taylor;

impl Taylor {
    pub fn new() -> Self {
        Taylor
    }
}

impl PathfindingAlgorithm for Taylor {
    fn name(&self) -> &'static str {
        "taylor"
    }

    fn run(&self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        best_first::search(grid, start, goal, taylor)
    }
}
