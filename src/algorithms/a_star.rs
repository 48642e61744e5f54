use crate::algorithms::best_first;
use crate::algorithms::common::{PathfindingAlgorithm, SearchResult};
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::heuristics::manhattan;

/// A* search ordered by `g + manhattan(cell, goal)`.
///
/// Manhattan distance never overestimates on a 4-connected unit-cost grid,
/// so the returned path is always a shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* algorithm provider.
    pub fn new() -> Self {
        AStar
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn run(&self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        best_first::search(grid, start, goal, manhattan)
    }
}
