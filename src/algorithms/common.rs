use crate::error::Result;
use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Outcome of one search: the start-to-goal path (empty when the goal is
/// unreachable) and every cell in the order the search finalized it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: Vec<Position>,
    #[serde(rename = "visited")]
    pub visited_order: Vec<Position>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path length counted in moves, or `None` if no path was found.
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

pub trait PathfindingAlgorithm {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Searches `grid` from `start` to `goal`.
    ///
    /// Fails only when an endpoint lies outside the grid; an unreachable goal
    /// yields an empty path alongside the full visited trace.
    fn run(&self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult>;
}
