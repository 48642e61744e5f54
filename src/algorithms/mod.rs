pub mod a_star;
mod best_first;
pub mod bfs;
pub mod common;
pub mod dfs;
pub mod taylor;

use crate::error::{PathfindingError, Result};
use crate::grid::{Grid, Position};
use common::{PathfindingAlgorithm, SearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "taylor")]
    Taylor,
    #[serde(rename = "bfs")]
    Bfs,
    #[serde(rename = "dfs")]
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::Taylor,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::Taylor => "taylor",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Resolves a request's algorithm name, falling back to A* for anything unknown.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown algorithm '{}', falling back to astar", name);
            Algorithm::AStar
        })
    }

    /// Whether the strategy always returns a shortest path.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::AStar | Algorithm::Bfs)
    }

    fn strategy(&self) -> &'static dyn PathfindingAlgorithm {
        match self {
            Algorithm::AStar => &a_star::AStar,
            Algorithm::Taylor => &taylor::Taylor,
            Algorithm::Bfs => &bfs::Bfs,
            Algorithm::Dfs => &dfs::Dfs,
        }
    }
}

impl PathfindingAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn run(&self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        log::debug!(
            "Running {} on {}x{} grid from {:?} to {:?}",
            self,
            grid.cols(),
            grid.rows(),
            start,
            goal
        );
        let result = self.strategy().run(grid, start, goal)?;
        log::debug!(
            "{} finished: visited {} cells, path length {:?}",
            self,
            result.visited_order.len(),
            result.path_len()
        );
        Ok(result)
    }
}

impl FromStr for Algorithm {
    type Err = PathfindingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "astar" => Ok(Algorithm::AStar),
            "taylor" => Ok(Algorithm::Taylor),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(PathfindingError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
