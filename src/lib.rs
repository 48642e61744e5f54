//! Grid pathfinding over 2-D occupancy maps.
//!
//! Four interchangeable strategies share one interface,
//! [`PathfindingAlgorithm::run`]:
//!
//! - **BFS**: fewest moves, explores in rings.
//! - **DFS**: follows one branch to the end before backtracking.
//! - **A\***: `g + manhattan`, always a shortest path.
//! - **Taylor**: `g + euclidean + manhattan / 2`; greedier than A* and not
//!   guaranteed shortest.
//!
//! Every search returns the path and the order in which cells were visited,
//! which callers replay to animate the search.
//!
//! Neighbors are always considered Right, Down, Left, Up. A* and Taylor break
//! priority ties by lowest `y`, then lowest `x`, so identical inputs always
//! produce identical output.
//!
//! ```
//! use grid_pathfinder::{search, Algorithm, Grid, Position};
//!
//! let grid = Grid::parse("...\n.#.\n...").unwrap();
//! let result = search(&grid, Position::new(0, 0), Position::new(2, 2), Algorithm::Bfs).unwrap();
//! assert_eq!(result.path.len(), 5);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heuristics;
pub mod path;
pub mod request;
pub mod search_state;
pub mod statistics;

pub use algorithms::common::{PathfindingAlgorithm, SearchResult};
pub use algorithms::Algorithm;
pub use error::{PathfindingError, Result};
pub use grid::{Cell, Grid, Position};

/// Runs `algorithm` on `grid` from `start` to `end`.
///
/// Each call owns its own search state, so a single `Grid` may be searched
/// repeatedly or from several threads at once.
pub fn search(grid: &Grid, start: Position, end: Position, algorithm: Algorithm) -> Result<SearchResult> {
    algorithm.run(grid, start, end)
}
