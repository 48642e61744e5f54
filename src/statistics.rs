use crate::algorithms::common::PathfindingAlgorithm;
use crate::algorithms::Algorithm;
use crate::error::Result;
use crate::grid::{Grid, Position};
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub path_length: Option<usize>,
    pub visited: usize,
    pub elapsed: Duration,
    pub optimal_path_length: Option<usize>,
}

impl AlgorithmResult {
    pub fn success(&self) -> bool {
        self.path_length.is_some()
    }

    /// Moves taken relative to the shortest possible route; 1.0 is optimal.
    pub fn route_efficiency(&self) -> f64 {
        match (self.path_length, self.optimal_path_length) {
            (Some(len), Some(optimal)) if optimal > 0 => len as f64 / optimal as f64,
            (Some(_), Some(_)) => 1.0,
            _ => 0.0,
        }
    }

    pub fn extra_moves(&self) -> usize {
        match (self.path_length, self.optimal_path_length) {
            (Some(len), Some(optimal)) => len.saturating_sub(optimal),
            _ => 0,
        }
    }
}

/// Shortest path length in moves, computed independently of this crate's
/// own searches so comparisons have an external baseline.
pub fn optimal_path_length(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    if !grid.contains(start) || !grid.contains(goal) {
        return None;
    }
    bfs(&start, |p| grid.neighbor_positions(*p), |p| *p == goal).map(|path| path.len() - 1)
}

/// Runs every strategy on the same grid and endpoints.
pub fn compare(grid: &Grid, start: Position, goal: Position) -> Result<Vec<AlgorithmResult>> {
    grid.index_of(start)?;
    grid.index_of(goal)?;
    let optimal = optimal_path_length(grid, start, goal);

    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let started = Instant::now();
        let result = algorithm.run(grid, start, goal)?;
        let elapsed = started.elapsed();

        results.push(AlgorithmResult {
            algorithm,
            path_length: result.path_len(),
            visited: result.visited_order.len(),
            elapsed,
            optimal_path_length: optimal,
        });
    }
    Ok(results)
}

/// Fixed-width table over a set of comparison results.
pub struct ComparisonTable<'a>(pub &'a [AlgorithmResult]);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ALGORITHM COMPARISON RESULTS ===")?;
        writeln!(
            f,
            "{:<10} {:<8} {:<8} {:<8} {:<8} {:<12} {:<12}",
            "Algorithm", "Success", "Moves", "Optimal", "Visited", "Efficiency", "Time"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;
        for result in self.0 {
            let success_str = if result.success() { "✓" } else { "✗" };
            let moves = result
                .path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            let optimal = result
                .optimal_path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            writeln!(
                f,
                "{:<10} {:<8} {:<8} {:<8} {:<8} {:<12} {:<12}",
                result.algorithm.as_str(),
                success_str,
                moves,
                optimal,
                result.visited,
                format!("{:.3}", result.route_efficiency()),
                format!("{:.2?}", result.elapsed),
            )?;
        }
        if let Some(worst) = self.0.iter().max_by_key(|r| r.extra_moves()) {
            if worst.extra_moves() > 0 {
                writeln!(
                    f,
                    "Note: {} took {} extra moves over the shortest path",
                    worst.algorithm,
                    worst.extra_moves()
                )?;
            }
        }
        Ok(())
    }
}
