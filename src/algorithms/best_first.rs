//! Priority-queue search shared by A* and the Taylor variant.

use crate::algorithms::common::SearchResult;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::path::reconstruct_path;
use crate::search_state::SearchState;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry ordered by `(priority, y, x)`, smallest first.
///
/// `BinaryHeap` is a max-heap, so `Ord` is reversed.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    priority: f64,
    position: Position,
    index: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.position.y.cmp(&self.position.y))
            .then_with(|| other.position.x.cmp(&self.position.x))
    }
}

/// Expands cells in order of `g + heuristic(cell, goal)`, ties going to the
/// lowest `y` and then the lowest `x`.
///
/// A cell's priority only ever drops, so a superseded heap entry always pops
/// after the cell has been closed and is skipped there.
pub(crate) fn search<H>(
    grid: &Grid,
    start: Position,
    goal: Position,
    heuristic: H,
) -> Result<SearchResult>
where
    H: Fn(Position, Position) -> f64,
{
    let start_idx = grid.index_of(start)?;
    let goal_idx = grid.index_of(goal)?;

    let mut state = SearchState::new(grid);
    let mut open = BinaryHeap::new();
    let mut visited_order = Vec::new();

    let root_priority = heuristic(start, goal);
    state.set_root(start_idx, root_priority);
    open.push(Frontier {
        priority: root_priority,
        position: start,
        index: start_idx,
    });

    while let Some(Frontier { index: current, .. }) = open.pop() {
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

        let tentative = state.distance(current) + 1;
        for neighbor in grid.neighbors(current) {
            if state.is_finalized(neighbor) || tentative >= state.distance(neighbor) {
                continue;
            }
            let position = grid.position(neighbor);
            let priority = tentative as f64 + heuristic(position, goal);
            state.relax(neighbor, current, tentative, priority);
            open.push(Frontier {
                priority,
                position,
                index: neighbor,
            });
        }
    }

    Ok(SearchResult {
        path: Vec::new(),
        visited_order,
    })
}
