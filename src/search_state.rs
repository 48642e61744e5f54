use crate::grid::Grid;

/// Marker for a cell whose distance has not been discovered yet.
pub const UNREACHED: u32 = u32::MAX;

/// Per-invocation scratch annotations, keyed by cell index.
///
/// Every search builds a fresh state, so nothing leaks between calls and a
/// `Grid` can be shared read-only by concurrent searches.
#[derive(Debug, Clone)]
pub struct SearchState {
    distance: Vec<u32>,
    priority: Vec<f64>,
    predecessor: Vec<Option<usize>>,
    finalized: Vec<bool>,
}

impl SearchState {
    pub fn new(grid: &Grid) -> Self {
        let n = grid.len();
        SearchState {
            distance: vec![UNREACHED; n],
            priority: vec![f64::INFINITY; n],
            predecessor: vec![None; n],
            finalized: vec![false; n],
        }
    }

    pub fn distance(&self, index: usize) -> u32 {
        self.distance[index]
    }

    pub fn priority(&self, index: usize) -> f64 {
        self.priority[index]
    }

    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.predecessor[index]
    }

    pub fn is_discovered(&self, index: usize) -> bool {
        self.distance[index] != UNREACHED
    }

    pub fn is_finalized(&self, index: usize) -> bool {
        self.finalized[index]
    }

    /// Seeds the search root: distance 0, no predecessor.
    pub fn set_root(&mut self, index: usize, priority: f64) {
        self.distance[index] = 0;
        self.priority[index] = priority;
        self.predecessor[index] = None;
    }

    /// Records `index` as reached from `from` at `distance`.
    pub fn relax(&mut self, index: usize, from: usize, distance: u32, priority: f64) {
        self.distance[index] = distance;
        self.priority[index] = priority;
        self.predecessor[index] = Some(from);
    }

    /// Points `index` at a new parent without touching its distance.
    pub fn set_predecessor(&mut self, index: usize, from: usize) {
        debug_assert!(!self.finalized[index]);
        self.predecessor[index] = Some(from);
    }

    pub fn finalize(&mut self, index: usize) {
        self.finalized[index] = true;
    }
}
