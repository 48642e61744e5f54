//! Random wall layouts and mazes for demos and stress tests.

use crate::grid::Position;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Scatters up to `num_walls` walls over a `rows` x `cols` matrix, never on
/// `start` or `goal`.
///
/// Placement gives up after `num_walls * 3` attempts, so dense requests may
/// come back with fewer walls.
pub fn generate_random<R: Rng>(
    rows: usize,
    cols: usize,
    num_walls: usize,
    start: Position,
    goal: Position,
    rng: &mut R,
) -> Vec<Vec<bool>> {
    let mut matrix = vec![vec![false; cols]; rows];
    if rows == 0 || cols == 0 {
        return matrix;
    }

    let mut walls = FxHashSet::default();
    let mut attempts = 0;
    while walls.len() < num_walls && attempts < num_walls * 3 {
        let pos = Position {
            x: rng.gen_range(0..cols),
            y: rng.gen_range(0..rows),
        };
        if pos != start && pos != goal && walls.insert(pos) {
            matrix[pos.y][pos.x] = true;
        }
        attempts += 1;
    }

    log::debug!(
        "Generated {}x{} grid with {} walls after {} attempts",
        cols,
        rows,
        walls.len(),
        attempts
    );
    matrix
}

/// Carves a maze with a randomized depth-first backtracker.
///
/// Starts from all walls and opens `(1, 1)`, then repeatedly jumps two cells
/// in a random direction to an uncarved cell, opening the wall between.
/// Passages sit on odd coordinates, so odd dimensions give a closed border.
pub fn generate_maze<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Vec<Vec<bool>> {
    let mut matrix = vec![vec![true; cols]; rows];
    if rows < 2 || cols < 2 {
        return matrix;
    }

    let root = Position::new(1, 1);
    matrix[root.y][root.x] = false;
    let mut stack = vec![root];
    let mut carved = 1;

    while let Some(&current) = stack.last() {
        let candidates: Vec<Position> = maze_neighbors(current, rows, cols)
            .filter(|next| matrix[next.y][next.x])
            .collect();

        match candidates.choose(rng) {
            Some(&next) => {
                let between = Position {
                    x: (current.x + next.x) / 2,
                    y: (current.y + next.y) / 2,
                };
                matrix[between.y][between.x] = false;
                matrix[next.y][next.x] = false;
                carved += 1;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    log::debug!("Carved {}x{} maze with {} rooms", cols, rows, carved);
    matrix
}

/// Cells two steps away in Down, Right, Up, Left order.
fn maze_neighbors(pos: Position, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    [(0isize, 2isize), (2, 0), (0, -2), (-2, 0)]
        .into_iter()
        .filter_map(move |(dx, dy)| {
            let x = pos.x.checked_add_signed(dx)?;
            let y = pos.y.checked_add_signed(dy)?;
            (x < cols && y < rows).then_some(Position { x, y })
        })
}

/// Bottom-right-most open cell on the maze lattice.
pub fn maze_exit(rows: usize, cols: usize) -> Position {
    let last_odd = |n: usize| match n % 2 {
        0 => n.saturating_sub(1),
        _ => n.saturating_sub(2),
    }
    .max(1);
    Position::new(last_odd(cols), last_odd(rows))
}
