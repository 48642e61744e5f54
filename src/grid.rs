use crate::error::{PathfindingError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

/// Neighbor offsets in the order searches must see them: Right, Down, Left, Up.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// One grid position. Both fields are fixed when the grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub is_wall: bool,
}

/// Immutable occupancy map stored row-major.
///
/// A cell's index is `y * cols + x`; search state elsewhere is keyed by the
/// same index, so the grid itself never carries per-search data.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a wall matrix indexed as `matrix[y][x]`.
    ///
    /// Fails when the matrix has no rows, no columns, or rows of differing length.
    pub fn from_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self> {
        let rows = matrix.len();
        if rows == 0 {
            return Err(PathfindingError::invalid_grid("grid has no rows"));
        }
        let cols = matrix[0].as_ref().len();
        if cols == 0 {
            return Err(PathfindingError::invalid_grid("grid has no columns"));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (y, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(PathfindingError::invalid_grid(format!(
                    "row {} has {} columns, expected {}",
                    y,
                    row.len(),
                    cols
                )));
            }
            cells.extend(row.iter().enumerate().map(|(x, &is_wall)| Cell {
                position: Position { x, y },
                is_wall,
            }));
        }

        Ok(Grid { rows, cols, cells })
    }

    /// Parses a grid from text rows where `#` marks a wall and anything else is open.
    pub fn parse(text: &str) -> Result<Self> {
        let matrix: Vec<Vec<bool>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == '#').collect())
            .collect();
        Self::from_matrix(&matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Converts signed coordinates into a position inside the grid.
    pub fn checked_position(&self, x: i64, y: i64) -> Result<Position> {
        let out_of_bounds = PathfindingError::OutOfBounds {
            x,
            y,
            cols: self.cols,
            rows: self.rows,
        };
        let (Ok(ux), Ok(uy)) = (usize::try_from(x), usize::try_from(y)) else {
            return Err(out_of_bounds);
        };
        let pos = Position { x: ux, y: uy };
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(out_of_bounds)
        }
    }

    /// Index of `pos` in the cell arena, or an `OutOfBounds` error.
    pub fn index_of(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.y * self.cols + pos.x)
        } else {
            Err(PathfindingError::OutOfBounds {
                x: pos.x as i64,
                y: pos.y as i64,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn position(&self, index: usize) -> Position {
        self.cells[index].position
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[pos.y * self.cols + pos.x].is_wall
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_wall).count()
    }

    /// Open cells one step from `index`, in Right, Down, Left, Up order.
    ///
    /// The order decides DFS branch order and every visited trace, so callers
    /// must not reorder the result.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let Position { x, y } = self.cells[index].position;
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            if nx >= self.cols || ny >= self.rows {
                return None;
            }
            let ni = ny * self.cols + nx;
            (!self.cells[ni].is_wall).then_some(ni)
        })
    }

    /// Same as [`Grid::neighbors`] but in position space.
    pub fn neighbor_positions(&self, pos: Position) -> Vec<Position> {
        match self.index_of(pos) {
            Ok(index) => self.neighbors(index).map(|ni| self.position(ni)).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// The wall matrix this grid was built from.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.is_wall).collect())
            .collect()
    }
}
