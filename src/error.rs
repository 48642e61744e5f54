//! Error types for grid construction, search requests and the CLI.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathfindingError {
    /// The wall matrix is empty or not rectangular.
    #[error("Invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// A start or end coordinate lies outside the grid.
    #[error("Coordinate ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        cols: usize,
        rows: usize,
    },

    #[error("Missing required data")]
    MissingRequiredData,

    #[error("Unknown algorithm '{0}' (expected astar, taylor, bfs or dfs)")]
    UnknownAlgorithm(String),

    #[error("Malformed request: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PathfindingError {
    pub fn invalid_grid(reason: impl Into<String>) -> Self {
        PathfindingError::InvalidGrid {
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than the environment.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PathfindingError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, PathfindingError>;
