//! JSON contract for the `POST /api/pathfind` boundary.
//!
//! A transport layer hands the raw body to [`respond`] and writes back the
//! returned status code and JSON. Nothing here knows about HTTP itself.

use crate::algorithms::common::SearchResult;
use crate::algorithms::Algorithm;
use crate::error::{PathfindingError, Result};
use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Signed coordinate as sent by clients; validated against the grid later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

/// A grid entry. Booleans are taken as-is, numbers are walls when non-zero
/// and `null` is open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WallFlag {
    Bool(bool),
    Number(f64),
    Null,
}

impl WallFlag {
    pub fn is_wall(&self) -> bool {
        match *self {
            WallFlag::Bool(b) => b,
            WallFlag::Number(n) => n != 0.0,
            WallFlag::Null => false,
        }
    }
}

impl From<bool> for WallFlag {
    fn from(b: bool) -> Self {
        WallFlag::Bool(b)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathfindRequest {
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
    pub algorithm: Option<String>,
    pub grid: Option<Vec<Vec<WallFlag>>>,
}

impl PathfindRequest {
    pub fn new(start: Coordinate, end: Coordinate, grid: &[Vec<bool>]) -> Self {
        PathfindRequest {
            start: Some(start),
            end: Some(end),
            algorithm: None,
            grid: Some(
                grid.iter()
                    .map(|row| row.iter().map(|&b| WallFlag::from(b)).collect())
                    .collect(),
            ),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm.as_str().to_string());
        self
    }

    /// The requested strategy; absent or unknown names mean A*.
    pub fn resolved_algorithm(&self) -> Algorithm {
        self.algorithm
            .as_deref()
            .map(Algorithm::from_name_or_default)
            .unwrap_or_default()
    }
}

/// A request that passed validation, ready to search.
#[derive(Debug, Clone)]
pub struct PreparedSearch {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
    pub algorithm: Algorithm,
}

impl PreparedSearch {
    pub fn run(&self) -> Result<SearchResult> {
        crate::search(&self.grid, self.start, self.end, self.algorithm)
    }
}

/// Validates a decoded request and runs the search it describes.
pub fn handle(request: &PathfindRequest) -> Result<SearchResult> {
    prepare(request)?.run()
}

/// Checks required fields, builds the grid and bounds-checks both endpoints.
pub fn prepare(request: &PathfindRequest) -> Result<PreparedSearch> {
    let (Some(start), Some(end), Some(matrix)) = (request.start, request.end, &request.grid)
    else {
        return Err(PathfindingError::MissingRequiredData);
    };
    if matrix.is_empty() {
        return Err(PathfindingError::MissingRequiredData);
    }

    let walls: Vec<Vec<bool>> = matrix
        .iter()
        .map(|row| row.iter().map(WallFlag::is_wall).collect())
        .collect();
    let grid = Grid::from_matrix(&walls)?;
    let start = grid.checked_position(start.x, start.y)?;
    let end = grid.checked_position(end.x, end.y)?;

    Ok(PreparedSearch {
        grid,
        start,
        end,
        algorithm: request.resolved_algorithm(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// What the transport layer should send back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Ok(SearchResult),
    BadRequest(ErrorBody),
}

impl Response {
    pub fn rejected(err: &PathfindingError) -> Self {
        log::debug!("Rejecting request: {}", err);
        Response::BadRequest(ErrorBody {
            error: err.to_string(),
        })
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Response::Ok(_) => 200,
            Response::BadRequest(_) => 400,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Result<SearchResult>> for Response {
    fn from(result: Result<SearchResult>) -> Self {
        match result {
            Ok(result) => Response::Ok(result),
            Err(e) => Response::rejected(&e),
        }
    }
}

/// Decodes a raw JSON body, handles it and packages the outcome.
pub fn respond(body: &str) -> Response {
    let result = serde_json::from_str::<PathfindRequest>(body)
        .map_err(PathfindingError::from)
        .and_then(|request| handle(&request));
    Response::from(result)
}
