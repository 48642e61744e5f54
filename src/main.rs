use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;
use std::path::Path;

use grid_pathfinder::config::{Config, Layout};
use grid_pathfinder::generator::{generate_maze, generate_random, maze_exit};
use grid_pathfinder::request::{prepare, Coordinate, PathfindRequest, Response};
use grid_pathfinder::statistics::{compare, ComparisonTable};
use grid_pathfinder::{PathfindingError, Position};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();

    let loaded = match config.generate {
        Some(layout) => Ok(generated_request(&config, layout)),
        None => read_request(&config.request),
    };
    let mut request = match loaded {
        Ok(request) => request,
        Err(e) if e.is_client_error() => return emit(&Response::rejected(&e), config.pretty),
        Err(e) => return Err(e.into()),
    };
    if let Some(algorithm) = config.algorithm {
        request = request.with_algorithm(algorithm);
    }

    if config.compare {
        let prepared = prepare(&request).context("Invalid request")?;
        info!(
            "Comparing all algorithms on {}x{} grid with {} walls",
            prepared.grid.cols(),
            prepared.grid.rows(),
            prepared.grid.wall_count()
        );
        let results = compare(&prepared.grid, prepared.start, prepared.end)?;
        println!("Start: {:?}, Goal: {:?}", prepared.start, prepared.end);
        print!("{}", ComparisonTable(&results));
        return Ok(());
    }

    info!("Running {}", request.resolved_algorithm());
    let response = Response::from(prepare(&request).and_then(|prepared| prepared.run()));
    emit(&response, config.pretty)
}

/// Prints the response body; rejected requests exit with status 1.
fn emit(response: &Response, pretty: bool) -> Result<()> {
    let json = if pretty {
        response.to_json_pretty()?
    } else {
        response.to_json()?
    };
    println!("{}", json);

    if response.status_code() != 200 {
        std::process::exit(1);
    }
    Ok(())
}

fn generated_request(config: &Config, layout: Layout) -> PathfindRequest {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (matrix, start, end) = match layout {
        Layout::Random => {
            let start = Position::new(0, 0);
            let end = Position::new(
                config.cols.saturating_sub(1),
                config.rows.saturating_sub(1),
            );
            let matrix = generate_random(config.rows, config.cols, config.num_walls, start, end, &mut rng);
            (matrix, start, end)
        }
        Layout::Maze => {
            let matrix = generate_maze(config.rows, config.cols, &mut rng);
            (matrix, Position::new(1, 1), maze_exit(config.rows, config.cols))
        }
    };

    info!(
        "Generated {:?} layout {}x{}, start {:?}, end {:?}",
        layout, config.cols, config.rows, start, end
    );
    PathfindRequest::new(coordinate(start), coordinate(end), &matrix)
}

fn coordinate(pos: Position) -> Coordinate {
    Coordinate {
        x: pos.x as i64,
        y: pos.y as i64,
    }
}

fn read_request(path: &Path) -> grid_pathfinder::Result<PathfindRequest> {
    let io_error = |source| PathfindingError::Io {
        path: path.to_path_buf(),
        source,
    };
    let body = if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body).map_err(io_error)?;
        body
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };
    Ok(serde_json::from_str(&body)?)
}
