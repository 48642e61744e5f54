use crate::algorithms::Algorithm;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Uniformly scattered walls.
    Random,
    /// Recursive-backtracker maze.
    Maze,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Grid pathfinding with BFS, DFS, A* and Taylor search", long_about = None)]
pub struct Config {
    /// JSON request file in the /api/pathfind body format; `-` reads stdin
    #[arg(long, default_value = "-")]
    pub request: PathBuf,

    /// Override the request's algorithm (astar, taylor, bfs, dfs)
    #[arg(long)]
    pub algorithm: Option<Algorithm>,

    /// Generate a grid instead of reading a request
    #[arg(long, value_enum)]
    pub generate: Option<Layout>,

    #[arg(long, default_value_t = 21)]
    pub rows: usize,

    #[arg(long, default_value_t = 21)]
    pub cols: usize,

    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    /// Seed for reproducible generated grids
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run every algorithm and print a comparison table
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
