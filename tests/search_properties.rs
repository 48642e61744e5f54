use grid_pathfinder::generator::generate_random;
use grid_pathfinder::path::is_valid_path;
use grid_pathfinder::statistics::optimal_path_length;
use grid_pathfinder::{search, Algorithm, Grid, PathfindingError, Position};
use pathfinding::prelude::bfs_reach;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn p(x: usize, y: usize) -> Position {
    Position::new(x, y)
}

fn open_cell(grid: &Grid, rng: &mut StdRng) -> Position {
    loop {
        let pos = p(rng.gen_range(0..grid.cols()), rng.gen_range(0..grid.rows()));
        if !grid.is_wall(pos) {
            return pos;
        }
    }
}

fn reachable_count(grid: &Grid, start: Position) -> usize {
    bfs_reach(start, |pos| grid.neighbor_positions(*pos)).count()
}

#[test]
fn every_algorithm_agrees_with_the_oracle_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(2024);
    for round in 0..60 {
        let rows = rng.gen_range(3..14);
        let cols = rng.gen_range(3..14);
        let walls = rng.gen_range(0..rows * cols / 2);
        let matrix = generate_random(rows, cols, walls, p(0, 0), p(cols - 1, rows - 1), &mut rng);
        let grid = Grid::from_matrix(&matrix).unwrap();

        for _ in 0..5 {
            let start = open_cell(&grid, &mut rng);
            let goal = open_cell(&grid, &mut rng);
            let optimal = optimal_path_length(&grid, start, goal);

            for algorithm in Algorithm::ALL {
                let result = search(&grid, start, goal, algorithm).unwrap();
                let context = format!("round {} {} {:?}->{:?}", round, algorithm, start, goal);
                match optimal {
                    Some(best) => {
                        assert!(is_valid_path(&grid, &result.path), "{}", context);
                        assert_eq!(result.path.first(), Some(&start), "{}", context);
                        assert_eq!(result.path.last(), Some(&goal), "{}", context);
                        let len = result.path_len().unwrap();
                        if algorithm.is_optimal() {
                            assert_eq!(len, best, "{}", context);
                        } else {
                            assert!(len >= best, "{}", context);
                        }
                    }
                    None => {
                        assert!(result.path.is_empty(), "{}", context);
                        assert_eq!(
                            result.visited_order.len(),
                            reachable_count(&grid, start),
                            "{}",
                            context
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn visited_cells_are_never_repeated() {
    let mut rng = StdRng::seed_from_u64(5);
    let matrix = generate_random(12, 12, 40, p(0, 0), p(11, 11), &mut rng);
    let grid = Grid::from_matrix(&matrix).unwrap();
    for algorithm in Algorithm::ALL {
        let result = search(&grid, p(0, 0), p(11, 11), algorithm).unwrap();
        let mut seen = result.visited_order.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), result.visited_order.len(), "{}", algorithm);
    }
}

#[test]
fn three_by_three_open_grid() {
    let grid = Grid::parse("...\n...\n...").unwrap();
    let result = search(&grid, p(0, 0), p(2, 2), Algorithm::Bfs).unwrap();
    assert_eq!(result.path, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    assert!(result.visited_order.len() >= 5);
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let matrix = generate_random(15, 15, 60, p(0, 0), p(14, 14), &mut rng);
    let grid = Grid::from_matrix(&matrix).unwrap();
    for algorithm in Algorithm::ALL {
        let first = search(&grid, p(0, 0), p(14, 14), algorithm).unwrap();
        for _ in 0..3 {
            let again = search(&grid, p(0, 0), p(14, 14), algorithm).unwrap();
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&again).unwrap()
            );
        }
    }
}

#[test]
fn separated_regions_yield_no_path() {
    let grid = Grid::parse("...\n###\n...").unwrap();
    for algorithm in Algorithm::ALL {
        let result = search(&grid, p(0, 0), p(2, 2), algorithm).unwrap();
        assert!(result.path.is_empty(), "{}", algorithm);
        assert_eq!(result.visited_order, vec![p(0, 0), p(1, 0), p(2, 0)], "{}", algorithm);
    }
}

#[test]
fn start_equal_to_end() {
    let grid = Grid::parse("...\n...").unwrap();
    for algorithm in Algorithm::ALL {
        let result = search(&grid, p(1, 1), p(1, 1), algorithm).unwrap();
        assert_eq!(result.path, vec![p(1, 1)], "{}", algorithm);
        assert_eq!(result.visited_order.first(), Some(&p(1, 1)), "{}", algorithm);
    }
}

#[test]
fn dfs_can_be_strictly_longer_than_bfs() {
    let grid = Grid::parse("...\n...\n...").unwrap();
    let dfs = search(&grid, p(0, 0), p(0, 1), Algorithm::Dfs).unwrap();
    let bfs = search(&grid, p(0, 0), p(0, 1), Algorithm::Bfs).unwrap();
    assert_eq!(bfs.path_len(), Some(1));
    assert_eq!(dfs.path_len(), Some(7));
}

#[test]
fn taylor_matches_bfs_on_open_ground() {
    // dx = dy = 4 with no walls: every greedy step still moves toward the goal.
    let grid = Grid::parse(".....\n.....\n.....\n.....\n.....").unwrap();
    let taylor = search(&grid, p(0, 0), p(4, 4), Algorithm::Taylor).unwrap();
    let bfs = search(&grid, p(0, 0), p(4, 4), Algorithm::Bfs).unwrap();
    assert_eq!(taylor.path_len(), bfs.path_len());
    assert!(taylor.visited_order.len() < bfs.visited_order.len());
}

#[test]
fn taylor_can_be_suboptimal_around_walls() {
    let grid = Grid::parse(
        "
        ......
        ..#...
        ..#...
        .#....
        ..#...
        .#....
        .#....
        ....#.
        ",
    )
    .unwrap();
    let taylor = search(&grid, p(0, 0), p(5, 7), Algorithm::Taylor).unwrap();
    let a_star = search(&grid, p(0, 0), p(5, 7), Algorithm::AStar).unwrap();
    let bfs = search(&grid, p(0, 0), p(5, 7), Algorithm::Bfs).unwrap();
    assert_eq!(bfs.path_len(), Some(12));
    assert_eq!(a_star.path_len(), Some(12));
    assert_eq!(taylor.path_len(), Some(14));
}

#[test]
fn endpoints_outside_the_grid_fail_fast() {
    let grid = Grid::parse("..\n..").unwrap();
    for algorithm in Algorithm::ALL {
        let err = search(&grid, p(0, 0), p(2, 0), algorithm).unwrap_err();
        assert!(matches!(err, PathfindingError::OutOfBounds { x: 2, y: 0, cols: 2, rows: 2 }));
    }
}

#[test]
fn wall_goal_is_unreachable_not_an_error() {
    let grid = Grid::parse("..#").unwrap();
    for algorithm in Algorithm::ALL {
        let result = search(&grid, p(0, 0), p(2, 0), algorithm).unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.visited_order, vec![p(0, 0), p(1, 0)]);
    }
}
