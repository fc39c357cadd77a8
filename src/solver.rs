use crate::astar::astar_grid;
use crate::config::LevelConfig;
use crate::grid::Grid;
use crate::{C, D};
use grid_util::point::Point;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Result of a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Cells strictly between start and finish, ordered from the cell next to the finish back to
    /// the cell next to the start. Empty if no path was found, and also when start and finish are
    /// neighbours.
    pub path: Vec<Point>,
    pub reached_goal: bool,
    pub expansions: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    fn empty(elapsed: Duration) -> SearchReport {
        SearchReport {
            path: Vec::new(),
            reached_goal: false,
            expansions: 0,
            elapsed,
        }
    }

    /// Number of moves from start to finish, [None] if the finish was not reached.
    pub fn steps(&self) -> Option<usize> {
        self.reached_goal.then(|| self.path.len() + 1)
    }
}

/// A* solver over a [Grid], using the heuristic currently selected on the grid.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub allow_diagonal_move: bool,
    /// Overrides the expansion cap, which defaults to the number of cells of the grid searched.
    pub max_expansions: Option<usize>,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new(false)
    }
}

impl AstarSolver {
    pub fn new(allow_diagonal_move: bool) -> AstarSolver {
        AstarSolver {
            allow_diagonal_move,
            max_expansions: None,
        }
    }

    pub fn from_config(config: &LevelConfig) -> AstarSolver {
        AstarSolver {
            allow_diagonal_move: config.allow_diagonal_move,
            max_expansions: Some(config.max_expansions()),
        }
    }

    /// Computes the path between start and finish, excluding both. See [SearchReport::path] for
    /// the ordering.
    pub fn find_path(&self, grid: &mut Grid, start: Point, finish: Point) -> Vec<Point> {
        self.search(grid, start, finish).path
    }

    /// Runs a full search: resets the grid's nodes, checks reachability through the connected
    /// components and runs A*. The elapsed time is recorded on the grid.
    ///
    /// While the grid shows visited nodes the reachability check is skipped, so an unreachable
    /// finish still paints the region the search explored.
    pub fn search(&self, grid: &mut Grid, start: Point, finish: Point) -> SearchReport {
        let timer = Instant::now();
        grid.prepare_search_nodes();
        let report = if start == finish
            || !grid.point_in_bounds(start)
            || !grid.point_in_bounds(finish)
        {
            SearchReport::empty(timer.elapsed())
        } else if !grid.is_showing_visited_nodes()
            && !grid.reachable(&start, &finish, self.allow_diagonal_move)
        {
            info!("{} is not reachable from {}", finish, start);
            SearchReport::empty(timer.elapsed())
        } else {
            debug!("Computing path from {} to {}", start, finish);
            let max_expansions = self
                .max_expansions
                .unwrap_or(grid.width() * grid.height());
            let heuristic = grid.heuristic();
            let outcome = astar_grid(
                grid,
                start,
                finish,
                heuristic,
                self.allow_diagonal_move,
                max_expansions,
            );
            SearchReport {
                path: outcome.path,
                reached_goal: outcome.reached_goal,
                expansions: outcome.expansions,
                elapsed: timer.elapsed(),
            }
        };
        grid.record_search_duration(report.elapsed);
        report
    }
}

/// Cost of walking the given sequence of adjacent points, [C] per straight and [D] per diagonal
/// step.
pub fn path_cost(points: &[Point]) -> i32 {
    points
        .windows(2)
        .map(|w| {
            if w[0].x != w[1].x && w[0].y != w[1].y {
                D
            } else {
                C
            }
        })
        .sum()
}
