use grid_astar_sectors::{AstarSolver, Grid, Heuristic, Point};

fn main() {
    let mut grid = Grid::with_size(10, 10);
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2), (5, 0), (6, 0), (5, 1), (6, 1)] {
        grid.set_wall(Point::new(x, y));
    }
    let solver = AstarSolver::new(false);
    let start = Point::new(0, 0);
    let end = Point::new(7, 7);
    for heuristic in Heuristic::ALL {
        grid.set_heuristic(heuristic);
        let report = solver.search(&mut grid, start, end);
        println!(
            "{heuristic}: {} steps, {} expansions, {:?}",
            report.steps().unwrap_or(0),
            report.expansions,
            report.elapsed
        );
    }
}
