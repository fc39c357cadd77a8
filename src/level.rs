use crate::config::LevelConfig;
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::quadtree::{Region, SectorId};
use crate::solver::AstarSolver;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, info};
use std::time::Duration;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Edits a presentation layer can request, applied at a cursor cell between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditCommand {
    PlaceStart,
    PlaceFinish,
    AddWall,
    RemoveWall,
    ToggleHeuristic,
    ToggleSectorFill,
    ToggleShowVisitedNodes,
    ToggleShowVisitedSectors,
    Reset,
}

/// Everything a presentation layer needs to draw one tick. Cell kinds, including the path and
/// visited overlays, are read from [Level::grid].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub path: Vec<Point>,
    pub reached_goal: bool,
    pub heuristic: Heuristic,
    pub last_search_duration: Duration,
    /// Quadtree sectors the path runs through, in path order and without duplicates.
    pub highlighted_sectors: Vec<(SectorId, Region)>,
}

/// A grid together with the solver that recomputes its path every tick.
#[derive(Clone, Debug)]
pub struct Level {
    grid: Grid,
    solver: AstarSolver,
}

impl Default for Level {
    fn default() -> Level {
        Level::new(LevelConfig::default())
    }
}

impl Level {
    pub fn new(config: LevelConfig) -> Level {
        info!(
            "Creating {}x{} level, sectors at quadtree depth {}",
            config.width, config.height, config.max_depth
        );
        Level {
            solver: AstarSolver::from_config(&config),
            grid: Grid::new(config),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
    pub fn solver(&self) -> &AstarSolver {
        &self.solver
    }
    pub fn solver_mut(&mut self) -> &mut AstarSolver {
        &mut self.solver
    }

    /// Applies an edit at `cursor`. Returns whether anything changed; toggles and reset always do.
    pub fn apply(&mut self, command: EditCommand, cursor: Point) -> bool {
        debug!("Applying {command:?} at {cursor}");
        match command {
            EditCommand::PlaceStart => self.grid.set_start(cursor),
            EditCommand::PlaceFinish => self.grid.set_finish(cursor),
            EditCommand::AddWall => self.grid.set_wall(cursor),
            EditCommand::RemoveWall => self.grid.clear_wall(cursor),
            EditCommand::ToggleHeuristic => {
                self.grid.toggle_heuristic();
                true
            }
            EditCommand::ToggleSectorFill => {
                self.grid.toggle_sector_fill_mode();
                true
            }
            EditCommand::ToggleShowVisitedNodes => {
                self.grid.toggle_show_visited_nodes();
                true
            }
            EditCommand::ToggleShowVisitedSectors => {
                self.grid.toggle_show_visited_sectors();
                true
            }
            EditCommand::Reset => {
                self.grid.reset();
                true
            }
        }
    }

    /// Recomputes the path: clears last tick's overlays, searches from start to finish, marks the
    /// path cells and collects the sectors they fall in.
    pub fn tick(&mut self) -> Frame {
        self.grid.clear_path_markings();
        let (path, reached_goal) = match (self.grid.start(), self.grid.finish()) {
            (Some(start), Some(finish)) => {
                let report = self.solver.search(&mut self.grid, start, finish);
                (report.path, report.reached_goal)
            }
            _ => (Vec::new(), false),
        };
        for point in &path {
            self.grid.mark_path(*point);
        }

        let mut sectors = FxIndexSet::default();
        if self.grid.is_showing_visited_sectors() {
            let quadtree = self.grid.quadtree();
            sectors.extend(path.iter().filter_map(|p| quadtree.find_region(*p)));
        }
        let quadtree = self.grid.quadtree();
        let highlighted_sectors = sectors
            .into_iter()
            .filter_map(|id| quadtree.region(id).map(|region| (id, region)))
            .collect();

        Frame {
            path,
            reached_goal,
            heuristic: self.grid.heuristic(),
            last_search_duration: self.grid.last_search_duration(),
            highlighted_sectors,
        }
    }
}
