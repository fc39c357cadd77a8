//! # grid_astar_sectors
//!
//! The core of an interactive grid pathfinding visualizer. Walls are painted on a
//! [Grid](grid::Grid), a start and a finish cell are placed, and every tick the shortest path is
//! recomputed with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) using one of three
//! switchable [heuristics](heuristic::Heuristic).
//!
//! Walls, start and finish markers are additionally indexed in a [QuadTree](quadtree::QuadTree)
//! whose leaves double as *sectors*: fixed blocks of cells that can be filled or cleared in bulk
//! and that are highlighted when the path runs through them. The quadtree only serves display and
//! bulk editing, it plays no part in path correctness.
//!
//! A [Level](level::Level) ties everything together and is what a presentation layer drives.
mod astar;
pub mod cell;
pub mod config;
pub mod grid;
pub mod heuristic;
pub mod level;
pub mod node;
pub mod quadtree;
pub mod solver;

pub use cell::CellKind;
pub use config::LevelConfig;
pub use grid::Grid;
pub use grid_util::point::Point;
pub use heuristic::Heuristic;
pub use level::{EditCommand, Frame, Level};
pub use quadtree::{CollisionObject, ObjectKind, QuadTree, Region, SectorId};
pub use solver::{AstarSolver, SearchReport};

/// Cost of a cardinal (straight) step.
pub const C: i32 = 99;
/// Cost of a diagonal step, approximately `C * sqrt(2)`.
pub const D: i32 = 140;
/// Helper constant for the octile distance formula.
pub const E: i32 = 2 * C - D;

/// Inline capacity used for neighbourhoods, which hold at most 8 points.
pub(crate) const N_SMALLVEC_SIZE: usize = 8;
