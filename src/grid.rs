use crate::cell::CellKind;
use crate::config::LevelConfig;
use crate::heuristic::Heuristic;
use crate::node::Node;
use crate::quadtree::{CollisionObject, ObjectKind, QuadTree, Region};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::point::Point;
use grid_util::{Grid as _, SimpleGrid, SimpleValueGrid, ValueGrid};
use itertools::{iproduct, Itertools};
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::time::Duration;

/// Authoritative cell storage of a level. Next to the [CellKind] of every cell, a [Grid] owns the
/// [Node] of every cell used by the search, the [QuadTree] indexing walls and markers, and
/// connected components in a [UnionFind] used to reject unreachable goals without flood-filling.
///
/// Cells are addressed with the origin in the top-left corner.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleValueGrid<CellKind>,
    nodes: SimpleGrid<Node>,
    quadtree: QuadTree,
    start: Option<Point>,
    finish: Option<Point>,
    heuristic: Heuristic,
    last_search_duration: Duration,
    show_visited_nodes: bool,
    show_visited_sectors: bool,
    sector_fill: bool,
    components: UnionFind<usize>,
    components_dirty: bool,
    components_diagonal: bool,
    config: LevelConfig,
}

impl Grid {
    pub fn new(config: LevelConfig) -> Grid {
        let (width, height) = (config.width, config.height);
        let mut grid = Grid {
            cells: SimpleValueGrid::new(width, height, CellKind::Empty),
            nodes: SimpleGrid::new(width, height, Node::default()),
            quadtree: Grid::empty_quadtree(&config),
            start: None,
            finish: None,
            heuristic: Heuristic::default(),
            last_search_duration: Duration::ZERO,
            show_visited_nodes: config.show_visited_nodes,
            show_visited_sectors: config.show_visited_sectors,
            sector_fill: false,
            components: UnionFind::new(width * height),
            components_dirty: true,
            components_diagonal: config.allow_diagonal_move,
            config,
        };
        grid.prepare_search_nodes();
        grid
    }

    /// A grid of the given size with every other setting at its default.
    pub fn with_size(width: usize, height: usize) -> Grid {
        Grid::new(LevelConfig {
            width,
            height,
            ..LevelConfig::default()
        })
    }

    fn empty_quadtree(config: &LevelConfig) -> QuadTree {
        QuadTree::new(
            Region::new(0, 0, config.width as i32, config.height as i32),
            config.node_capacity,
            config.max_depth,
        )
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.cells.index_in_bounds(x, y)
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.cells.point_in_bounds(point)
    }

    /// Row-wise index of an in-bounds point, as used by the connected components.
    pub fn get_ix_point(&self, point: &Point) -> usize {
        self.cells.get_ix_point(point)
    }

    /// Every cell position, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width() as i32, self.height() as i32);
        iproduct!(0..height, 0..width).map(|(y, x)| Point::new(x, y))
    }

    pub fn get(&self, point: Point) -> Option<CellKind> {
        if self.point_in_bounds(point) {
            Some(self.cells.get_point(point))
        } else {
            None
        }
    }
    fn kind_at(&self, point: Point) -> CellKind {
        self.cells.get_point(point)
    }
    fn set_kind(&mut self, point: Point, kind: CellKind) {
        self.cells.set_point(point, kind);
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.points().filter(|&p| self.kind_at(p) == kind).count()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn finish(&self) -> Option<Point> {
        self.finish
    }
    pub fn quadtree(&self) -> &QuadTree {
        &self.quadtree
    }
    /// Search nodes of every cell, row by row.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.points().filter_map(|p| self.nodes.get_point(p))
    }
    pub fn node(&self, point: Point) -> Option<&Node> {
        if self.point_in_bounds(point) {
            self.nodes.get_point(point)
        } else {
            None
        }
    }
    pub(crate) fn node_mut(&mut self, point: Point) -> Option<&mut Node> {
        if self.point_in_bounds(point) {
            self.nodes.get_point_mut(point)
        } else {
            None
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }
    /// Cycles Euclidean, Manhattan, Diagonal and back, returning the new selection.
    pub fn toggle_heuristic(&mut self) -> Heuristic {
        self.heuristic = self.heuristic.next();
        debug!("Heuristic switched to {}", self.heuristic);
        self.heuristic
    }

    pub fn last_search_duration(&self) -> Duration {
        self.last_search_duration
    }
    pub(crate) fn record_search_duration(&mut self, elapsed: Duration) {
        self.last_search_duration = elapsed;
    }

    pub fn is_showing_visited_nodes(&self) -> bool {
        self.show_visited_nodes
    }
    pub fn toggle_show_visited_nodes(&mut self) -> bool {
        self.show_visited_nodes = !self.show_visited_nodes;
        self.show_visited_nodes
    }
    pub fn is_showing_visited_sectors(&self) -> bool {
        self.show_visited_sectors
    }
    pub fn toggle_show_visited_sectors(&mut self) -> bool {
        self.show_visited_sectors = !self.show_visited_sectors;
        self.show_visited_sectors
    }
    pub fn is_filling_sectors(&self) -> bool {
        self.sector_fill
    }

    /// Places the start marker. Any previous start is cleared first, so at most one start exists.
    /// Rejected when out of bounds or on the finish cell.
    pub fn set_start(&mut self, point: Point) -> bool {
        if !self.point_in_bounds(point) || self.finish == Some(point) {
            return false;
        }
        if let Some(old) = self.start.take() {
            self.clear_marker(old, CellKind::Start, ObjectKind::Start);
        }
        self.place_marker(point, CellKind::Start, ObjectKind::Start);
        self.start = Some(point);
        true
    }

    /// Places the finish marker, mirroring [set_start](Self::set_start).
    pub fn set_finish(&mut self, point: Point) -> bool {
        if !self.point_in_bounds(point) || self.start == Some(point) {
            return false;
        }
        if let Some(old) = self.finish.take() {
            self.clear_marker(old, CellKind::Finish, ObjectKind::Finish);
        }
        self.place_marker(point, CellKind::Finish, ObjectKind::Finish);
        self.finish = Some(point);
        true
    }

    fn clear_marker(&mut self, point: Point, kind: CellKind, object: ObjectKind) {
        if self.kind_at(point) == kind {
            self.set_kind(point, CellKind::Empty);
        }
        self.quadtree.remove(point, object);
    }

    fn place_marker(&mut self, point: Point, kind: CellKind, object: ObjectKind) {
        let was_wall = self.kind_at(point) == CellKind::Wall;
        if was_wall {
            self.quadtree.remove(point, ObjectKind::Wall);
        }
        self.set_kind(point, kind);
        self.quadtree
            .insert(CollisionObject::unit(object, point));
        if was_wall {
            self.join_components(point);
        }
        debug!("Placed {kind:?} at {point}");
    }

    /// Paints a wall. A no-op outside the grid, on any cell that is not [Empty](CellKind::Empty)
    /// or on the finish. In sector fill mode the whole sector containing the cell is filled
    /// instead.
    pub fn set_wall(&mut self, point: Point) -> bool {
        if !self.point_in_bounds(point)
            || self.kind_at(point) != CellKind::Empty
            || self.finish == Some(point)
        {
            return false;
        }
        if self.sector_fill {
            return self.fill_sector(point) > 0;
        }
        self.set_kind(point, CellKind::Wall);
        self.quadtree
            .insert(CollisionObject::unit(ObjectKind::Wall, point));
        self.components_dirty = true;
        true
    }

    /// Removes a wall. A no-op outside the grid, on a cell that is not a wall or on the finish.
    /// In sector fill mode the whole sector is cleared.
    pub fn clear_wall(&mut self, point: Point) -> bool {
        if !self.point_in_bounds(point)
            || self.kind_at(point) != CellKind::Wall
            || self.finish == Some(point)
        {
            return false;
        }
        if self.sector_fill {
            return self.free_sector(point) > 0;
        }
        self.set_kind(point, CellKind::Empty);
        self.quadtree.remove(point, ObjectKind::Wall);
        self.join_components(point);
        true
    }

    /// Turns every cell of the sector containing `point` into a wall, except the finish. A start
    /// inside the sector is walled over and unset. Returns the number of new walls.
    pub fn fill_sector(&mut self, point: Point) -> usize {
        match self.quadtree.sector_bounds(point) {
            Some(region) => self.fill_region(region),
            None => 0,
        }
    }

    fn fill_region(&mut self, region: Region) -> usize {
        let mut filled = 0;
        for cell in region.cells() {
            if !self.point_in_bounds(cell)
                || self.kind_at(cell) == CellKind::Wall
                || self.finish == Some(cell)
            {
                continue;
            }
            if self.start == Some(cell) {
                self.start = None;
                self.quadtree.remove(cell, ObjectKind::Start);
                debug!("Start at {cell} walled over by sector fill");
            }
            self.set_kind(cell, CellKind::Wall);
            self.quadtree
                .insert(CollisionObject::unit(ObjectKind::Wall, cell));
            filled += 1;
        }
        if filled > 0 {
            debug!("Filled {filled} cells of sector {region:?}");
            self.components_dirty = true;
        }
        filled
    }

    /// Clears every wall of the sector containing `point`. Returns the number of removed walls.
    pub fn free_sector(&mut self, point: Point) -> usize {
        let region = match self.quadtree.sector_bounds(point) {
            Some(region) => region,
            None => return 0,
        };
        let mut freed = 0;
        for cell in region.cells() {
            if self.point_in_bounds(cell) && self.kind_at(cell) == CellKind::Wall {
                self.set_kind(cell, CellKind::Empty);
                self.quadtree.remove(cell, ObjectKind::Wall);
                freed += 1;
            }
        }
        if freed > 0 {
            debug!("Freed {freed} cells of sector {region:?}");
            self.components_dirty = true;
        }
        freed
    }

    /// Flips sector fill mode. Switching it on upgrades every sector holding a wall to a fully
    /// walled sector.
    pub fn toggle_sector_fill_mode(&mut self) -> bool {
        self.sector_fill = !self.sector_fill;
        if self.sector_fill {
            let sectors = self
                .points()
                .filter(|&p| self.kind_at(p) == CellKind::Wall)
                .filter_map(|p| self.quadtree.sector_bounds(p))
                .unique()
                .collect::<Vec<Region>>();
            for region in sectors {
                self.fill_region(region);
            }
        }
        self.sector_fill
    }

    /// Resets path and visited overlays back to empty cells.
    pub fn clear_path_markings(&mut self) {
        let overlays = self
            .points()
            .filter(|&p| self.kind_at(p).is_overlay())
            .collect::<Vec<_>>();
        for point in overlays {
            self.set_kind(point, CellKind::Empty);
        }
    }

    /// Resets every [Node] for a new search, deriving walkability from the current cells.
    pub fn prepare_search_nodes(&mut self) {
        for point in self.points() {
            let walkable = self.kind_at(point).is_walkable();
            if let Some(node) = self.nodes.get_point_mut(point) {
                node.pos = point;
                node.reset(walkable);
            }
        }
    }

    /// In bounds and not a wall.
    pub fn is_valid_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells.get(x, y).is_walkable()
    }

    /// Marks an empty cell as visited; other kinds are left untouched.
    pub fn mark_visited(&mut self, point: Point) {
        if self.get(point) == Some(CellKind::Empty) {
            self.set_kind(point, CellKind::Visited);
        }
    }

    /// Marks an empty or visited cell as part of the path; markers and walls are left untouched.
    pub fn mark_path(&mut self, point: Point) {
        if self.get(point).is_some_and(CellKind::is_vacant) {
            self.set_kind(point, CellKind::Path);
        }
    }

    /// The 8 (or 4 without diagonals) surrounding points. Points are not bounds checked.
    pub fn neighborhood_points(
        &self,
        point: &Point,
        allow_diagonal: bool,
    ) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        if allow_diagonal {
            point.moore_neighborhood_smallvec()
        } else {
            point.neumann_neighborhood_smallvec()
        }
    }

    /// Discards all markers, nodes and the quadtree, then rebuilds the quadtree from the walls
    /// that remain. Display toggles and the search timer go back to their defaults.
    pub fn reset(&mut self) {
        for point in [self.start.take(), self.finish.take()].into_iter().flatten() {
            self.set_kind(point, CellKind::Empty);
        }
        self.clear_path_markings();
        self.prepare_search_nodes();
        self.quadtree = Grid::empty_quadtree(&self.config);
        let walls = self
            .points()
            .filter(|&p| self.kind_at(p) == CellKind::Wall)
            .collect::<Vec<_>>();
        for point in walls {
            self.quadtree
                .insert(CollisionObject::unit(ObjectKind::Wall, point));
        }
        self.show_visited_nodes = self.config.show_visited_nodes;
        self.show_visited_sectors = self.config.show_visited_sectors;
        self.sector_fill = false;
        self.last_search_duration = Duration::ZERO;
        self.components_dirty = true;
        info!(
            "Grid reset, {} walls re-indexed into {} quadtree nodes",
            self.quadtree.len(),
            self.quadtree.node_count()
        );
    }

    /// Unions a newly walkable cell with its walkable neighbours.
    fn join_components(&mut self, point: Point) {
        if self.components_dirty {
            return;
        }
        let p_ix = self.get_ix_point(&point);
        for n in self.neighborhood_points(&point, self.components_diagonal) {
            if self.is_valid_walkable(n.x, n.y) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(p_ix, n_ix);
            }
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable neighbours to the same
    /// components.
    pub fn generate_components(&mut self, allow_diagonal: bool) {
        self.components = UnionFind::new(self.width() * self.height());
        self.components_dirty = false;
        self.components_diagonal = allow_diagonal;
        let forward: &[(i32, i32)] = if allow_diagonal {
            &[(0, 1), (1, 0), (1, 1), (1, -1)]
        } else {
            &[(0, 1), (1, 0)]
        };
        for point in self.points() {
            if !self.kind_at(point).is_walkable() {
                continue;
            }
            let p_ix = self.get_ix_point(&point);
            for &(dx, dy) in forward {
                let (x, y) = (point.x + dx, point.y + dy);
                if self.is_valid_walkable(x, y) {
                    let n_ix = self.cells.compute_ix(x, y);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
    }

    /// Checks if start and goal are on the same connected component, regenerating the components
    /// first if walls were added or the movement mode changed.
    pub fn reachable(&mut self, start: &Point, goal: &Point, allow_diagonal: bool) -> bool {
        if self.components_dirty || self.components_diagonal != allow_diagonal {
            self.generate_components(allow_diagonal);
        }
        if self.point_in_bounds(*start) && self.point_in_bounds(*goal) {
            self.components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            false
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let line = (0..self.width() as i32)
                .map(|x| self.cells.get(x, y).symbol())
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Grid {
        Grid::with_size(3, 3)
    }

    #[test]
    fn set_wall_guards() {
        let mut grid = grid_3x3();
        grid.set_finish(Point::new(2, 2));
        grid.set_start(Point::new(0, 0));
        assert!(!grid.set_wall(Point::new(-1, 0)));
        assert!(!grid.set_wall(Point::new(3, 1)));
        assert!(!grid.set_wall(Point::new(2, 2)));
        assert!(!grid.set_wall(Point::new(0, 0)));
        assert!(grid.set_wall(Point::new(1, 1)));
        assert!(!grid.set_wall(Point::new(1, 1)));
        assert_eq!(grid.get(Point::new(1, 1)), Some(CellKind::Wall));
        assert!(grid
            .quadtree()
            .contains_object(Point::new(1, 1), ObjectKind::Wall));
    }

    #[test]
    fn set_wall_only_on_empty_cells() {
        let mut grid = grid_3x3();
        grid.mark_path(Point::new(1, 0));
        grid.mark_visited(Point::new(2, 0));
        assert!(!grid.set_wall(Point::new(1, 0)));
        assert!(!grid.set_wall(Point::new(2, 0)));
        assert_eq!(grid.get(Point::new(1, 0)), Some(CellKind::Path));
        assert_eq!(grid.get(Point::new(2, 0)), Some(CellKind::Visited));
        assert!(grid.quadtree().is_empty());
    }

    #[test]
    fn sector_fill_walls_over_start_but_not_finish() {
        let mut grid = Grid::with_size(128, 72);
        grid.set_start(Point::new(18, 11));
        grid.set_finish(Point::new(20, 12));
        grid.toggle_sector_fill_mode();
        assert!(grid.set_wall(Point::new(17, 10)));
        assert_eq!(grid.count(CellKind::Wall), 16 * 9 - 1);
        assert_eq!(grid.get(Point::new(18, 11)), Some(CellKind::Wall));
        assert_eq!(grid.get(Point::new(20, 12)), Some(CellKind::Finish));
        assert_eq!(grid.start(), None);
        assert!(!grid
            .quadtree()
            .contains_object(Point::new(18, 11), ObjectKind::Start));
        assert!(grid
            .quadtree()
            .contains_object(Point::new(18, 11), ObjectKind::Wall));
    }

    #[test]
    fn cells_are_stored_row_by_row() {
        let grid = Grid::with_size(4, 3);
        assert_eq!(grid.get_ix_point(&Point::new(1, 2)), 9);
        let points = grid.points().collect::<Vec<_>>();
        assert_eq!(points.len(), 12);
        assert_eq!(points[5], Point::new(1, 1));
        assert!(grid.nodes().zip(points).all(|(node, p)| node.pos == p));
    }

    #[test]
    fn clear_wall_is_idempotent() {
        let mut grid = grid_3x3();
        grid.set_wall(Point::new(1, 0));
        assert!(grid.clear_wall(Point::new(1, 0)));
        assert!(!grid.clear_wall(Point::new(1, 0)));
        assert_eq!(grid.get(Point::new(1, 0)), Some(CellKind::Empty));
        assert!(grid.quadtree().is_empty());
        assert!(!grid.clear_wall(Point::new(5, 5)));
    }

    #[test]
    fn single_start_and_finish() {
        let mut grid = grid_3x3();
        assert!(grid.set_start(Point::new(0, 0)));
        assert!(grid.set_start(Point::new(1, 0)));
        assert_eq!(grid.count(CellKind::Start), 1);
        assert_eq!(grid.get(Point::new(0, 0)), Some(CellKind::Empty));
        assert!(!grid
            .quadtree()
            .contains_object(Point::new(0, 0), ObjectKind::Start));
        assert!(grid.set_finish(Point::new(2, 2)));
        assert!(!grid.set_finish(Point::new(1, 0)));
        assert!(!grid.set_start(Point::new(2, 2)));
        assert!(!grid.set_start(Point::new(3, 3)));
        assert_eq!(grid.start(), Some(Point::new(1, 0)));
        assert_eq!(grid.finish(), Some(Point::new(2, 2)));
        assert_eq!(grid.quadtree().len(), 2);
    }

    #[test]
    fn marker_replaces_wall() {
        let mut grid = grid_3x3();
        grid.set_wall(Point::new(1, 1));
        assert!(grid.set_start(Point::new(1, 1)));
        assert_eq!(grid.get(Point::new(1, 1)), Some(CellKind::Start));
        assert!(!grid
            .quadtree()
            .contains_object(Point::new(1, 1), ObjectKind::Wall));
    }

    #[test]
    fn clear_path_markings_keeps_markers() {
        let mut grid = grid_3x3();
        grid.set_start(Point::new(0, 0));
        grid.set_wall(Point::new(2, 0));
        grid.mark_path(Point::new(1, 1));
        grid.mark_visited(Point::new(1, 2));
        grid.mark_visited(Point::new(0, 0));
        grid.mark_path(Point::new(2, 0));
        assert_eq!(grid.get(Point::new(0, 0)), Some(CellKind::Start));
        assert_eq!(grid.get(Point::new(2, 0)), Some(CellKind::Wall));
        grid.clear_path_markings();
        assert_eq!(grid.count(CellKind::Path), 0);
        assert_eq!(grid.count(CellKind::Visited), 0);
        assert_eq!(grid.count(CellKind::Start), 1);
        assert_eq!(grid.count(CellKind::Wall), 1);
    }

    #[test]
    fn prepare_search_nodes_derives_walkability() {
        let mut grid = grid_3x3();
        grid.set_wall(Point::new(1, 2));
        if let Some(node) = grid.node_mut(Point::new(0, 0)) {
            node.closed = true;
            node.parent = Some(Point::new(1, 1));
        }
        grid.prepare_search_nodes();
        for node in grid.nodes() {
            assert_eq!(node.walkable, node.pos != Point::new(1, 2));
            assert!(!node.closed && !node.opened && node.parent.is_none());
        }
        assert_eq!(grid.node(Point::new(2, 1)).unwrap().pos, Point::new(2, 1));
    }

    #[test]
    fn is_valid_walkable_checks_bounds_and_walls() {
        let mut grid = grid_3x3();
        grid.set_wall(Point::new(0, 1));
        assert!(grid.is_valid_walkable(0, 0));
        assert!(!grid.is_valid_walkable(0, 1));
        assert!(!grid.is_valid_walkable(-1, 0));
        assert!(!grid.is_valid_walkable(0, 3));
    }

    #[test]
    fn neighbourhood_sizes() {
        let grid = grid_3x3();
        let p = Point::new(1, 1);
        assert_eq!(grid.neighborhood_points(&p, true).len(), 8);
        let cross = grid.neighborhood_points(&p, false);
        assert_eq!(cross.len(), 4);
        assert!(cross.iter().all(|n| (n.x - p.x).abs() + (n.y - p.y).abs() == 1));
    }

    #[test]
    fn toggle_heuristic_round_trip() {
        let mut grid = grid_3x3();
        let original = grid.heuristic();
        grid.toggle_heuristic();
        grid.toggle_heuristic();
        assert_ne!(grid.heuristic(), original);
        grid.toggle_heuristic();
        assert_eq!(grid.heuristic(), original);
    }

    #[test]
    fn reachable_with_and_without_diagonals() {
        //  ___
        // | #|
        // |# |
        //  __
        let mut grid = Grid::with_size(2, 2);
        grid.set_wall(Point::new(1, 0));
        grid.set_wall(Point::new(0, 1));
        let start = Point::new(0, 0);
        let end = Point::new(1, 1);
        assert!(!grid.reachable(&start, &end, false));
        assert!(grid.reachable(&start, &end, true));
        grid.clear_wall(Point::new(1, 0));
        assert!(grid.reachable(&start, &end, false));
    }

    #[test]
    fn reset_rebuilds_quadtree_from_walls() {
        let mut grid = Grid::with_size(8, 8);
        grid.set_start(Point::new(0, 0));
        grid.set_finish(Point::new(7, 7));
        for x in 1..6 {
            grid.set_wall(Point::new(x, 3));
        }
        grid.mark_path(Point::new(6, 6));
        grid.toggle_show_visited_nodes();
        grid.toggle_show_visited_sectors();
        grid.toggle_sector_fill_mode();
        grid.record_search_duration(Duration::from_millis(3));
        let walls = grid.count(CellKind::Wall);

        grid.reset();
        assert_eq!(grid.start(), None);
        assert_eq!(grid.finish(), None);
        assert_eq!(grid.get(Point::new(0, 0)), Some(CellKind::Empty));
        assert_eq!(grid.get(Point::new(7, 7)), Some(CellKind::Empty));
        assert_eq!(grid.count(CellKind::Path), 0);
        assert_eq!(grid.count(CellKind::Wall), walls);
        assert_eq!(grid.quadtree().len(), walls);
        assert!(grid.quadtree().iter().all(|o| o.kind == ObjectKind::Wall));
        assert!(!grid.is_showing_visited_nodes());
        assert!(grid.is_showing_visited_sectors());
        assert!(!grid.is_filling_sectors());
        assert_eq!(grid.last_search_duration(), Duration::ZERO);
    }

    #[test]
    fn display_renders_symbols() {
        let mut grid = grid_3x3();
        grid.set_start(Point::new(0, 0));
        grid.set_finish(Point::new(2, 2));
        grid.set_wall(Point::new(1, 1));
        assert_eq!(grid.to_string(), "S..\n.#.\n..G\n");
    }
}
