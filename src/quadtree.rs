//! Spatial index over the wall, start and finish markers of a grid.
//!
//! The tree lives in an arena: nodes are stored in a [Vec] and addressed by index. Lookups hand
//! out those indices as opaque [SectorId]s, which stay valid for the lifetime of the tree since
//! subdivision only ever appends nodes and never merges them back.
use grid_util::point::Point;
use itertools::iproduct;
use log::debug;

/// An axis-aligned rectangle of cells. Containment is half-open: the left and top edges belong to
/// the region, the right and bottom edges do not, so the four quadrants of a region never share a
/// cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Region {
        Region { x, y, w, h }
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    pub fn area(&self) -> usize {
        (self.w.max(0) * self.h.max(0)) as usize
    }

    /// Splits the region into NW, NE, SW and SE quadrants. Odd sizes put the extra column/row in
    /// the eastern/southern quadrants.
    pub fn quadrants(&self) -> [Region; 4] {
        let hw = self.w / 2;
        let hh = self.h / 2;
        [
            Region::new(self.x, self.y, hw, hh),
            Region::new(self.x + hw, self.y, self.w - hw, hh),
            Region::new(self.x, self.y + hh, hw, self.h - hh),
            Region::new(self.x + hw, self.y + hh, self.w - hw, self.h - hh),
        ]
    }

    /// All cells of the region in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        iproduct!(self.x..self.x + self.w, self.y..self.y + self.h).map(|(x, y)| Point::new(x, y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Wall,
    Start,
    Finish,
}

/// A marker occupying a rectangle of cells, a single cell for everything the grid inserts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionObject {
    pub kind: ObjectKind,
    pub bounds: Region,
}

impl CollisionObject {
    pub fn new(kind: ObjectKind, bounds: Region) -> CollisionObject {
        CollisionObject { kind, bounds }
    }

    pub fn unit(kind: ObjectKind, pos: Point) -> CollisionObject {
        CollisionObject::new(kind, Region::new(pos.x, pos.y, 1, 1))
    }

    /// The cell used to route the object through the tree.
    pub fn center(&self) -> Point {
        Point::new(
            self.bounds.x + self.bounds.w / 2,
            self.bounds.y + self.bounds.h / 2,
        )
    }
}

/// Handle to a node of a [QuadTree], returned by lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectorId(usize);

impl SectorId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct QuadNode {
    region: Region,
    depth: u32,
    objects: Vec<CollisionObject>,
    children: Option<[usize; 4]>,
}

impl QuadNode {
    fn new(region: Region, depth: u32) -> QuadNode {
        QuadNode {
            region,
            depth,
            objects: Vec::new(),
            children: None,
        }
    }
}

/// Quadtree over a rectangular region of cells. A node stores up to `capacity` objects and
/// subdivides into four quadrants once that is exceeded, unless it sits at `max_depth`, in which
/// case it keeps accepting objects. Objects always end up in leaves.
#[derive(Clone, Debug)]
pub struct QuadTree {
    nodes: Vec<QuadNode>,
    capacity: usize,
    max_depth: u32,
    len: usize,
}

impl QuadTree {
    pub fn new(bounds: Region, capacity: usize, max_depth: u32) -> QuadTree {
        QuadTree {
            nodes: vec![QuadNode::new(bounds, 0)],
            capacity,
            max_depth,
            len: 0,
        }
    }

    pub fn bounds(&self) -> Region {
        self.nodes[0].region
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of objects stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of tree nodes, internal ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts an object into the leaf containing its center. Returns false if the center lies
    /// outside the tree.
    pub fn insert(&mut self, object: CollisionObject) -> bool {
        if !self.bounds().contains(&object.center()) {
            return false;
        }
        self.insert_at(0, object);
        self.len += 1;
        true
    }

    fn insert_at(&mut self, mut ix: usize, object: CollisionObject) {
        let center = object.center();
        loop {
            let node = &self.nodes[ix];
            if let Some(children) = node.children {
                match self.child_containing(children, &center) {
                    Some(child) => ix = child,
                    None => {
                        self.nodes[ix].objects.push(object);
                        return;
                    }
                }
            } else if node.objects.len() < self.capacity || node.depth >= self.max_depth {
                self.nodes[ix].objects.push(object);
                return;
            } else {
                self.subdivide(ix);
            }
        }
    }

    fn child_containing(&self, children: [usize; 4], point: &Point) -> Option<usize> {
        children
            .into_iter()
            .find(|&child| self.nodes[child].region.contains(point))
    }

    /// Splits a leaf into four children and moves its objects down into them.
    fn subdivide(&mut self, ix: usize) {
        let region = self.nodes[ix].region;
        let depth = self.nodes[ix].depth + 1;
        debug!("Subdividing quadtree node {ix} at depth {} ({region:?})", depth - 1);
        let first = self.nodes.len();
        self.nodes.extend(
            region
                .quadrants()
                .into_iter()
                .map(|quadrant| QuadNode::new(quadrant, depth)),
        );
        self.nodes[ix].children = Some([first, first + 1, first + 2, first + 3]);
        let objects = std::mem::take(&mut self.nodes[ix].objects);
        for object in objects {
            self.insert_at(ix, object);
        }
    }

    /// Removes the object of the given kind whose center is `pos`.
    pub fn remove(&mut self, pos: Point, kind: ObjectKind) -> Option<CollisionObject> {
        let ix = self.find_region(pos)?.0;
        let objects = &mut self.nodes[ix].objects;
        let found = objects
            .iter()
            .position(|o| o.kind == kind && o.center() == pos)?;
        self.len -= 1;
        Some(objects.swap_remove(found))
    }

    pub fn contains_object(&self, pos: Point, kind: ObjectKind) -> bool {
        self.find_region(pos)
            .map(|id| {
                self.nodes[id.0]
                    .objects
                    .iter()
                    .any(|o| o.kind == kind && o.center() == pos)
            })
            .unwrap_or(false)
    }

    /// The deepest existing node whose region contains `point`, or [None] if the point is outside
    /// the tree.
    pub fn find_region(&self, point: Point) -> Option<SectorId> {
        if !self.bounds().contains(&point) {
            return None;
        }
        let mut ix = 0;
        while let Some(children) = self.nodes[ix].children {
            match self.child_containing(children, &point) {
                Some(child) => ix = child,
                None => break,
            }
        }
        Some(SectorId(ix))
    }

    /// The region at `max_depth` containing `point`, whether or not the tree has been subdivided
    /// that far yet. This is the unit of bulk sector editing.
    pub fn sector_bounds(&self, point: Point) -> Option<Region> {
        let mut region = self.bounds();
        if !region.contains(&point) {
            return None;
        }
        for _ in 0..self.max_depth {
            region = region
                .quadrants()
                .into_iter()
                .find(|quadrant| quadrant.contains(&point))?;
        }
        Some(region)
    }

    pub fn region(&self, id: SectorId) -> Option<Region> {
        self.nodes.get(id.0).map(|node| node.region)
    }

    pub fn depth(&self, id: SectorId) -> Option<u32> {
        self.nodes.get(id.0).map(|node| node.depth)
    }

    /// Objects stored directly in the node, empty for internal nodes.
    pub fn objects(&self, id: SectorId) -> &[CollisionObject] {
        self.nodes
            .get(id.0)
            .map(|node| node.objects.as_slice())
            .unwrap_or(&[])
    }

    pub fn children(&self, id: SectorId) -> Option<[SectorId; 4]> {
        self.nodes
            .get(id.0)
            .and_then(|node| node.children)
            .map(|c| c.map(SectorId))
    }

    pub fn leaves(&self) -> impl Iterator<Item = SectorId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.children.is_none())
            .map(|(ix, _)| SectorId(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionObject> + '_ {
        self.nodes.iter().flat_map(|node| node.objects.iter())
    }
}
