use grid_util::point::Point;

/// Per-cell search bookkeeping. One [Node] exists for every cell of a [Grid](crate::grid::Grid)
/// and is reset before every search.
///
/// `parent` is the position of the predecessor on the cheapest known route, looked up in the same
/// grid. Following parents from any reached node ends at the start node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub pos: Point,
    /// Cost from the start.
    pub g: i32,
    /// Heuristic estimate to the finish.
    pub h: i32,
    pub walkable: bool,
    pub opened: bool,
    pub closed: bool,
    pub parent: Option<Point>,
}

impl Node {
    pub fn new(pos: Point, walkable: bool) -> Node {
        Node {
            pos,
            g: 0,
            h: 0,
            walkable,
            opened: false,
            closed: false,
            parent: None,
        }
    }

    pub fn f(&self) -> i32 {
        self.g + self.h
    }

    /// Clears all search state while keeping the position.
    pub fn reset(&mut self, walkable: bool) {
        *self = Node::new(self.pos, walkable);
    }
}

impl Default for Node {
    fn default() -> Node {
        Node::new(Point::new(0, 0), true)
    }
}
