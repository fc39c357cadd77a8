//! A* over the [Node]s of a [Grid]. Unlike a map-based search this works in place on the grid's
//! nodes, which carry the open/closed flags, scores and parent positions, so the parent tree can
//! be inspected after the search and a new search only needs
//! [prepare_search_nodes](Grid::prepare_search_nodes).
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::node::Node;
use crate::{C, D};
use grid_util::point::Point;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    pos: Point,
}

impl<K: Ord> Eq for SmallestCostHolder<K> {}

impl<K: Ord> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the largest cost (so the smallest
        // heuristic) and finally the lexicographically smallest (y, x).
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => (other.pos.y, other.pos.x).cmp(&(self.pos.y, self.pos.x)),
                s => s,
            },
            s => s,
        }
    }
}

fn holder(node: &Node) -> SmallestCostHolder<i32> {
    SmallestCostHolder {
        estimated_cost: node.f(),
        cost: node.g,
        pos: node.pos,
    }
}

pub(crate) struct AstarOutcome {
    /// Cells strictly between start and goal, goal side first.
    pub path: Vec<Point>,
    pub reached_goal: bool,
    pub expansions: usize,
}

impl AstarOutcome {
    fn unreached(expansions: usize) -> AstarOutcome {
        AstarOutcome {
            path: Vec::new(),
            reached_goal: false,
            expansions,
        }
    }
}

/// Runs A* from `start` to `goal`, both of which must be in bounds and distinct. The nodes must
/// have been prepared beforehand. Closed nodes are never reopened.
///
/// When the grid shows visited nodes, every walkable neighbour looked at is marked
/// [Visited](crate::cell::CellKind::Visited).
pub(crate) fn astar_grid(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    heuristic: Heuristic,
    allow_diagonal: bool,
    max_expansions: usize,
) -> AstarOutcome {
    let mark_visited = grid.is_showing_visited_nodes();

    let mut to_see = BinaryHeap::new();
    if let Some(node) = grid.node_mut(start) {
        node.g = Zero::zero();
        node.h = heuristic.estimate(&start, &goal);
        node.opened = true;
        to_see.push(holder(node));
    }

    let mut expansions = 0;
    while let Some(SmallestCostHolder { cost, pos, .. }) = to_see.pop() {
        if pos == goal {
            let parent_of = |p: &Point| grid.node(*p).and_then(|node| node.parent);
            let path = std::iter::successors(parent_of(&goal), parent_of)
                .take_while(|&p| p != start)
                .collect();
            return AstarOutcome {
                path,
                reached_goal: true,
                expansions,
            };
        }
        match grid.node(pos) {
            // A node may sit in the heap several times if a cheaper way to it was found later.
            Some(current) if !current.closed && cost <= current.g => {}
            _ => continue,
        }
        if expansions >= max_expansions {
            warn!("Search from {start} to {goal} hit the cap of {max_expansions} expansions");
            return AstarOutcome::unreached(expansions);
        }
        expansions += 1;
        if let Some(current) = grid.node_mut(pos) {
            current.opened = false;
            current.closed = true;
        }

        for neighbour in grid.neighborhood_points(&pos, allow_diagonal) {
            if !grid.is_valid_walkable(neighbour.x, neighbour.y) {
                continue;
            }
            if mark_visited {
                grid.mark_visited(neighbour);
            }
            let step = if neighbour.x != pos.x && neighbour.y != pos.y {
                D
            } else {
                C
            };
            let new_cost = cost + step;
            let Some(node) = grid.node_mut(neighbour) else {
                continue;
            };
            if node.closed || !node.walkable || (node.opened && node.g <= new_cost) {
                continue;
            }
            if !node.opened {
                node.h = heuristic.estimate(&neighbour, &goal);
                node.opened = true;
            }
            node.g = new_cost;
            node.parent = Some(pos);
            to_see.push(holder(node));
        }
    }
    AstarOutcome::unreached(expansions)
}
