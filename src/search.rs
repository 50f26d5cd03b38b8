//! A* over a baked [SpatialGrid], driven entirely through its public queries. The search
//! keeps its bookkeeping in the nodes' scratch fields, which is why it needs the grid
//! mutably: at most one search can run over a grid at a time.
use crate::geometry::Vec3;
use crate::spatial_grid::SpatialGrid;
use crate::{C, D, E};
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, warn};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    point: Point,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then prefers the larger cost, which is the node
        // with the smaller heuristic and so closer to the goal
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

impl<K: Zero> SmallestCostHolder<K> {
    fn start(point: Point, estimated_cost: K) -> Self {
        SmallestCostHolder {
            estimated_cost,
            cost: Zero::zero(),
            point,
        }
    }
}

/// A path through the grid, from the start node to the goal node.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
    pub world_positions: Vec<Vec3>,
    /// Total cost in the integer step units of [C] and [D].
    pub cost: i32,
    /// Cells whose neighbours were expanded, in expansion order.
    pub expanded: Vec<Point>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Cost of a single step between two adjacent cells.
pub fn step_cost(p1: &Point, p2: &Point) -> i32 {
    if p1.x != p2.x && p1.y != p2.y {
        D
    } else {
        C
    }
}

/// Cost of the cheapest obstacle-free route between two cells.
pub fn octile_distance(p1: &Point, p2: &Point) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    // Formula from https://github.com/riscy/a_star_on_grids
    // to efficiently compute the cost of a path taking the maximal amount
    // of diagonal steps before going straight
    (E * (delta_x - delta_y).abs() + D * (delta_x + delta_y)) / 2
}

#[derive(Clone, Debug)]
pub struct AstarSearch {
    pub heuristic_factor: f32,
}

impl Default for AstarSearch {
    fn default() -> Self {
        AstarSearch::new()
    }
}

impl AstarSearch {
    pub fn new() -> AstarSearch {
        AstarSearch {
            heuristic_factor: 1.0,
        }
    }

    /// The octile distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        (octile_distance(p1, p2) as f32 * self.heuristic_factor) as i32
    }

    /// Resolves both world positions to their nearest cells and searches between them.
    pub fn find_path(&self, grid: &mut SpatialGrid, start: Vec3, goal: Vec3) -> Option<Path> {
        let start = grid.resolve_point(start);
        let goal = grid.resolve_point(goal);
        self.find_path_between(grid, start, goal)
    }

    /// Searches from `start` to `goal`, skipping blocked cells. Returns `None` if either end
    /// is outside the grid or blocked, or if no path exists.
    pub fn find_path_between(
        &self,
        grid: &mut SpatialGrid,
        start: Point,
        goal: Point,
    ) -> Option<Path> {
        // Check if start and goal are on the same connected component.
        if grid.unreachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return None;
        }
        debug!("{} is reachable from {}, computing path", goal, start);
        grid.reset_search_state();

        let h = self.heuristic(&start, &goal);
        grid.node_mut(start)?.h_cost = h;
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder::start(start, h));
        let mut closed: FxIndexSet<Point> = FxIndexSet::default();

        while let Some(SmallestCostHolder { cost, point, .. }) = to_see.pop() {
            if point == goal {
                return self.retrace(grid, start, goal, closed.into_iter().collect());
            }
            // A cell may sit in the heap several times if a cheaper route to it turned up
            // later; only the entry matching its current cost is live.
            if cost > grid.node(point)?.g_cost || !closed.insert(point) {
                continue;
            }
            let neighbors = grid.neighbor_points(point).ok()?;
            for successor in neighbors {
                if closed.contains(&successor) {
                    continue;
                }
                let node = grid.node(successor)?;
                if !node.walkable() {
                    continue;
                }
                let new_cost = cost + step_cost(&point, &successor);
                let seen = node.parent.is_some() || successor == start;
                if seen && node.g_cost <= new_cost {
                    continue;
                }
                let h = self.heuristic(&successor, &goal);
                let node = grid.node_mut(successor)?;
                node.g_cost = new_cost;
                node.h_cost = h;
                node.parent = Some(point);
                to_see.push(SmallestCostHolder {
                    estimated_cost: node.f_cost(),
                    cost: new_cost,
                    point: successor,
                });
            }
        }
        warn!("Reachable goal could not be pathed to, is reachable graph correct?");
        None
    }

    /// Walks parent links back from the goal.
    fn retrace(
        &self,
        grid: &SpatialGrid,
        start: Point,
        goal: Point,
        expanded: Vec<Point>,
    ) -> Option<Path> {
        let mut points: Vec<Point> = std::iter::successors(Some(goal), |p| {
            if *p == start {
                None
            } else {
                grid.node(*p).and_then(|n| n.parent)
            }
        })
        .collect();
        points.reverse();
        if points.first() != Some(&start) {
            warn!("Parent chain from {} does not lead back to {}", goal, start);
            return None;
        }
        let world_positions = points
            .iter()
            .map(|p| grid.node(*p).map(|n| n.world_position()))
            .collect::<Option<Vec<_>>>()?;
        let cost = grid.node(goal)?.g_cost;
        Some(Path {
            points,
            world_positions,
            cost,
            expanded,
        })
    }
}
