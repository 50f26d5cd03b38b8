use crate::geometry::Vec3;
use grid_util::point::Point;

/// One baked cell of a [SpatialGrid](crate::spatial_grid::SpatialGrid).
///
/// Walkability, position and grid coordinates are fixed at bake time and only readable.
/// The scratch fields `g_cost`, `h_cost` and `parent` belong to whichever search currently
/// holds the grid mutably and are meaningless outside of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    walkable: bool,
    world_position: Vec3,
    grid_x: usize,
    grid_y: usize,
    /// Cost from the search start to this node.
    pub g_cost: i32,
    /// Heuristic estimate of the remaining cost to the goal.
    pub h_cost: i32,
    /// Grid coordinate of the node this one was reached from.
    pub parent: Option<Point>,
}

impl Node {
    pub fn new(walkable: bool, world_position: Vec3, grid_x: usize, grid_y: usize) -> Node {
        Node {
            walkable,
            world_position,
            grid_x,
            grid_y,
            g_cost: 0,
            h_cost: 0,
            parent: None,
        }
    }

    pub fn walkable(&self) -> bool {
        self.walkable
    }

    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    pub fn grid_x(&self) -> usize {
        self.grid_x
    }

    pub fn grid_y(&self) -> usize {
        self.grid_y
    }

    pub fn point(&self) -> Point {
        Point::new(self.grid_x as i32, self.grid_y as i32)
    }

    /// Search priority, `g_cost + h_cost`.
    #[inline]
    pub fn f_cost(&self) -> i32 {
        self.g_cost + self.h_cost
    }

    pub fn reset_search(&mut self) {
        self.g_cost = 0;
        self.h_cost = 0;
        self.parent = None;
    }
}
