//! # nav_grid
//!
//! Discretizes a rectangular region of a y-up world into a uniform grid of square cells,
//! each baked once as walkable or blocked by sampling an [ObstacleQuery] at the cell
//! centre. The resulting [SpatialGrid] answers the two questions a grid pathfinder keeps
//! asking: which node is nearest to a world position, and which nodes surround a node.
//!
//! A reference A* ([AstarSearch]) is built on top of those queries, using the per-node
//! `g_cost`/`h_cost`/`parent` scratch fields. Connected components of the walkable cells
//! are computed during the bake so that unreachable goals are rejected without
//! flood-filling the grid.
//!
//! ```
//! use nav_grid::{AstarSearch, RegionSize, SpatialGrid, Vec3};
//!
//! // A 10x10 region with a pillar of radius 1 in the middle.
//! let pillar = |p: Vec3, r: f64| p.distance(&Vec3::ZERO) < 1.0 + r;
//! let mut grid = SpatialGrid::new(RegionSize::new(10.0, 10.0), 0.5, &pillar).unwrap();
//! assert!(!grid.resolve(Vec3::ZERO).walkable());
//!
//! let path = AstarSearch::new()
//!     .find_path(&mut grid, Vec3::planar(-3.5, -3.5), Vec3::planar(3.5, 3.5))
//!     .unwrap();
//! assert!(path.points.iter().all(|p| grid.node(*p).unwrap().walkable()));
//! ```
pub mod config;
pub mod error;
pub mod geometry;
pub mod node;
pub mod obstacle;
pub mod search;
pub mod spatial_grid;

pub use config::{GridConfig, NeighborBoundary};
pub use error::GridError;
pub use geometry::{RegionSize, Vec3};
pub use grid_util::point::Point;
pub use node::Node;
pub use obstacle::{BlockedCells, Obstacle, ObstacleQuery, SphereObstacles, ALL_LAYERS};
pub use search::{AstarSearch, Path};
pub use spatial_grid::SpatialGrid;

/// Cost of a straight step.
pub const C: i32 = 10;
/// Cost of a diagonal step, roughly `C * sqrt(2)`.
pub const D: i32 = 14;
/// Used in the octile distance, which simplifies to
/// `C * |dx - dy| + D * min(dx, dy)`.
pub const E: i32 = 2 * C - D;

/// Neighbourhoods have at most 8 cells, so they never spill onto the heap.
pub const N_SMALLVEC_SIZE: usize = 8;
