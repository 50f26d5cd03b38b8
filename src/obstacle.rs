//! Obstacle tests sampled while baking. The grid only ever asks one question: does a sphere
//! of the cell radius around a cell centre touch anything?
use crate::config::GridConfig;
use crate::geometry::Vec3;
use fxhash::FxHashSet;
use grid_util::point::Point;

/// Layer mask matching every layer.
pub const ALL_LAYERS: u32 = u32::MAX;

/// Capability used by the bake step to decide walkability. Must be free of side effects.
pub trait ObstacleQuery {
    /// Returns true if an obstacle overlaps the sphere at `center` with the given `radius`.
    fn is_blocked(&self, center: Vec3, radius: f64) -> bool;
}

impl<F> ObstacleQuery for F
where
    F: Fn(Vec3, f64) -> bool,
{
    fn is_blocked(&self, center: Vec3, radius: f64) -> bool {
        self(center, radius)
    }
}

/// A precomputed set of blocked cells. A sample is blocked when its centre falls inside one
/// of them; samples outside the layout's footprint are free.
#[derive(Clone, Debug)]
pub struct BlockedCells {
    layout: GridConfig,
    cells: FxHashSet<Point>,
}

impl BlockedCells {
    pub fn new<I>(layout: &GridConfig, cells: I) -> BlockedCells
    where
        I: IntoIterator<Item = Point>,
    {
        BlockedCells {
            layout: layout.clone(),
            cells: cells.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, cell: Point) -> bool {
        self.cells.insert(cell)
    }

    pub fn remove(&mut self, cell: &Point) -> bool {
        self.cells.remove(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl ObstacleQuery for BlockedCells {
    fn is_blocked(&self, center: Vec3, _radius: f64) -> bool {
        self.layout
            .cell_containing(&center)
            .is_some_and(|cell| self.cells.contains(&cell))
    }
}

/// A spherical obstacle assigned to one of 32 layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub center: Vec3,
    pub radius: f64,
    pub layer: u8,
}

impl Obstacle {
    pub fn new(center: Vec3, radius: f64) -> Obstacle {
        Obstacle {
            center,
            radius,
            layer: 0,
        }
    }

    pub fn on_layer(mut self, layer: u8) -> Obstacle {
        self.layer = layer;
        self
    }

    /// Spheres that merely touch do not overlap.
    pub fn overlaps(&self, center: &Vec3, radius: f64) -> bool {
        let reach = self.radius + radius;
        self.center.distance_squared(center) < reach * reach
    }
}

/// Sphere obstacles filtered by a layer mask; only obstacles whose layer bit is set in
/// `layer_mask` block anything.
#[derive(Clone, Debug, Default)]
pub struct SphereObstacles {
    pub obstacles: Vec<Obstacle>,
    pub layer_mask: u32,
}

impl SphereObstacles {
    pub fn new(layer_mask: u32) -> SphereObstacles {
        SphereObstacles {
            obstacles: Vec::new(),
            layer_mask,
        }
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    fn in_mask(&self, obstacle: &Obstacle) -> bool {
        obstacle.layer < 32 && self.layer_mask & (1 << obstacle.layer) != 0
    }
}

impl FromIterator<Obstacle> for SphereObstacles {
    fn from_iter<T: IntoIterator<Item = Obstacle>>(iter: T) -> Self {
        SphereObstacles {
            obstacles: iter.into_iter().collect(),
            layer_mask: ALL_LAYERS,
        }
    }
}

impl ObstacleQuery for SphereObstacles {
    fn is_blocked(&self, center: Vec3, radius: f64) -> bool {
        self.obstacles
            .iter()
            .any(|o| self.in_mask(o) && o.overlaps(&center, radius))
    }
}
