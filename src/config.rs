use crate::error::GridError;
use crate::geometry::{RegionSize, Vec3};
use crate::node::Node;
use grid_util::point::Point;
use std::mem::size_of;

/// Which grid coordinates may be returned as a neighbour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighborBoundary {
    /// A neighbour must satisfy `0 < x < count_x` and `0 < y < count_y`, so nodes on the
    /// first row and column are never returned as anyone's neighbour. This is the behaviour
    /// existing path data was produced with.
    #[default]
    ExcludeMinEdge,
    /// Every in-bounds cell is a valid neighbour (`0 <= x < count_x`, `0 <= y < count_y`).
    Inclusive,
}

impl NeighborBoundary {
    /// Whether a node at `(x, y)` may be returned as a neighbour on a `count_x` by `count_y` grid.
    #[inline]
    pub fn admits(&self, x: i32, y: i32, count_x: usize, count_y: usize) -> bool {
        let min = match self {
            NeighborBoundary::ExcludeMinEdge => 1,
            NeighborBoundary::Inclusive => 0,
        };
        x >= min && y >= min && (x as i64) < count_x as i64 && (y as i64) < count_y as i64
    }
}

/// Everything needed to bake a [SpatialGrid](crate::spatial_grid::SpatialGrid) besides the
/// obstacles themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub region_size: RegionSize,
    /// Half the edge length of one square cell.
    pub cell_radius: f64,
    /// Position the region is centred on.
    pub origin: Vec3,
    pub boundary: NeighborBoundary,
}

impl GridConfig {
    pub fn new(region_size: RegionSize, cell_radius: f64) -> GridConfig {
        GridConfig {
            region_size,
            cell_radius,
            origin: Vec3::ZERO,
            boundary: NeighborBoundary::default(),
        }
    }

    pub fn with_origin(mut self, origin: Vec3) -> GridConfig {
        self.origin = origin;
        self
    }

    pub fn with_boundary(mut self, boundary: NeighborBoundary) -> GridConfig {
        self.boundary = boundary;
        self
    }

    pub fn cell_diameter(&self) -> f64 {
        self.cell_radius * 2.0
    }

    /// Number of cells along x and y. Fails if either count rounds below one or the total
    /// would not fit in memory indices.
    pub fn grid_counts(&self) -> Result<(usize, usize), GridError> {
        if !(self.cell_radius.is_finite() && self.cell_radius > 0.0) {
            return Err(GridError::invalid_config(format!(
                "cell radius must be positive and finite, got {}",
                self.cell_radius
            )));
        }
        let RegionSize { width, depth } = self.region_size;
        if !(width.is_finite() && width > 0.0 && depth.is_finite() && depth > 0.0) {
            return Err(GridError::invalid_config(format!(
                "region size must be positive and finite, got {width}x{depth}"
            )));
        }
        if !self.origin.is_finite() {
            return Err(GridError::invalid_config("origin must be finite"));
        }
        let count_x = axis_count(width, self.cell_diameter(), "x")?;
        let count_y = axis_count(depth, self.cell_diameter(), "y")?;
        let fits = count_x
            .checked_mul(count_y)
            .and_then(|cells| cells.checked_mul(size_of::<Node>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(GridError::invalid_config(format!(
                "{count_x}x{count_y} cells exceed the addressable node storage"
            )));
        }
        Ok((count_x, count_y))
    }

    /// World position of the lower corner of cell `(0, 0)`.
    pub fn start_position(&self) -> Vec3 {
        Vec3::new(
            self.origin.x - self.region_size.width / 2.0,
            self.origin.y,
            self.origin.z - self.region_size.depth / 2.0,
        )
    }

    /// Sample point of cell `(i, j)`: its geometric centre.
    pub fn cell_center(&self, i: usize, j: usize) -> Vec3 {
        let start = self.start_position();
        let d = self.cell_diameter();
        Vec3::new(
            start.x + (i as f64 * d + self.cell_radius),
            start.y,
            start.z + (j as f64 * d + self.cell_radius),
        )
    }

    /// The cell whose square footprint contains `position`, ignoring the vertical axis.
    /// Returns `None` outside the baked footprint.
    pub fn cell_containing(&self, position: &Vec3) -> Option<Point> {
        let (count_x, count_y) = self.grid_counts().ok()?;
        let start = self.start_position();
        let d = self.cell_diameter();
        let fx = ((position.x - start.x) / d).floor();
        let fy = ((position.z - start.z) / d).floor();
        if fx >= 0.0 && fy >= 0.0 && fx < count_x as f64 && fy < count_y as f64 {
            Some(Point::new(fx as i32, fy as i32))
        } else {
            None
        }
    }
}

fn axis_count(extent: f64, diameter: f64, axis: &str) -> Result<usize, GridError> {
    // Ties go to even, matching the rounding the region sizes were authored against.
    let count = (extent / diameter).round_ties_even();
    if count < 1.0 {
        return Err(GridError::invalid_config(format!(
            "{extent} / {diameter} rounds to zero cells along {axis}"
        )));
    }
    if count > i32::MAX as f64 {
        return Err(GridError::invalid_config(format!(
            "{count} cells along {axis} exceed the coordinate range"
        )));
    }
    Ok(count as usize)
}
