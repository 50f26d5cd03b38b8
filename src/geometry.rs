//! World-space types. The world is y-up: a grid lies in the horizontal x/z plane and the
//! vertical y coordinate of every node is fixed by the grid's origin.

/// A position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// Shorthand for a point on the ground plane (`y == 0`).
    pub const fn planar(x: f64, z: f64) -> Vec3 {
        Vec3 { x, y: 0.0, z }
    }

    pub fn distance_squared(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    pub fn distance(&self, other: &Vec3) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Extent of the discretized region: `width` runs along world x, `depth` along world z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionSize {
    pub width: f64,
    pub depth: f64,
}

impl RegionSize {
    pub const fn new(width: f64, depth: f64) -> RegionSize {
        RegionSize { width, depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance_squared(&a), 25.0);
    }
}
