use nav_grid::{AstarSearch, BlockedCells, GridConfig, NeighborBoundary, Point, RegionSize, SpatialGrid, Vec3};

// In this example a path is found on a 3x3 region with shape
//  ___
// |  G|
// | # |
// |S  |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// The inclusive boundary lets the bottom row and left column be entered.

fn main() {
    let config = GridConfig::new(RegionSize::new(3.0, 3.0), 0.5)
        .with_boundary(NeighborBoundary::Inclusive);
    let blocked = BlockedCells::new(&config, [Point::new(1, 1)]);
    let mut grid = SpatialGrid::bake(config, &blocked).unwrap();
    println!("{}", grid);
    let path = AstarSearch::new()
        .find_path(&mut grid, Vec3::planar(-1.0, -1.0), Vec3::planar(1.0, 1.0))
        .unwrap();
    println!("Path (cost {}):", path.cost);
    for (p, w) in path.points.iter().zip(&path.world_positions) {
        println!("{} at {:?}", p, w);
    }
    println!("{}", grid.render_with_path(&path.points));
}
