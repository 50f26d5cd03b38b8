use nav_grid::{BlockedCells, GridConfig, Point, RegionSize, SpatialGrid, Vec3};

// Shows the neighbourhood of a few nodes on a grid baked from a precomputed set of blocked
// cells. Blocked neighbours are listed too; it is up to a search to skip them.
fn main() {
    let config = GridConfig::new(RegionSize::new(5.0, 5.0), 0.5);
    let blocked = BlockedCells::new(&config, (1..4).map(|y| Point::new(2, y)));
    let grid = SpatialGrid::bake(config, &blocked).unwrap();
    println!("{}", grid);
    for position in [Vec3::planar(-2.0, -2.0), Vec3::planar(0.0, 0.0), Vec3::planar(9.0, 9.0)] {
        let node = grid.resolve(position);
        println!("{:?} resolves to {}", position, node.point());
        for n in grid.neighbors(node).unwrap() {
            let state = if n.walkable() { "walkable" } else { "blocked" };
            println!("  {} ({})", n.point(), state);
        }
    }
}
