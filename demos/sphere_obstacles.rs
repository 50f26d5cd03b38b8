use nav_grid::{AstarSearch, GridConfig, Obstacle, RegionSize, SpatialGrid, SphereObstacles, Vec3};

const TERRAIN: u8 = 0;
const DECORATION: u8 = 5;

// Bakes a 20x20 region around a few pillars. Only the terrain layer is in the mask, so the
// decorative pillar in the middle does not block anything.
fn main() {
    let mut obstacles = SphereObstacles::new(1 << TERRAIN);
    obstacles.push(Obstacle::new(Vec3::planar(-4.0, 2.0), 2.5).on_layer(TERRAIN));
    obstacles.push(Obstacle::new(Vec3::planar(5.0, -3.0), 3.0).on_layer(TERRAIN));
    obstacles.push(Obstacle::new(Vec3::planar(0.0, 0.0), 1.5).on_layer(DECORATION));

    let mut grid = SpatialGrid::bake(GridConfig::new(RegionSize::new(20.0, 20.0), 0.5), &obstacles).unwrap();
    let start = Vec3::planar(-8.5, -8.5);
    let goal = Vec3::planar(8.5, 8.5);
    match AstarSearch::new().find_path(&mut grid, start, goal) {
        Some(path) => {
            println!("Found a path of {} nodes with cost {}", path.len(), path.cost);
            println!("{}", grid.render_with_path(&path.points));
        }
        None => println!("No path from {:?} to {:?}\n{}", start, goal, grid),
    }
}
