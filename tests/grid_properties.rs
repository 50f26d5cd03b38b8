use nav_grid::*;
use proptest::prelude::*;

fn open(_: Vec3, _: f64) -> bool {
    false
}

fn solid(_: Vec3, _: f64) -> bool {
    true
}

#[test]
fn twenty_by_twenty_scenario() {
    let grid = SpatialGrid::new(RegionSize::new(20.0, 20.0), 0.5, &open).unwrap();
    assert_eq!((grid.count_x(), grid.count_y()), (20, 20));

    let start = grid.config().start_position();
    let corner = grid.get(0, 0).unwrap().world_position();
    assert_eq!(corner, Vec3::new(start.x + 0.5, start.y, start.z + 0.5));
    assert_eq!(corner, Vec3::new(-9.5, 0.0, -9.5));

    let center = grid.get(1, 1).unwrap();
    let neighbors: Vec<Point> = grid
        .neighbors(center)
        .unwrap()
        .iter()
        .map(|n| n.point())
        .collect();
    assert_eq!(
        neighbors,
        vec![Point::new(1, 2), Point::new(2, 1), Point::new(2, 2)]
    );
}

#[test]
fn predicate_decides_walkability() {
    let blocked = SpatialGrid::new(RegionSize::new(8.0, 5.0), 0.5, &solid).unwrap();
    assert!(blocked.nodes().all(|n| !n.walkable()));
    let free = SpatialGrid::new(RegionSize::new(8.0, 5.0), 0.5, &open).unwrap();
    assert!(free.nodes().all(|n| n.walkable()));
}

#[test]
fn obstacle_query_sees_radius_and_centre() {
    let mut seen = Vec::new();
    let recorder = |p: Vec3, r: f64| {
        assert_eq!(r, 0.25);
        p.x > 0.0 && p.z > 0.0
    };
    let grid = SpatialGrid::new(RegionSize::new(2.0, 2.0), 0.25, &recorder).unwrap();
    for node in grid.nodes() {
        seen.push((node.point(), node.walkable()));
    }
    assert_eq!(seen.len(), 16);
    assert!(!grid.get(3, 3).unwrap().walkable());
    assert!(grid.get(0, 3).unwrap().walkable());
}

#[test]
fn sphere_obstacles_bake_with_origin() {
    let origin = Vec3::new(100.0, 2.0, 50.0);
    let config = GridConfig::new(RegionSize::new(6.0, 6.0), 0.5).with_origin(origin);
    let mut obstacles = SphereObstacles::new(1 << 3);
    obstacles.push(Obstacle::new(Vec3::new(100.5, 2.0, 50.5), 0.3).on_layer(3));
    obstacles.push(Obstacle::new(Vec3::new(98.5, 2.0, 48.5), 0.3).on_layer(4));
    let grid = SpatialGrid::bake(config, &obstacles).unwrap();
    let blocked: Vec<Point> = grid
        .nodes()
        .filter(|n| !n.walkable())
        .map(|n| n.point())
        .collect();
    assert_eq!(blocked, vec![Point::new(3, 3)]);
    assert!(grid.nodes().all(|n| n.world_position().y == 2.0));
}

#[test]
fn resolve_ignores_the_grid_origin() {
    let config = GridConfig::new(RegionSize::new(5.0, 5.0), 0.5)
        .with_origin(Vec3::new(100.0, 0.0, 50.0));
    let grid = SpatialGrid::bake(config, &open).unwrap();
    assert_eq!(grid.resolve(Vec3::ZERO).point(), Point::new(2, 2));
    // Node centres sit around (100, 50), far past the world-origin footprint.
    let corner = grid.get(0, 0).unwrap();
    assert_eq!(corner.world_position(), Vec3::new(98.0, 0.0, 48.0));
    assert_eq!(grid.resolve(corner.world_position()).point(), Point::new(4, 4));
    assert_eq!(grid.resolve_point(Vec3::planar(0.0, f64::NAN)), Point::new(2, 0));
}

#[test]
fn degenerate_configs_produce_no_grid() {
    for (w, d, r) in [(20.0, 20.0, 0.0), (20.0, 20.0, -0.5), (0.0, 20.0, 0.5), (20.0, -1.0, 0.5)] {
        let err = SpatialGrid::new(RegionSize::new(w, d), r, &open).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig { .. }));
    }
}

fn arb_boundary() -> impl Strategy<Value = NeighborBoundary> {
    prop_oneof![
        Just(NeighborBoundary::ExcludeMinEdge),
        Just(NeighborBoundary::Inclusive),
    ]
}

proptest! {
    #[test]
    fn counts_match_rounding(w in 1u32..60, d in 1u32..60, r in prop_oneof![Just(0.25), Just(0.5), Just(1.0)]) {
        let (w, d) = (w as f64, d as f64);
        prop_assume!((w / (2.0 * r)).round_ties_even() >= 1.0 && (d / (2.0 * r)).round_ties_even() >= 1.0);
        let grid = SpatialGrid::new(RegionSize::new(w, d), r, &open).unwrap();
        prop_assert_eq!(grid.count_x(), (w / (2.0 * r)).round_ties_even() as usize);
        prop_assert_eq!(grid.count_y(), (d / (2.0 * r)).round_ties_even() as usize);
        prop_assert_eq!(grid.nodes().count(), grid.count_x() * grid.count_y());
    }

    #[test]
    fn nodes_round_trip(nx in 1usize..25, ny in 1usize..25, r in prop_oneof![Just(0.25), Just(0.5), Just(2.0)]) {
        let d = 2.0 * r;
        let config = GridConfig::new(RegionSize::new(nx as f64 * d, ny as f64 * d), r);
        let grid = SpatialGrid::bake(config.clone(), &open).unwrap();
        for x in 0..grid.count_x() {
            for y in 0..grid.count_y() {
                let node = grid.get(x, y).unwrap();
                prop_assert_eq!((node.grid_x(), node.grid_y()), (x, y));
                prop_assert_eq!(node.world_position(), config.cell_center(x, y));
                prop_assert_eq!(grid.resolve(node.world_position()), node);
            }
        }
    }

    #[test]
    fn resolve_never_fails(px in -1e6f64..1e6, pz in -1e6f64..1e6, nx in 1usize..15, ny in 1usize..15) {
        let grid = SpatialGrid::new(RegionSize::new(nx as f64, ny as f64), 0.5, &open).unwrap();
        let p = grid.resolve_point(Vec3::planar(px, pz));
        prop_assert!(grid.point_in_bounds(p));
    }

    #[test]
    fn neighbors_are_adjacent_and_admitted(
        nx in 1usize..12,
        ny in 1usize..12,
        boundary in arb_boundary(),
        sx in 0usize..12,
        sy in 0usize..12,
    ) {
        let config = GridConfig::new(RegionSize::new(nx as f64, ny as f64), 0.5).with_boundary(boundary);
        let grid = SpatialGrid::bake(config, &open).unwrap();
        let node = grid.get(sx % nx, sy % ny).unwrap();
        let neighbors = grid.neighbors(node).unwrap();
        prop_assert!(neighbors.len() <= 8);
        for n in &neighbors {
            prop_assert_ne!(*n, node);
            let dx = n.grid_x() as i64 - node.grid_x() as i64;
            let dy = n.grid_y() as i64 - node.grid_y() as i64;
            prop_assert!(dx.abs() <= 1 && dy.abs() <= 1);
            if boundary == NeighborBoundary::ExcludeMinEdge {
                prop_assert!(n.grid_x() > 0 && n.grid_y() > 0);
            }
        }
        if boundary == NeighborBoundary::Inclusive {
            let x = node.grid_x() as i64;
            let y = node.grid_y() as i64;
            let span = |v: i64, count: usize| (v - 1).max(0)..=(v + 1).min(count as i64 - 1);
            let expected = span(x, nx).count() * span(y, ny).count() - 1;
            prop_assert_eq!(neighbors.len(), expected);
        }
    }

    #[test]
    fn f_cost_is_the_sum(g in -10_000i32..10_000, h in -10_000i32..10_000) {
        let mut node = Node::new(true, Vec3::ZERO, 0, 0);
        node.g_cost = g;
        node.h_cost = h;
        prop_assert_eq!(node.f_cost(), g + h);
    }
}
