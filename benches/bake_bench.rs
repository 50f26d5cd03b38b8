use criterion::{criterion_group, criterion_main, Criterion};
use nav_grid::*;
use rand::prelude::*;
use std::hint::black_box;

fn scattered_pillars(n: usize, region: f64, rng: &mut StdRng) -> SphereObstacles {
    (0..n)
        .map(|_| {
            let x = rng.gen_range(-region / 2.0..region / 2.0);
            let z = rng.gen_range(-region / 2.0..region / 2.0);
            Obstacle::new(Vec3::planar(x, z), rng.gen_range(0.5..3.0))
        })
        .collect()
}

fn bake_and_search(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for (region, radius) in [(64.0, 0.5), (256.0, 0.5)] {
        let obstacles = scattered_pillars(region as usize, region, &mut rng);
        let config = GridConfig::new(RegionSize::new(region, region), radius);
        c.bench_function(format!("bake {region}x{region}, r={radius}").as_str(), |b| {
            b.iter(|| black_box(SpatialGrid::bake(config.clone(), &obstacles).unwrap()))
        });

        let mut grid = SpatialGrid::bake(config, &obstacles).unwrap();
        let search = AstarSearch::new();
        let start = Vec3::planar(-region / 2.0 + 1.0, -region / 2.0 + 1.0);
        let goal = Vec3::planar(region / 2.0 - 1.0, region / 2.0 - 1.0);
        c.bench_function(format!("astar {region}x{region}, corner to corner").as_str(), |b| {
            b.iter(|| black_box(search.find_path(&mut grid, start, goal)))
        });
    }
}

criterion_group!(benches, bake_and_search);
criterion_main!(benches);
