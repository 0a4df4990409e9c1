use city_route::{build_adjacency_list, run_dijkstra, City, CityMap, NodeId, Road};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Square grid of cities with unit-ish weights; large enough to show the cost
// of copying full snapshots on every step.
fn grid_map(side: usize) -> CityMap {
    let name = |x: usize, y: usize| format!("{}_{}", x, y);
    let mut cities = Vec::with_capacity(side * side);
    let mut roads = Vec::new();

    for y in 0..side {
        for x in 0..side {
            cities.push(City::new(name(x, y), name(x, y), x as f64, y as f64));
            if x + 1 < side {
                roads.push(Road::new(name(x, y), name(x + 1, y), ((x + y) % 5 + 1) as u32));
            }
            if y + 1 < side {
                roads.push(Road::new(name(x, y), name(x, y + 1), ((x * y) % 7 + 1) as u32));
            }
        }
    }

    CityMap::new(cities, roads).expect("grid map is valid")
}

fn bench_kota(c: &mut Criterion) {
    let adj = build_adjacency_list(&CityMap::kota());
    let (source, target) = (NodeId::from("A"), NodeId::from("G"));

    c.bench_function("kota A->G", |b| {
        b.iter(|| run_dijkstra(black_box(&adj), &source, &target))
    });
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid corner to corner");
    for side in [5usize, 10, 20] {
        let adj = build_adjacency_list(&grid_map(side));
        let source = NodeId::from("0_0");
        let target = NodeId::from(format!("{}_{}", side - 1, side - 1));

        group.bench_with_input(BenchmarkId::from_parameter(side * side), &adj, |b, adj| {
            b.iter(|| run_dijkstra(black_box(adj), &source, &target))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kota, bench_grid);
criterion_main!(benches);
