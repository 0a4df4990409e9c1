#![allow(dead_code)]

use city_route::graph::Weight;
use city_route::{City, CityMap, NodeId, Road};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

pub fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

// Random connected map: a random spanning tree plus `extra_roads` chords.
// Weights include zero so that frontier ties are common.
pub fn random_connected_map(seed: u64, n: usize, extra_roads: usize) -> CityMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let cities: Vec<City> = (0..n)
        .map(|i| City::new(format!("N{}", i), format!("Node {}", i), 0.0, 0.0))
        .collect();

    let mut pairs = HashSet::new();
    let mut roads = Vec::new();
    let mut add_road = |a: usize, b: usize, weight: Weight, roads: &mut Vec<Road>| {
        let key = (a.min(b), a.max(b));
        if a != b && pairs.insert(key) {
            roads.push(Road::new(format!("N{}", a), format!("N{}", b), weight));
        }
    };

    for i in 1..n {
        let parent = rng.gen_range(0..i);
        let weight = rng.gen_range(0..=20);
        add_road(parent, i, weight, &mut roads);
    }
    for _ in 0..extra_roads {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=20);
        add_road(a, b, weight, &mut roads);
    }

    CityMap::new(cities, roads).unwrap()
}

// Two components: {A, B, C} and {X, Y}
pub fn disconnected_map() -> CityMap {
    let cities = vec![
        City::new("A", "Kota A", 0.0, 0.0),
        City::new("B", "Kota B", 1.0, 0.0),
        City::new("C", "Kota C", 2.0, 0.0),
        City::new("X", "Kota X", 0.0, 1.0),
        City::new("Y", "Kota Y", 1.0, 1.0),
    ];
    let roads = vec![
        Road::new("A", "B", 1),
        Road::new("B", "C", 2),
        Road::new("C", "A", 5),
        Road::new("X", "Y", 3),
    ];
    CityMap::new(cities, roads).unwrap()
}
