mod common;

use city_route::graph::{Graph, Weight};
use city_route::{build_adjacency_list, is_reachable, City, CityMap, Error, Road};
use common::{disconnected_map, id, random_connected_map};

#[test]
fn test_kota_map_passes_validation() {
    let kota = CityMap::kota();
    let rebuilt = CityMap::new(kota.cities().to_vec(), kota.roads().to_vec());
    assert!(rebuilt.is_ok(), "built-in map should be valid");
    assert_eq!(kota.cities().len(), 7);
    assert_eq!(kota.roads().len(), 10);
    assert_eq!(kota.city("D").map(|c| c.name.as_str()), Some("Kota D"));
}

#[test]
fn test_map_rejects_unknown_city() {
    let cities = vec![City::new("A", "Kota A", 0.0, 0.0)];
    let roads = vec![Road::new("A", "Z", 3)];
    assert_eq!(
        CityMap::new(cities, roads).unwrap_err(),
        Error::UnknownNode(id("Z"))
    );
}

#[test]
fn test_map_rejects_duplicate_city() {
    let cities = vec![
        City::new("A", "Kota A", 0.0, 0.0),
        City::new("A", "Kota A again", 1.0, 1.0),
    ];
    assert_eq!(
        CityMap::new(cities, vec![]).unwrap_err(),
        Error::DuplicateNode(id("A"))
    );
}

#[test]
fn test_map_rejects_self_loop() {
    let cities = vec![City::new("A", "Kota A", 0.0, 0.0)];
    let roads = vec![Road::new("A", "A", 1)];
    assert!(matches!(
        CityMap::new(cities, roads),
        Err(Error::InvalidEdge(_, _))
    ));
}

#[test]
fn test_adjacency_preserves_road_order() {
    let adj = build_adjacency_list(&CityMap::kota());

    let order: Vec<(&str, Weight)> = adj
        .neighbors(&id("C"))
        .map(|(v, w)| (v.as_str(), w))
        .collect();
    assert_eq!(order, vec![("A", 2), ("B", 1), ("D", 8), ("F", 10)]);
    assert!(adj.has_edge(&id("C"), &id("F")));
    assert!(adj.has_edge(&id("F"), &id("C")));
    assert!(!adj.has_edge(&id("A"), &id("G")));

    let nodes: Vec<&str> = adj.nodes().iter().map(|n| n.as_str()).collect();
    assert_eq!(nodes, vec!["A", "B", "C", "D", "E", "F", "G"]);
    assert_eq!(adj.vertex_count(), 7);
    assert_eq!(adj.edge_count(), 10);
}

#[test]
fn test_adjacency_is_symmetric() {
    let maps = vec![
        CityMap::kota(),
        disconnected_map(),
        random_connected_map(7, 30, 40),
    ];

    for map in &maps {
        let adj = build_adjacency_list(map);
        for u in adj.nodes() {
            for (v, w) in adj.neighbors(u) {
                assert_eq!(
                    adj.edge_weight(v, u),
                    Some(w),
                    "edge {}-{} should appear in both lists with the same weight",
                    u,
                    v
                );
            }
        }
    }
}

#[test]
fn test_isolated_city_has_empty_list() {
    let cities = vec![
        City::new("A", "Kota A", 0.0, 0.0),
        City::new("B", "Kota B", 1.0, 0.0),
        City::new("Z", "Kota Z", 2.0, 0.0),
    ];
    let map = CityMap::new(cities, vec![Road::new("A", "B", 1)]).unwrap();
    let adj = build_adjacency_list(&map);

    assert!(adj.has_vertex(&id("Z")));
    assert!(adj.neighbor_list(&id("Z")).is_empty());
    assert!(!is_reachable(&adj, &id("A"), &id("Z")));
}

#[test]
fn test_reachability_on_connected_map() {
    let adj = build_adjacency_list(&CityMap::kota());
    for s in adj.nodes() {
        for t in adj.nodes() {
            assert!(is_reachable(&adj, s, t), "{} should reach {}", s, t);
        }
    }
}

#[test]
fn test_reachability_on_disconnected_map() {
    let adj = build_adjacency_list(&disconnected_map());

    assert!(is_reachable(&adj, &id("A"), &id("C")));
    assert!(is_reachable(&adj, &id("X"), &id("Y")));
    assert!(!is_reachable(&adj, &id("A"), &id("Y")));
    assert!(!is_reachable(&adj, &id("Y"), &id("B")));
    assert!(is_reachable(&adj, &id("X"), &id("X")));
}

#[test]
fn test_reachability_is_symmetric() {
    let adj = build_adjacency_list(&disconnected_map());
    for s in adj.nodes() {
        for t in adj.nodes() {
            assert_eq!(is_reachable(&adj, s, t), is_reachable(&adj, t, s));
        }
    }
}

#[test]
fn test_reachability_unknown_city() {
    let adj = build_adjacency_list(&CityMap::kota());
    assert!(!is_reachable(&adj, &id("A"), &id("Q")));
    assert!(!is_reachable(&adj, &id("Q"), &id("A")));
}
