use std::collections::{HashMap, HashSet};

use crate::graph::traits::{Graph, Weight};
use crate::graph::{CityMap, NodeId};

/// Undirected graph stored as adjacency lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    /// Vertices in declaration order
    nodes: Vec<NodeId>,

    /// Neighbors of each vertex: vertex_id -> [(neighbor, weight)]
    edges: HashMap<NodeId, Vec<(NodeId, Weight)>>,

    /// Number of undirected roads
    road_count: usize,
}

impl AdjacencyList {
    /// Vertices in declaration order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Neighbor list of a vertex, empty for unknown vertices
    pub fn neighbor_list(&self, vertex: &NodeId) -> &[(NodeId, Weight)] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Builds the adjacency list of a city map.
///
/// Each road `{u, v, w}` yields `(v, w)` in u's list and `(u, w)` in v's list.
/// Per-vertex order follows road input order.
pub fn build_adjacency_list(map: &CityMap) -> AdjacencyList {
    let nodes: Vec<NodeId> = map.cities().iter().map(|city| city.id.clone()).collect();
    let mut edges: HashMap<NodeId, Vec<(NodeId, Weight)>> = nodes
        .iter()
        .map(|id| (id.clone(), Vec::new()))
        .collect();

    for road in map.roads() {
        edges
            .entry(road.from.clone())
            .or_default()
            .push((road.to.clone(), road.weight));
        edges
            .entry(road.to.clone())
            .or_default()
            .push((road.from.clone(), road.weight));
    }

    AdjacencyList {
        nodes,
        edges,
        road_count: map.roads().len(),
    }
}

/// Depth-first reachability check with an explicit stack.
///
/// Returns true as soon as `target` is popped. Vertices unknown to `adj` have no
/// neighbors, so only `source == target` can succeed for them.
pub fn is_reachable(adj: &AdjacencyList, source: &NodeId, target: &NodeId) -> bool {
    let mut stack = vec![source];
    let mut visited = HashSet::new();

    while let Some(vertex) = stack.pop() {
        if vertex == target {
            return true;
        }
        if !visited.insert(vertex) {
            continue;
        }
        for (neighbor, _) in adj.neighbor_list(vertex) {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    log::trace!("{} is not reachable from {}", target, source);
    false
}

impl Graph for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.road_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &NodeId> + '_> {
        Box::new(self.nodes.iter())
    }

    fn neighbors(&self, vertex: &NodeId) -> Box<dyn Iterator<Item = (&NodeId, Weight)> + '_> {
        if let Some(edges) = self.edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &NodeId) -> bool {
        self.edges.contains_key(vertex)
    }
}
