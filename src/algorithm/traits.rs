use std::collections::{BTreeMap, HashSet};

use crate::algorithm::Distance;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult {
    /// Distances from source to each vertex
    pub distances: BTreeMap<NodeId, Distance>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: BTreeMap<NodeId, Option<NodeId>>,

    /// Source vertex ID
    pub source: NodeId,
}

impl ShortestPathResult {
    /// Distance to a vertex, `Infinite` for unknown or unreached vertices
    pub fn distance(&self, vertex: &NodeId) -> Distance {
        self.distances.get(vertex).copied().unwrap_or(Distance::Infinite)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &NodeId) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult, target: &NodeId) -> Option<Vec<NodeId>> {
        if !result.distance(target).is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while *current != result.source {
            if !visited.insert(current) {
                log::warn!("cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current.clone());
            match result.predecessors.get(current) {
                Some(Some(pred)) => current = pred,
                // Reached a vertex with no predecessor that is not the source
                _ => return None,
            }
        }

        path.push(result.source.clone());
        path.reverse();

        Some(path)
    }
}
