use std::collections::BTreeMap;

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm, without step recording.
///
/// Computes the full single-source tree; used as the reference the instrumented
/// engine is checked against.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &NodeId) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source.clone()));
        }

        // Initialize distances and predecessors
        let mut distances: BTreeMap<NodeId, Distance> = graph
            .vertices()
            .map(|v| (v.clone(), Distance::Infinite))
            .collect();
        let mut predecessors: BTreeMap<NodeId, Option<NodeId>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();

        distances.insert(source.clone(), Distance::ZERO);

        let mut queue = Frontier::new();
        queue.push(source.clone(), Distance::ZERO);

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if distances.get(&u).map_or(false, |current| *current < dist_u) {
                continue;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.neighbors(&u) {
                let new_dist = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or(Distance::Infinite);

                if new_dist < current {
                    distances.insert(v.clone(), new_dist);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
