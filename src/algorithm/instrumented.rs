use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::{Distance, Step, StepKind, StepLog};
use crate::data_structures::Frontier;
use crate::graph::{AdjacencyList, Graph, NodeId};

/// Mutable state of one instrumented run. Each emitted step copies the
/// distance table and visited set.
#[derive(Debug)]
struct StepRecorder<'a> {
    adj: &'a AdjacencyList,
    distances: BTreeMap<NodeId, Distance>,
    predecessors: BTreeMap<NodeId, NodeId>,
    visited: BTreeSet<NodeId>,
    frontier: Frontier<NodeId, Distance>,
    log: StepLog,
}

impl<'a> StepRecorder<'a> {
    fn new(adj: &'a AdjacencyList, source: &NodeId) -> Self {
        let mut distances: BTreeMap<NodeId, Distance> = adj
            .nodes()
            .iter()
            .map(|id| (id.clone(), Distance::Infinite))
            .collect();
        distances.insert(source.clone(), Distance::ZERO);

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), Distance::ZERO);

        Self {
            adj,
            distances,
            predecessors: BTreeMap::new(),
            visited: BTreeSet::new(),
            frontier,
            log: StepLog::new(),
        }
    }

    fn distance(&self, vertex: &NodeId) -> Distance {
        self.distances.get(vertex).copied().unwrap_or(Distance::Infinite)
    }

    fn record(&mut self, kind: StepKind, message: String) {
        self.log.push(Step {
            kind,
            distances: self.distances.clone(),
            visited: self.visited.clone(),
            message,
        });
    }

    /// Pops entries until an unvisited vertex appears, discarding stale ones
    fn next_unvisited(&mut self) -> Option<(NodeId, Distance)> {
        while let Some((vertex, distance)) = self.frontier.pop() {
            if !self.visited.contains(&vertex) {
                return Some((vertex, distance));
            }
        }
        None
    }

    fn relax_neighbors(&mut self, current: &NodeId) {
        let adj = self.adj;
        let base = self.distance(current);

        for (neighbor, weight) in adj.neighbors(current) {
            if self.visited.contains(neighbor) {
                continue;
            }

            let candidate = base + weight;
            if candidate < self.distance(neighbor) {
                self.distances.insert(neighbor.clone(), candidate);
                self.predecessors.insert(neighbor.clone(), current.clone());
                self.frontier.push(neighbor.clone(), candidate);
                self.record(
                    StepKind::Update {
                        current: current.clone(),
                        neighbor: neighbor.clone(),
                        distance: candidate,
                    },
                    format!("Update {}: {}", neighbor, candidate),
                );
            }
        }
    }

    /// Follows predecessors back from `target` and reverses
    fn reconstruct_path(&self, target: &NodeId) -> Vec<NodeId> {
        let mut path = vec![target.clone()];
        let mut current = target;

        while let Some(pred) = self.predecessors.get(current) {
            path.push(pred.clone());
            current = pred;
        }

        path.reverse();
        path
    }

    fn run(mut self, source: &NodeId, target: &NodeId) -> StepLog {
        self.record(
            StepKind::Init {
                current: source.clone(),
            },
            format!("Start from {}", source),
        );

        while let Some((current, distance)) = self.next_unvisited() {
            self.visited.insert(current.clone());
            self.record(
                StepKind::Visiting {
                    current: current.clone(),
                    distance,
                },
                format!("Visiting {} at distance {}", current, distance),
            );

            if current == *target {
                break;
            }

            self.relax_neighbors(&current);
        }

        let path = self.reconstruct_path(target);
        let distance = self.distance(target);
        log::debug!(
            "route {} -> {} settled at {} after {} steps",
            source,
            target,
            distance,
            self.log.len() + 1
        );

        self.record(
            StepKind::Complete { path, distance },
            format!("Done! Shortest distance: {}", distance),
        );
        self.log
    }
}

/// Runs Dijkstra from `source` to `target`, recording every state change.
///
/// The caller guarantees that both vertices are in `adj`, that they differ and
/// that `target` is reachable (see [`crate::route::plan_route`]). The returned log
/// starts with one `Init` step and ends with one `Complete` step.
pub fn run_dijkstra(adj: &AdjacencyList, source: &NodeId, target: &NodeId) -> StepLog {
    debug_assert!(adj.has_vertex(source), "unknown source {}", source);
    debug_assert!(adj.has_vertex(target), "unknown target {}", target);
    debug_assert_ne!(source, target, "source and target must differ");

    StepRecorder::new(adj, source).run(source, target)
}
