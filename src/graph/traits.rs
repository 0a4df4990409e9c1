use std::fmt::Debug;

use crate::graph::NodeId;

/// Non-negative road length. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// Trait representing a read-only weighted graph keyed by [`NodeId`]
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertices in declaration order
    fn vertices(&self) -> Box<dyn Iterator<Item = &NodeId> + '_>;

    /// Returns an iterator over the edges leaving a vertex, in insertion order
    fn neighbors(&self, vertex: &NodeId) -> Box<dyn Iterator<Item = (&NodeId, Weight)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &NodeId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &NodeId, to: &NodeId) -> Option<Weight> {
        self.neighbors(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}
