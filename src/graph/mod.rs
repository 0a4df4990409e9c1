pub mod adjacency;
pub mod city;
pub mod traits;

pub use adjacency::{build_adjacency_list, is_reachable, AdjacencyList};
pub use city::{City, CityMap, NodeId, Road};
pub use traits::{Graph, Weight};
