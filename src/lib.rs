//! City Route - step-by-step Dijkstra over a fixed city map
//!
//! The engine runs single-source shortest-path search and, instead of only
//! returning the answer, records every state change as a replayable [`StepLog`].
//! A renderer replays the log one step per tick.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod replay;
pub mod route;
pub mod view;

pub use algorithm::{
    dijkstra::Dijkstra, run_dijkstra, Distance, ShortestPathAlgorithm, ShortestPathResult, Step,
    StepKind, StepLog,
};
/// Re-export main types for convenient use
pub use graph::{build_adjacency_list, is_reachable, AdjacencyList, City, CityMap, NodeId, Road};
pub use replay::{Replay, ReplayState};
pub use route::plan_route;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown city: {0}")]
    UnknownNode(NodeId),

    #[error("city {0} is defined more than once")]
    DuplicateNode(NodeId),

    #[error("invalid road: from {0} to {1}")]
    InvalidEdge(NodeId, NodeId),

    #[error("source vertex {0} not found in graph")]
    SourceNotFound(NodeId),

    #[error("source and destination must differ (both are {0})")]
    SameEndpoints(NodeId),

    #[error("no route connects {from} and {to}")]
    Unreachable { from: NodeId, to: NodeId },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
