pub mod dijkstra;
pub mod distance;
pub mod instrumented;
pub mod step;
pub mod traits;

pub use distance::Distance;
pub use instrumented::run_dijkstra;
pub use step::{Completion, Step, StepKind, StepLog};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
