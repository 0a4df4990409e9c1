//! User-facing validation in front of the engine.

use crate::algorithm::{run_dijkstra, StepLog};
use crate::graph::{build_adjacency_list, is_reachable, CityMap, NodeId};
use crate::{Error, Result};

/// Validates a source/destination pair and, if it is routable, runs the
/// instrumented engine.
///
/// Rejections happen before the engine is invoked: unknown cities, identical
/// endpoints, or a destination in another component.
pub fn plan_route(map: &CityMap, source: &NodeId, target: &NodeId) -> Result<StepLog> {
    for id in [source, target] {
        if !map.contains(id.as_str()) {
            return Err(Error::UnknownNode(id.clone()));
        }
    }

    if source == target {
        return Err(Error::SameEndpoints(source.clone()));
    }

    let adj = build_adjacency_list(map);
    if !is_reachable(&adj, source, target) {
        log::info!("rejected route {} -> {}: unreachable", source, target);
        return Err(Error::Unreachable {
            from: source.clone(),
            to: target.clone(),
        });
    }

    Ok(run_dijkstra(&adj, source, target))
}
