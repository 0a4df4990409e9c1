//! Presentation helpers: how a step colors the map, and a text frame renderer.

use colored::{ColoredString, Colorize};
use std::fmt;

use crate::algorithm::{Step, StepKind};
use crate::graph::{CityMap, NodeId};

/// Display state of a city at a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Unvisited,
    Current,
    Visited,
    OnPath,
}

impl NodeState {
    pub fn label(&self) -> &'static str {
        match self {
            NodeState::Unvisited => "unvisited",
            NodeState::Current => "current",
            NodeState::Visited => "visited",
            NodeState::OnPath => "route",
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self {
            NodeState::Unvisited => text.bright_blue(),
            NodeState::Current => text.bright_yellow().bold(),
            NodeState::Visited => text.bright_green(),
            NodeState::OnPath => text.bright_red().bold(),
        }
    }
}

/// Classifies a city. Being on the final route wins over being current, which
/// wins over being visited.
pub fn node_state(step: Option<&Step>, id: &NodeId) -> NodeState {
    let Some(step) = step else {
        return NodeState::Unvisited;
    };

    if step.path().map_or(false, |path| path.contains(id)) {
        NodeState::OnPath
    } else if step.current() == Some(id) {
        NodeState::Current
    } else if step.visited.contains(id) {
        NodeState::Visited
    } else {
        NodeState::Unvisited
    }
}

/// True when the road `from - to` is a hop of the completed route
pub fn edge_on_path(step: Option<&Step>, from: &NodeId, to: &NodeId) -> bool {
    let Some(path) = step.and_then(Step::path) else {
        return false;
    };

    let position = |id: &NodeId| path.iter().position(|p| p == id);
    match (position(from), position(to)) {
        (Some(a), Some(b)) => a.abs_diff(b) == 1,
        _ => false,
    }
}

/// Distance label such as `d:7`; `None` while the distance is infinite
pub fn distance_label(step: Option<&Step>, id: &NodeId) -> Option<String> {
    step.and_then(|step| step.distances.get(id))
        .and_then(|distance| distance.value())
        .map(|value| format!("d:{}", value))
}

/// One rendered frame: a line per city, the route roads once complete, then
/// the step message.
struct Frame<'a> {
    map: &'a CityMap,
    step: Option<&'a Step>,
    color: bool,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.step;

        for city in self.map.cities() {
            let state = node_state(step, &city.id);
            let label = format!("[{}] {:<8} {:<9}", city.id, city.name, state.label());
            let distance = distance_label(step, &city.id).unwrap_or_default();
            if self.color {
                writeln!(f, "  {} {}", state.paint(&label), distance)?;
            } else {
                writeln!(f, "  {} {}", label, distance)?;
            }
        }

        let route: Vec<String> = self
            .map
            .roads()
            .iter()
            .filter(|road| edge_on_path(step, &road.from, &road.to))
            .map(|road| format!("{}-{} ({})", road.from, road.to, road.weight))
            .collect();
        if !route.is_empty() {
            writeln!(f, "  roads: {}", route.join(", "))?;
        }

        let Some(step) = step else {
            return writeln!(f, "  > Pick a source and a destination to start.");
        };

        if self.color {
            writeln!(f, "  > {}", step.message.bold())?;
        } else {
            writeln!(f, "  > {}", step.message)?;
        }
        if let StepKind::Complete { path, distance } = &step.kind {
            let names: Vec<&str> = path.iter().map(NodeId::as_str).collect();
            writeln!(f, "  Route found: {} (total {})", names.join(" → "), distance)?;
        }
        Ok(())
    }
}

/// Renders one frame for `step`, or the idle frame when there is none
pub fn render_frame(map: &CityMap, step: Option<&Step>, color: bool) -> String {
    Frame { map, step, color }.to_string()
}
