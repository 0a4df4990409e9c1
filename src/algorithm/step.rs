//! Replayable record of an instrumented shortest-path run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::Distance;
use crate::graph::NodeId;

/// What happened at a step, with the vertices involved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    /// Tables initialized, search starts from `current`
    Init { current: NodeId },

    /// `current` was extracted from the frontier and finalized at `distance`
    Visiting { current: NodeId, distance: Distance },

    /// The edge `current -> neighbor` improved `neighbor` to `distance`
    Update {
        current: NodeId,
        neighbor: NodeId,
        distance: Distance,
    },

    /// Search finished; `path` runs from source to target
    Complete { path: Vec<NodeId>, distance: Distance },
}

/// Immutable snapshot of the algorithm state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub kind: StepKind,
    /// Full copy of the distance table at this instant
    pub distances: BTreeMap<NodeId, Distance>,
    /// Full copy of the finalized set at this instant
    pub visited: BTreeSet<NodeId>,
    pub message: String,
}

impl Step {
    /// The vertex being acted on. `Complete` steps have none.
    pub fn current(&self) -> Option<&NodeId> {
        match &self.kind {
            StepKind::Init { current }
            | StepKind::Visiting { current, .. }
            | StepKind::Update { current, .. } => Some(current),
            StepKind::Complete { .. } => None,
        }
    }

    /// The reconstructed path, present only on the `Complete` step
    pub fn path(&self) -> Option<&[NodeId]> {
        match &self.kind {
            StepKind::Complete { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.kind, StepKind::Complete { .. })
    }

    /// Distance of `vertex` in this step's snapshot
    pub fn distance_of(&self, vertex: &NodeId) -> Distance {
        self.distances.get(vertex).copied().unwrap_or(Distance::Infinite)
    }
}

/// Final answer carried by the `Complete` step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion<'a> {
    pub path: &'a [NodeId],
    pub distance: Distance,
}

/// Ordered, append-only sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step) {
        log::trace!("step {}: {}", self.steps.len(), step.message);
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Path and distance of the final `Complete` step
    pub fn completion(&self) -> Option<Completion<'_>> {
        match self.steps.last().map(|step| &step.kind) {
            Some(StepKind::Complete { path, distance }) => Some(Completion {
                path,
                distance: *distance,
            }),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for StepLog {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
