//! Core type definitions
//!
//! This module contains the data structures shared by both detectors, with
//! minimal logic - focusing on data representation.

use std::fmt;

/// Identifier of a process in a wait-for graph
pub type NodeId = i64;

/// A wait-for edge: process `from` is blocked on a resource held by `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((from, to): (NodeId, NodeId)) -> Self {
        Self::new(from, to)
    }
}

/// One witness cycle found in a wait-for graph
///
/// A non-empty path is always closed: its first and last node are the same,
/// and every consecutive pair is an edge of the graph it was found in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CyclePath(Vec<NodeId>);

impl CyclePath {
    /// Wrap a node sequence, rejecting sequences that do not close on
    /// themselves. The empty sequence is accepted and means "no cycle".
    pub fn new(nodes: Vec<NodeId>) -> Option<Self> {
        match (nodes.first(), nodes.last()) {
            (None, None) => Some(Self(nodes)),
            (Some(first), Some(last)) if nodes.len() >= 2 && first == last => Some(Self(nodes)),
            _ => None,
        }
    }

    pub(crate) fn closed(nodes: Vec<NodeId>) -> Self {
        debug_assert!(nodes.len() >= 2 && nodes.first() == nodes.last());
        Self(nodes)
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive pairs of the path, i.e. the edges walked by the cycle
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.0.windows(2).map(|pair| Edge::new(pair[0], pair[1]))
    }

    /// Distinct processes on the cycle, in path order
    pub fn members(&self) -> Vec<NodeId> {
        let mut members: Vec<NodeId> = Vec::with_capacity(self.0.len());
        for &node in &self.0 {
            if !members.contains(&node) {
                members.push(node);
            }
        }
        members
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }
}

impl fmt::Display for CyclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.0.iter().map(process_label).collect();
        write!(f, "{}", labels.join(" → "))
    }
}

/// Evidence attached to a deadlock verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlockEvidence {
    /// Witness cycle from the wait-for graph detector
    Cycle(CyclePath),
    /// Indices of the processes that can never finish, ascending
    Processes(Vec<usize>),
}

/// Outcome of one detection pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionResult {
    Safe,
    Deadlock(DeadlockEvidence),
}

impl DetectionResult {
    pub fn is_safe(&self) -> bool {
        matches!(self, DetectionResult::Safe)
    }

    pub fn is_deadlock(&self) -> bool {
        !self.is_safe()
    }

    pub fn cycle(&self) -> Option<&CyclePath> {
        match self {
            DetectionResult::Deadlock(DeadlockEvidence::Cycle(cycle)) => Some(cycle),
            _ => None,
        }
    }

    pub fn processes(&self) -> Option<&[usize]> {
        match self {
            DetectionResult::Deadlock(DeadlockEvidence::Processes(processes)) => Some(processes),
            _ => None,
        }
    }
}

/// Which detector produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    WaitForGraph,
    Banker,
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorKind::WaitForGraph => write!(f, "wait-for"),
            DetectorKind::Banker => write!(f, "banker"),
        }
    }
}

/// Display label for a process, e.g. `P3`
pub fn process_label<T: fmt::Display>(id: T) -> String {
    format!("P{id}")
}
