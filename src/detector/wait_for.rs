use std::collections::HashMap;

use crate::core::{CyclePath, DeadlockEvidence, DetectionResult, Edge, NodeId};

/// Directed wait-for graph built from an edge list
///
/// Process ids are mapped once, in order of first appearance in the flattened
/// edge sequence, onto a dense index space. Successor lists keep input order,
/// duplicates included.
#[derive(Debug, Clone, Default)]
pub struct WaitForGraph {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    successors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl WaitForGraph {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            let from = graph.intern(edge.from);
            let to = graph.intern(edge.to);
            graph.successors[from].push(to);
            graph.edge_count += 1;
        }
        graph
    }

    fn intern(&mut self, node: NodeId) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.successors.push(Vec::new());
        self.index.insert(node, idx);
        idx
    }

    /// Every process id, in first-appearance order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Successors of `node` in input order; empty for unknown nodes
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index
            .get(&node)
            .into_iter()
            .flat_map(move |&idx| self.successors[idx].iter().map(move |&s| self.nodes[s]))
    }

    /// All edges grouped by source node, sources in first-appearance order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.successors.iter().enumerate().flat_map(move |(from, targets)| {
            targets
                .iter()
                .map(move |&to| Edge::new(self.nodes[from], self.nodes[to]))
        })
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

struct Frame {
    node: usize,
    next: usize,
}

/// Depth-first traversal state for one detection pass
struct Traversal<'g> {
    graph: &'g WaitForGraph,
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    path: Vec<usize>,
}

impl<'g> Traversal<'g> {
    fn new(graph: &'g WaitForGraph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            visited: vec![false; n],
            on_stack: vec![false; n],
            path: Vec::new(),
        }
    }

    fn enter(&mut self, node: usize) -> Frame {
        self.visited[node] = true;
        self.on_stack[node] = true;
        self.path.push(node);
        Frame { node, next: 0 }
    }

    fn leave(&mut self, node: usize) {
        self.on_stack[node] = false;
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(node));
    }

    /// Explore everything reachable from `root`, stopping at the first
    /// back-edge. Returns the witness cycle closed by that back-edge.
    fn explore(&mut self, root: usize) -> Option<CyclePath> {
        let mut stack = vec![self.enter(root)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match self.graph.successors[node].get(frame.next).copied() {
                Some(succ) => {
                    frame.next += 1;
                    if !self.visited[succ] {
                        stack.push(self.enter(succ));
                    } else if self.on_stack[succ] {
                        return Some(self.close_cycle(succ));
                    }
                }
                None => {
                    self.leave(node);
                    stack.pop();
                }
            }
        }

        None
    }

    /// The back-edge target is on the path; the cycle is the path suffix
    /// starting there, closed with the target again.
    fn close_cycle(&self, target: usize) -> CyclePath {
        let start = self
            .path
            .iter()
            .position(|&n| n == target)
            .unwrap_or_default();
        let mut nodes: Vec<NodeId> = self.path[start..]
            .iter()
            .map(|&idx| self.graph.nodes[idx])
            .collect();
        nodes.push(self.graph.nodes[target]);
        CyclePath::closed(nodes)
    }
}

/// Search `graph` for a cycle, scanning start nodes in first-appearance order
pub fn find_cycle(graph: &WaitForGraph) -> Option<CyclePath> {
    let mut traversal = Traversal::new(graph);
    (0..graph.node_count()).find_map(|root| {
        if traversal.visited[root] {
            None
        } else {
            traversal.explore(root)
        }
    })
}

/// Detects circular waits in a wait-for graph
///
/// Runs an iterative depth-first search that tracks which nodes are on the
/// active path; the first edge back into the path is reported as the witness
/// cycle. The witness is *a* cycle, not necessarily the shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct WaitForGraphDetector;

impl WaitForGraphDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, edges: &[Edge]) -> DetectionResult {
        self.detect_in(&WaitForGraph::from_edges(edges))
    }

    pub fn detect_in(&self, graph: &WaitForGraph) -> DetectionResult {
        match find_cycle(graph) {
            Some(cycle) => DetectionResult::Deadlock(DeadlockEvidence::Cycle(cycle)),
            None => DetectionResult::Safe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(NodeId, NodeId)]) -> Vec<Edge> {
        pairs.iter().copied().map(Edge::from).collect()
    }

    fn witness(pairs: &[(NodeId, NodeId)]) -> Option<Vec<NodeId>> {
        WaitForGraphDetector::new()
            .detect(&edges(pairs))
            .cycle()
            .map(|c| c.nodes().to_vec())
    }

    #[test]
    fn test_graph_node_order_follows_first_appearance() {
        let graph = WaitForGraph::from_edges(&edges(&[(5, 3), (3, 9), (1, 5)]));

        assert_eq!(graph.nodes(), &[5, 3, 9, 1]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains(9));
        assert!(!graph.contains(2));
    }

    #[test]
    fn test_graph_successors_keep_input_order_and_duplicates() {
        let graph = WaitForGraph::from_edges(&edges(&[(1, 3), (1, 2), (1, 3)]));

        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![3, 2, 3]);
        assert_eq!(graph.successors(2).count(), 0);
        assert_eq!(graph.successors(42).count(), 0);
        assert_eq!(graph.edges().count(), 3);
    }

    #[test]
    fn test_empty_edge_list_is_safe() {
        let graph = WaitForGraph::from_edges(&[]);
        assert!(graph.is_empty());
        assert!(WaitForGraphDetector::new().detect(&[]).is_safe());
    }

    #[test]
    fn test_self_loop() {
        assert_eq!(witness(&[(1, 1)]), Some(vec![1, 1]));
    }

    #[test]
    fn test_simple_three_node_cycle() {
        assert_eq!(witness(&[(1, 2), (2, 3), (3, 1)]), Some(vec![1, 2, 3, 1]));
    }

    #[test]
    fn test_acyclic_chain() {
        assert_eq!(witness(&[(1, 2), (2, 3)]), None);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // 2 and 3 both reach 4; revisiting 4 through 3 is a cross edge
        assert_eq!(witness(&[(1, 2), (1, 3), (2, 4), (3, 4)]), None);
    }

    #[test]
    fn test_witness_drops_prefix_leading_into_cycle() {
        assert_eq!(witness(&[(1, 2), (2, 3), (3, 2)]), Some(vec![2, 3, 2]));
    }

    #[test]
    fn test_short_circuits_on_first_back_edge() {
        // Both 1 -> 2 -> 1 and 3 -> 4 -> 3 exist; only the first is reported
        assert_eq!(
            witness(&[(1, 2), (2, 1), (3, 4), (4, 3)]),
            Some(vec![1, 2, 1])
        );
    }

    #[test]
    fn test_cycle_in_later_component() {
        assert_eq!(
            witness(&[(1, 2), (3, 4), (4, 5), (5, 3)]),
            Some(vec![3, 4, 5, 3])
        );
    }

    #[test]
    fn test_finished_subtree_is_not_on_stack() {
        // 2 is fully explored before 3 reaches it again
        assert_eq!(witness(&[(1, 2), (1, 3), (3, 2)]), None);
    }

    #[test]
    fn test_negative_ids() {
        assert_eq!(witness(&[(-1, -2), (-2, -1)]), Some(vec![-1, -2, -1]));
    }

    #[test]
    fn test_witness_edges_exist_in_graph() {
        let input = edges(&[(10, 20), (20, 30), (30, 40), (40, 20), (30, 50)]);
        let result = WaitForGraphDetector::new().detect(&input);
        let cycle = result.cycle().expect("cycle expected");

        assert_eq!(cycle.nodes().first(), cycle.nodes().last());
        for edge in cycle.edges() {
            assert!(input.contains(&edge), "{edge:?} is not an input edge");
        }
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let mut input: Vec<Edge> = (0..100_000).map(|i| Edge::new(i, i + 1)).collect();
        assert!(WaitForGraphDetector::new().detect(&input).is_safe());

        input.push(Edge::new(100_000, 0));
        let result = WaitForGraphDetector::new().detect(&input);
        assert_eq!(result.cycle().map(|c| c.len()), Some(100_002));
    }

    #[test]
    fn test_detection_is_repeatable() {
        let input = edges(&[(7, 8), (8, 9), (9, 7), (8, 7)]);
        let detector = WaitForGraphDetector::new();

        assert_eq!(detector.detect(&input), detector.detect(&input));
    }
}
