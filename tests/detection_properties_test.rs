//! Behavioural properties of the two detectors, checked through the public
//! library interface

use deadlock_detector::core::{CyclePath, DetectionResult, Edge, NodeId};
use deadlock_detector::detector::{
    BankersDeadlockDetector, WaitForGraph, detect_banker_deadlock, detect_wait_for_cycle,
};
use deadlock_detector::error::InputShapeError;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use pretty_assertions::assert_eq;

/// Small deterministic generator so graph shapes are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn edges(pairs: &[(NodeId, NodeId)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

fn random_edges(rng: &mut Lcg, nodes: u64, count: usize, acyclic: bool) -> Vec<Edge> {
    (0..count)
        .map(|_| {
            let a = rng.below(nodes) as NodeId;
            let b = rng.below(nodes) as NodeId;
            if acyclic {
                // Only ever point from a lower id to a strictly higher one
                let (low, high) = if a < b { (a, b) } else { (b, a + 1) };
                Edge::new(low, high)
            } else {
                Edge::new(a, b)
            }
        })
        .collect()
}

/// Reference answer from petgraph
fn oracle_is_cyclic(edges: &[Edge]) -> bool {
    let graph = WaitForGraph::from_edges(edges);
    let mut digraph = DiGraph::<NodeId, ()>::new();
    let indices: Vec<_> = graph.nodes().iter().map(|&n| digraph.add_node(n)).collect();
    let position = |id: NodeId| graph.nodes().iter().position(|&n| n == id);
    for edge in edges {
        if let (Some(a), Some(b)) = (position(edge.from), position(edge.to)) {
            digraph.add_edge(indices[a], indices[b], ());
        }
    }
    is_cyclic_directed(&digraph)
}

fn assert_valid_witness(cycle: &CyclePath, supplied: &[Edge]) {
    let nodes = cycle.nodes();
    assert!(nodes.len() >= 2, "witness too short: {nodes:?}");
    assert_eq!(nodes.first(), nodes.last());
    for pair in nodes.windows(2) {
        assert!(
            supplied.contains(&Edge::new(pair[0], pair[1])),
            "{} -> {} is not a supplied edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_self_loop() {
    let result = detect_wait_for_cycle(&edges(&[(1, 1)]));
    assert_eq!(result.cycle().map(|c| c.nodes().to_vec()), Some(vec![1, 1]));
}

#[test]
fn test_simple_cycle_closes_on_itself() {
    let supplied = edges(&[(1, 2), (2, 3), (3, 1)]);
    let result = detect_wait_for_cycle(&supplied);

    let cycle = result.cycle().expect("expected a cycle");
    assert_valid_witness(cycle, &supplied);
    let mut members = cycle.members();
    members.sort();
    assert_eq!(members, vec![1, 2, 3]);
}

#[test]
fn test_acyclic_chain_is_safe() {
    assert_eq!(
        detect_wait_for_cycle(&edges(&[(1, 2), (2, 3)])),
        DetectionResult::Safe
    );
}

#[test]
fn test_empty_edge_list_is_safe() {
    assert!(detect_wait_for_cycle(&[]).is_safe());
}

#[test]
fn test_random_dags_are_safe() {
    let mut rng = Lcg(7);
    for round in 0..200 {
        let supplied = random_edges(&mut rng, 12, round % 40, true);
        assert!(!oracle_is_cyclic(&supplied));
        assert!(
            detect_wait_for_cycle(&supplied).is_safe(),
            "DAG reported as deadlocked: {supplied:?}"
        );
    }
}

#[test]
fn test_random_graphs_agree_with_petgraph() {
    let mut rng = Lcg(42);
    let mut cyclic_seen = 0;

    for round in 0..300 {
        let supplied = random_edges(&mut rng, 10, round % 25, false);
        let result = detect_wait_for_cycle(&supplied);

        assert_eq!(result.is_deadlock(), oracle_is_cyclic(&supplied), "{supplied:?}");
        if let Some(cycle) = result.cycle() {
            cyclic_seen += 1;
            assert_valid_witness(cycle, &supplied);
        }
    }

    assert!(cyclic_seen > 0);
}

#[test]
fn test_wait_for_detection_is_idempotent() {
    let supplied = edges(&[(5, 6), (6, 7), (7, 8), (8, 6), (1, 5)]);
    assert_eq!(
        detect_wait_for_cycle(&supplied),
        detect_wait_for_cycle(&supplied)
    );
}

#[test]
fn test_banker_textbook_instance_is_safe() {
    let result = detect_banker_deadlock(
        &[3, 3, 2],
        &[
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
        &[
            vec![7, 4, 3],
            vec![1, 2, 2],
            vec![6, 0, 0],
            vec![0, 1, 1],
            vec![4, 3, 1],
        ],
    )
    .unwrap();

    assert_eq!(result, DetectionResult::Safe);
}

#[test]
fn test_banker_mutual_wait_deadlocks() {
    let result = detect_banker_deadlock(
        &[0, 0],
        &[vec![1, 0], vec![0, 1]],
        &[vec![0, 1], vec![1, 0]],
    )
    .unwrap();

    assert_eq!(result.processes(), Some(&[0, 1][..]));
}

#[test]
fn test_banker_unused_resource_type_still_deadlocks() {
    let result = detect_banker_deadlock(
        &[0, 0, 0],
        &[vec![1, 0], vec![0, 1]],
        &[vec![0, 1], vec![1, 0]],
    )
    .unwrap();

    assert_eq!(result.processes(), Some(&[0, 1][..]));
}

#[test]
fn test_banker_rows_disagreeing_in_width_are_a_shape_error() {
    let err = detect_banker_deadlock(
        &[0, 0, 0],
        &[vec![1, 0], vec![0, 1, 0]],
        &[vec![0, 1], vec![1, 0]],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        InputShapeError::RaggedRow { process: 1, expected: 2, found: 3, .. }
    ));
}

#[test]
fn test_banker_detection_is_idempotent() {
    let available = [1, 0];
    let allocation = [vec![0, 1], vec![1, 0], vec![0, 0]];
    let request = [vec![1, 1], vec![0, 1], vec![2, 0]];

    let first = detect_banker_deadlock(&available, &allocation, &request).unwrap();
    let second = detect_banker_deadlock(&available, &allocation, &request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_banker_random_instances_are_consistent() {
    let mut rng = Lcg(99);
    let detector = BankersDeadlockDetector::new();

    for _ in 0..100 {
        let m = 1 + rng.below(3) as usize;
        let n = rng.below(6) as usize;
        let available: Vec<u64> = (0..m).map(|_| rng.below(4)).collect();
        let allocation: Vec<Vec<u64>> =
            (0..n).map(|_| (0..m).map(|_| rng.below(3)).collect()).collect();
        let request: Vec<Vec<u64>> =
            (0..n).map(|_| (0..m).map(|_| rng.below(5)).collect()).collect();

        let simulation = detector.simulate(&available, &allocation, &request).unwrap();

        // Work never drops below what was available at the start
        assert!(simulation.work().iter().zip(&available).all(|(w, a)| w >= a));
        assert!(simulation.passes() <= n + 1);

        // Finished processes are exactly those in the completion order
        let mut finished: Vec<usize> = simulation.completion_order().to_vec();
        finished.sort();
        let expected: Vec<usize> = (0..n).filter(|&i| simulation.finish()[i]).collect();
        assert_eq!(finished, expected);

        // Nothing left unfinished could have been granted from the final work
        for process in simulation.deadlocked() {
            assert!(
                request[process]
                    .iter()
                    .zip(simulation.work())
                    .any(|(r, w)| r > w)
            );
        }
    }
}
