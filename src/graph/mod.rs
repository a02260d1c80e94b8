//! # Graph Rendering Module
//!
//! This module turns a [`WaitForGraph`] into a petgraph [`DiGraph`] and renders
//! it for humans, highlighting the witness cycle when one was found. Rendering
//! is a consumer of detection results, never part of detection itself.
//!
//! ## Example
//!
//! ```
//! use deadlock_detector::core::Edge;
//! use deadlock_detector::detector::{WaitForGraph, find_cycle};
//! use deadlock_detector::graph::{GraphRenderer, build_digraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = WaitForGraph::from_edges(&[Edge::new(1, 2), Edge::new(2, 1)]);
//! let cycle = find_cycle(&graph);
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&build_digraph(&graph), cycle.as_ref(), &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains(r#""P1" -> "P2""#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **ASCII**: Terminal-friendly adjacency listing
//! - **Mermaid**: Markdown-compatible diagrams for documentation
//! - **DOT**: Graphviz format for detailed visualization

mod renderer;

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

pub use renderer::GraphRenderer;

use crate::core::NodeId;
use crate::detector::WaitForGraph;

/// Convert to a petgraph graph. Nodes keep first-appearance order; repeated
/// edges collapse into one edge whose weight counts the repetitions.
pub fn build_digraph(graph: &WaitForGraph) -> DiGraph<NodeId, usize> {
    let mut digraph = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    let indices: HashMap<NodeId, NodeIndex> = graph
        .nodes()
        .iter()
        .map(|&node| (node, digraph.add_node(node)))
        .collect();

    for edge in graph.edges() {
        let (from, to) = (indices[&edge.from], indices[&edge.to]);
        match digraph.find_edge(from, to) {
            Some(existing) => digraph[existing] += 1,
            None => {
                digraph.add_edge(from, to, 1);
            }
        }
    }

    digraph
}
