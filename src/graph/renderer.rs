use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::{CyclePath, NodeId, process_label};
use crate::error::DeadlockError;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DeadlockError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DeadlockError::from)
    };
}

/// Nodes and edges of the witness cycle that should be drawn highlighted
#[derive(Default)]
struct Highlight {
    nodes: HashSet<NodeId>,
    edges: HashSet<(NodeId, NodeId)>,
}

impl Highlight {
    fn node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    fn edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains(&(from, to))
    }
}

/// Renders a wait-for graph, optionally highlighting one witness cycle
///
/// Edge weights are multiplicities: a pair supplied twice is drawn once and
/// labelled `x2`.
pub struct GraphRenderer {
    highlight_cycle: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycle: bool) -> Self {
        Self { highlight_cycle }
    }

    fn highlight(&self, cycle: Option<&CyclePath>) -> Highlight {
        match cycle {
            Some(cycle) if self.highlight_cycle => Highlight {
                nodes: cycle.members().into_iter().collect(),
                edges: cycle.edges().map(|e| (e.from, e.to)).collect(),
            },
            _ => Highlight::default(),
        }
    }

    fn endpoints(
        graph: &DiGraph<NodeId, usize>,
        edge: EdgeIndex,
    ) -> Result<(NodeId, NodeId, usize), DeadlockError> {
        let (source, target) =
            graph
                .edge_endpoints(edge)
                .ok_or_else(|| DeadlockError::GraphError {
                    message: "Edge must have endpoints".to_string(),
                })?;
        let weight = graph
            .edge_weight(edge)
            .ok_or_else(|| DeadlockError::GraphError {
                message: "Edge weight not found for existing edge".to_string(),
            })?;
        Ok((graph[source], graph[target], *weight))
    }

    fn multiplicity_label(weight: usize) -> Option<String> {
        (weight > 1).then(|| format!("x{weight}"))
    }

    pub fn render_ascii(
        &self,
        graph: &DiGraph<NodeId, usize>,
        cycle: Option<&CyclePath>,
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No processes found to visualize")?;
            return Ok(());
        }

        let highlight = self.highlight(cycle);
        writeln_out!(output, "\n📊 Wait-For Graph\n")?;

        for node_idx in graph.node_indices() {
            let node = graph[node_idx];
            if highlight.node(node) {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", process_label(node))?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", process_label(node))?;
            }

            // petgraph yields outgoing edges newest first
            let mut targets: Vec<(NodeIndex, usize)> = graph
                .edges(node_idx)
                .map(|e| (e.target(), *e.weight()))
                .collect();
            targets.reverse();

            if targets.is_empty() {
                writeln_out!(output, "  └── (not waiting)")?;
                continue;
            }

            for (i, (target_idx, weight)) in targets.iter().enumerate() {
                let target = graph[*target_idx];
                let branch = if i + 1 == targets.len() {
                    "└──"
                } else {
                    "├──"
                };
                let marker = if highlight.edge(node, target) {
                    " ⚠️"
                } else {
                    ""
                };
                let count = Self::multiplicity_label(*weight)
                    .map(|l| format!(" ({l})"))
                    .unwrap_or_default();
                writeln_out!(
                    output,
                    "  {} waits for {}{}{}",
                    branch,
                    process_label(target),
                    count,
                    marker
                )?;
            }
        }

        if let Some(cycle) = cycle.filter(|c| !c.is_empty()) {
            writeln_out!(output, "\n🔄 Cycle: {}", cycle)?;
        }

        Ok(())
    }

    /// Mermaid node ids must be alphanumeric, so `-3` becomes `Pn3`
    fn mermaid_id(node: NodeId) -> String {
        if node < 0 {
            format!("Pn{}", node.unsigned_abs())
        } else {
            format!("P{node}")
        }
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<NodeId, usize>,
        cycle: Option<&CyclePath>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let highlight = self.highlight(cycle);
        writeln_out!(output, "graph LR")?;

        for node_idx in graph.node_indices() {
            let node = graph[node_idx];
            writeln_out!(
                output,
                "    {}((\"{}\"))",
                Self::mermaid_id(node),
                process_label(node)
            )?;
        }

        let mut cycle_links = Vec::new();
        for (link, edge) in graph.edge_indices().enumerate() {
            let (from, to, weight) = Self::endpoints(graph, edge)?;
            let arrow = match Self::multiplicity_label(weight) {
                Some(label) => format!("-->|{label}|"),
                None => "-->".to_string(),
            };
            writeln_out!(
                output,
                "    {} {} {}",
                Self::mermaid_id(from),
                arrow,
                Self::mermaid_id(to)
            )?;
            if highlight.edge(from, to) {
                cycle_links.push(link.to_string());
            }
        }

        let cycle_nodes: Vec<String> = graph
            .node_indices()
            .map(|idx| graph[idx])
            .filter(|&node| highlight.node(node))
            .map(Self::mermaid_id)
            .collect();

        if !cycle_nodes.is_empty() {
            writeln_out!(output)?;
            writeln_out!(
                output,
                "    classDef cycle fill:{},stroke:{},stroke-width:2px",
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
            writeln_out!(output, "    class {} cycle", cycle_nodes.join(","))?;
        }
        if !cycle_links.is_empty() {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                cycle_links.join(","),
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<NodeId, usize>,
        cycle: Option<&CyclePath>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let highlight = self.highlight(cycle);

        writeln_out!(output, "digraph wait_for {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=circle, style=filled];")?;
        writeln_out!(output)?;

        for node_idx in graph.node_indices() {
            let node = graph[node_idx];
            let (fill_color, stroke_color) = if highlight.node(node) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                r#"    "{}" [fillcolor="{}", color="{}", penwidth=2];"#,
                process_label(node),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_indices() {
            let (from, to, weight) = Self::endpoints(graph, edge)?;
            let (color, width) = if highlight.edge(from, to) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 1)
            };
            let label = Self::multiplicity_label(weight)
                .map(|l| format!(r#", label="{l}""#))
                .unwrap_or_default();
            writeln_out!(
                output,
                r#"    "{}" -> "{}" [color="{}", penwidth={}{}];"#,
                process_label(from),
                process_label(to),
                color,
                width,
                label
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}
