//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::RenderOptions;
use crate::detector::{WaitForGraph, find_cycle};
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, build_digraph};
use crate::input::parse_edge_list;
use crate::scenario_discovery::ScenarioSource;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} wait-for graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let source = ScenarioSource::from_path(&config.path);
        let text = source.read()?;
        let edges = parse_edge_list(&source.name(), &text)?;

        let graph = WaitForGraph::from_edges(&edges);
        let cycle = find_cycle(&graph);
        match &cycle {
            Some(cycle) => eprintln!(
                "{} Circular wait found: {}",
                style("🔄").yellow(),
                style(cycle).bold()
            ),
            None => eprintln!("{} No circular wait found", style("✅").green()),
        }

        let renderer = GraphRenderer::new(config.highlight_cycle);
        let digraph = build_digraph(&graph);

        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(&digraph, cycle.as_ref(), output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(&digraph, cycle.as_ref(), output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(&digraph, cycle.as_ref(), output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
