//! Command implementations for the deadlock-detector CLI
//!
//! This module contains the implementations for each CLI command:
//! - wait-for: look for circular waits in wait-for graphs
//! - banker: run the Banker's deadlock check
//! - render: draw a wait-for graph with its cycle highlighted

pub mod detect;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::WaitFor { .. } | Commands::Banker { .. } => {
            detect::execute_detect_command(command)
        }
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
