use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs, ScenarioDisplayArgs};

#[derive(Parser)]
#[command(
    name = "deadlock-detector",
    about = "🔒 Detect deadlocks with wait-for graphs and the Banker's algorithm",
    long_about = "deadlock-detector checks scenarios for deadlock. Wait-for scenarios are edge \
                  lists where each line `A B` means process A waits on a resource held by \
                  process B; a cycle in that graph is a circular wait. Banker scenarios list \
                  available resources plus allocation and request matrices; processes whose \
                  requests can never be satisfied are deadlocked.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look for circular waits in wait-for graphs
    ///
    /// Builds a directed graph from each edge-list scenario and searches it
    /// for a cycle. When one is found, the cycle is reported as the witness
    /// of the deadlock.
    #[command(
        long_about = "Detect circular waits in wait-for graphs. Each scenario is an edge list \
                      with one `from to` pair of integer process ids per line; blank lines and \
                      lines starting with `#` are ignored. Directories are searched for .wfg, \
                      .edges and .txt files. The first cycle found by a depth-first search is \
                      reported; it is a valid cycle but not necessarily the shortest one."
    )]
    WaitFor {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        display: ScenarioDisplayArgs,

        /// Exit with error code if any scenario deadlocks
        #[arg(long, env = "DEADLOCK_DETECTOR_ERROR_ON_DEADLOCK")]
        error_on_deadlock: bool,
    },

    /// Run the Banker's deadlock check over allocation and request matrices
    ///
    /// Simulates granting every request that fits in the available
    /// resources, reclaiming allocations as processes finish. Processes that
    /// never finish are deadlocked.
    #[command(
        long_about = "Run the Banker's deadlock check. Each scenario is a JSON (or .toml) \
                      document with exactly three fields: `available` (one count per resource \
                      type), `allocation` and `request` (one row per process, one entry per \
                      resource type). Directories are searched for .json and .toml files. Safe \
                      scenarios also report the order in which processes could finish."
    )]
    Banker {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        display: ScenarioDisplayArgs,

        /// Exit with error code if any scenario deadlocks
        #[arg(long, env = "DEADLOCK_DETECTOR_ERROR_ON_DEADLOCK")]
        error_on_deadlock: bool,
    },

    /// Draw a wait-for graph with its cycle highlighted
    #[command(
        long_about = "Render the wait-for graph of one edge-list scenario as ASCII art, a \
                      Mermaid diagram or a Graphviz DOT file. Processes and edges on the \
                      detected cycle are highlighted unless --no-highlight is given."
    )]
    Render {
        /// Edge-list scenario to render ('-' for stdin)
        #[arg(value_name = "PATH", env = "DEADLOCK_DETECTOR_RENDER_PATH")]
        path: PathBuf,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "DEADLOCK_DETECTOR_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DEADLOCK_DETECTOR_OUTPUT")]
        output: Option<PathBuf>,

        /// Do not highlight the detected cycle
        #[arg(long, env = "DEADLOCK_DETECTOR_NO_HIGHLIGHT")]
        no_highlight: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
