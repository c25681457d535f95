//! CLI argument parsing for skein
//!
//! Uses clap for argument parsing. The working graph is built from the
//! global --edge/--vertex flags; subcommands query or mutate it.

pub mod parse;

use clap::{Parser, Subcommand, ValueEnum};

use parse::parse_format;
use skein_core::format::OutputFormat;

/// Skein - undirected graph engine CLI
#[derive(Parser, Debug)]
#[command(name = "skein")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge to add while building the graph (forms: AB, A-B, A,B; repeatable)
    #[arg(long = "edge", short = 'e', global = true, action = clap::ArgAction::Append)]
    pub edge: Vec<String>,

    /// Isolated vertex to add while building the graph (repeatable)
    #[arg(long = "vertex", global = true, action = clap::ArgAction::Append)]
    pub vertex: Vec<String>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the graph (default when no subcommand is given)
    Show,

    /// List vertex labels
    Vertices,

    /// List each edge exactly once
    Edges,

    /// Depth-first traversal from a start vertex
    Dfs {
        /// Start vertex label
        start: String,

        /// Stop once this vertex has been visited
        #[arg(long)]
        to: Option<String>,
    },

    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Start vertex label
        start: String,

        /// Stop once this vertex has been visited
        #[arg(long)]
        to: Option<String>,
    },

    /// Check whether a vertex sequence is a valid walk
    Path {
        /// Vertex labels in walk order
        labels: Vec<String>,
    },

    /// Count connected components
    Components,

    /// Check whether the graph contains a cycle
    Cycle,

    /// Apply add/remove edge commands in order, reporting after each step
    Script {
        /// Commands of the form "add AB" or "remove A-B"
        commands: Vec<String>,

        /// What to report after each step
        #[arg(long, value_enum, default_value = "components")]
        report: ScriptReport,
    },
}

/// Per-step report selection for the script command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptReport {
    /// Connected-component count after each step
    Components,
    /// Cycle presence after each step
    Cycle,
    /// Full graph rendering after each step
    Graph,
}
