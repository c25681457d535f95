//! Command dispatch logic for skein

use std::time::Instant;

use tracing::debug;

use crate::cli::parse::parse_edge_spec;
use crate::cli::{Cli, Commands};
use skein_core::error::Result;
use skein_core::UndirectedGraph;

use super::{analyze, inspect, script, traverse};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let graph = build_graph(cli)?;

    debug!(
        elapsed = ?start.elapsed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "build_graph"
    );

    match &cli.command {
        None | Some(Commands::Show) => inspect::show(cli, &graph),
        Some(Commands::Vertices) => inspect::vertices(cli, &graph),
        Some(Commands::Edges) => inspect::edges(cli, &graph),
        Some(Commands::Dfs { start, to }) => traverse::dfs(cli, &graph, start, to.as_deref()),
        Some(Commands::Bfs { start, to }) => traverse::bfs(cli, &graph, start, to.as_deref()),
        Some(Commands::Path { labels }) => analyze::path(cli, &graph, labels),
        Some(Commands::Components) => analyze::components(cli, &graph),
        Some(Commands::Cycle) => analyze::cycle(cli, &graph),
        Some(Commands::Script { commands, report }) => {
            script::execute(cli, graph, commands, *report)
        }
    }
}

/// Build the working graph from the global --vertex/--edge flags.
///
/// Edges are applied in flag order, so construction obeys the engine's
/// edge invariants incrementally.
fn build_graph(cli: &Cli) -> Result<UndirectedGraph> {
    let mut graph = UndirectedGraph::new();
    for label in &cli.vertex {
        graph.add_vertex(label.clone());
    }
    for spec in &cli.edge {
        let (u, v) = parse_edge_spec(spec)?;
        graph.add_edge(u, v);
    }
    Ok(graph)
}
