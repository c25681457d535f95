//! `skein show` / `vertices` / `edges` commands

use crate::cli::Cli;
use skein_core::error::Result;
use skein_core::format::OutputFormat;
use skein_core::UndirectedGraph;

/// Render the graph
pub fn show(cli: &Cli, graph: &UndirectedGraph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let adjacency: serde_json::Map<String, serde_json::Value> = graph
                .vertices()
                .into_iter()
                .map(|label| {
                    let neighbors = serde_json::json!(graph.neighbors(&label));
                    (label, neighbors)
                })
                .collect();
            println!("{}", serde_json::Value::Object(adjacency));
        }
        OutputFormat::Human => println!("{}", graph),
    }
    Ok(())
}

/// List vertex labels
pub fn vertices(cli: &Cli, graph: &UndirectedGraph) -> Result<()> {
    let vertices = graph.vertices();
    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "vertices": vertices,
                    "count": vertices.len(),
                })
            );
        }
        OutputFormat::Human => {
            for label in &vertices {
                println!("{}", label);
            }
        }
    }
    Ok(())
}

/// List each edge exactly once
pub fn edges(cli: &Cli, graph: &UndirectedGraph) -> Result<()> {
    let edges = graph.edges();
    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "edges": edges,
                    "count": edges.len(),
                })
            );
        }
        OutputFormat::Human => {
            for (u, v) in &edges {
                println!("{}-{}", u, v);
            }
        }
    }
    Ok(())
}
