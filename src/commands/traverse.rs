//! `skein dfs` / `bfs` commands

use crate::cli::Cli;
use skein_core::error::Result;
use skein_core::format::OutputFormat;
use skein_core::UndirectedGraph;

/// Execute the dfs command
pub fn dfs(cli: &Cli, graph: &UndirectedGraph, start: &str, to: Option<&str>) -> Result<()> {
    let visited = graph.dfs(start, to);
    print_traversal(cli, "dfs", start, to, &visited)
}

/// Execute the bfs command
pub fn bfs(cli: &Cli, graph: &UndirectedGraph, start: &str, to: Option<&str>) -> Result<()> {
    let visited = graph.bfs(start, to);
    print_traversal(cli, "bfs", start, to, &visited)
}

fn print_traversal(
    cli: &Cli,
    mode: &str,
    start: &str,
    to: Option<&str>,
    visited: &[String],
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "mode": mode,
                    "start": start,
                    "target": to,
                    "visited": visited,
                })
            );
        }
        OutputFormat::Human => {
            // An unknown start vertex yields an empty sequence, not an error.
            if visited.is_empty() {
                if !cli.quiet {
                    println!("(no such vertex: {})", start);
                }
            } else {
                println!("{}", visited.join(" "));
            }
        }
    }
    Ok(())
}
