//! `skein path` / `components` / `cycle` commands

use crate::cli::Cli;
use skein_core::error::Result;
use skein_core::format::OutputFormat;
use skein_core::UndirectedGraph;

/// Execute the path command
pub fn path(cli: &Cli, graph: &UndirectedGraph, labels: &[String]) -> Result<()> {
    let valid = graph.is_valid_path(labels);
    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "path": labels,
                    "valid": valid,
                })
            );
        }
        OutputFormat::Human => {
            println!("{}", if valid { "valid" } else { "invalid" });
        }
    }
    Ok(())
}

/// Execute the components command
pub fn components(cli: &Cli, graph: &UndirectedGraph) -> Result<()> {
    let count = graph.count_connected_components();
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "components": count }));
        }
        OutputFormat::Human => println!("{}", count),
    }
    Ok(())
}

/// Execute the cycle command
pub fn cycle(cli: &Cli, graph: &UndirectedGraph) -> Result<()> {
    let has_cycle = graph.has_cycle();
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "cycle": has_cycle }));
        }
        OutputFormat::Human => println!("{}", has_cycle),
    }
    Ok(())
}
