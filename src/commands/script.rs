//! `skein script` command - batch edge mutations with per-step reports
//!
//! Each command string mutates the graph in order; after every step a
//! report (component count, cycle flag, or the full graph) is emitted,
//! so scripted exercises can watch structure evolve.

use crate::cli::parse::{parse_script_command, ScriptCommand};
use crate::cli::{Cli, ScriptReport};
use skein_core::error::Result;
use skein_core::format::OutputFormat;
use skein_core::UndirectedGraph;

/// Execute the script command
pub fn execute(
    cli: &Cli,
    mut graph: UndirectedGraph,
    commands: &[String],
    report: ScriptReport,
) -> Result<()> {
    let mut steps: Vec<serde_json::Value> = Vec::new();

    for raw in commands {
        let command = parse_script_command(raw)?;
        let changed = match &command {
            ScriptCommand::Add(u, v) => graph.add_edge(u.clone(), v.clone()),
            ScriptCommand::Remove(u, v) => graph.remove_edge(u, v),
        };

        match cli.format {
            OutputFormat::Json => steps.push(step_json(&graph, raw, changed, report)),
            OutputFormat::Human => print_step(&graph, raw, report),
        }
    }

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "steps": steps }));
    }

    Ok(())
}

fn step_json(
    graph: &UndirectedGraph,
    raw: &str,
    changed: bool,
    report: ScriptReport,
) -> serde_json::Value {
    let mut step = serde_json::json!({
        "command": raw,
        "changed": changed,
    });
    match report {
        ScriptReport::Components => {
            step["components"] = graph.count_connected_components().into();
        }
        ScriptReport::Cycle => {
            step["cycle"] = graph.has_cycle().into();
        }
        ScriptReport::Graph => {
            step["graph"] = graph.to_string().into();
        }
    }
    step
}

fn print_step(graph: &UndirectedGraph, raw: &str, report: ScriptReport) {
    match report {
        ScriptReport::Components => {
            println!("{:<12} {}", raw, graph.count_connected_components());
        }
        ScriptReport::Cycle => println!("{:<12} {}", raw, graph.has_cycle()),
        ScriptReport::Graph => println!("{:<12} {}", raw, graph),
    }
}
