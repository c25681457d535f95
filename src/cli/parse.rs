//! Parsing helpers for graph construction flags and scripts

use skein_core::error::{Result, SkeinError};
use skein_core::format::OutputFormat;

/// Parse `--format` values (clap value_parser)
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge spec: `A-B`, `A,B`, or a two-character shorthand `AB`.
pub fn parse_edge_spec(spec: &str) -> Result<(String, String)> {
    if let Some((u, v)) = spec.split_once('-').or_else(|| spec.split_once(',')) {
        let (u, v) = (u.trim(), v.trim());
        if u.is_empty() || v.is_empty() {
            return Err(SkeinError::InvalidEdgeSpec {
                spec: spec.to_string(),
                reason: "both endpoints must be non-empty".to_string(),
            });
        }
        return Ok((u.to_string(), v.to_string()));
    }

    let labels: Vec<char> = spec.chars().collect();
    if labels.len() == 2 {
        return Ok((labels[0].to_string(), labels[1].to_string()));
    }

    Err(SkeinError::InvalidEdgeSpec {
        spec: spec.to_string(),
        reason: "expected 'A-B', 'A,B', or a two-character pair".to_string(),
    })
}

/// A single script mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String, String),
    Remove(String, String),
}

/// Parse a script command of the form `add AB` or `remove A-B`.
pub fn parse_script_command(command: &str) -> Result<ScriptCommand> {
    let Some((verb, spec)) = command.trim().split_once(char::is_whitespace) else {
        return Err(SkeinError::InvalidScriptCommand {
            command: command.to_string(),
            reason: "expected '<add|remove> <edge>'".to_string(),
        });
    };

    let (u, v) = parse_edge_spec(spec.trim())?;
    match verb {
        "add" => Ok(ScriptCommand::Add(u, v)),
        "remove" => Ok(ScriptCommand::Remove(u, v)),
        other => Err(SkeinError::InvalidScriptCommand {
            command: command.to_string(),
            reason: format!("unknown verb '{}'", other),
        }),
    }
}
