//! Skein Core Library
//!
//! In-memory undirected graph engine: structure management,
//! deterministic traversal, path validation, and graph analysis.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use graph::UndirectedGraph;
