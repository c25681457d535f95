//! Undirected graph engine
//!
//! The graph is a single adjacency list keyed by vertex label.
//! Invariants maintained by every mutation:
//! - symmetry: `v` is a neighbor of `u` iff `u` is a neighbor of `v`
//! - no self-loops, no duplicate edges
//! - every neighbor label is itself a vertex
//!
//! Malformed or no-op requests (duplicate edge, missing endpoint,
//! self-loop) are absorbed silently; mutations report whether they
//! changed the graph so batch callers can observe no-ops if they care.

pub mod analysis;
pub mod path;
pub mod traversal;

use std::collections::HashMap;
use std::fmt;

/// Undirected, unweighted graph over string vertex labels.
///
/// Neighbor lists keep insertion order as stored state; queries that
/// need lexicographic order sort working copies (see
/// [`neighbors`](UndirectedGraph::neighbors)) so reads never mutate
/// the structure.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl UndirectedGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by applying [`add_edge`](Self::add_edge) to each
    /// pair in order, so construction obeys all edge invariants
    /// incrementally.
    pub fn from_edges<I, U, V>(edges: I) -> Self
    where
        I: IntoIterator<Item = (U, V)>,
        U: Into<String>,
        V: Into<String>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Insert a vertex with no neighbors.
    ///
    /// Returns `false` if the vertex already exists (the graph is
    /// unchanged).
    pub fn add_vertex(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.adjacency.contains_key(&label) {
            return false;
        }
        self.adjacency.insert(label, Vec::new());
        true
    }

    /// Insert the undirected edge `{u, v}`, creating missing endpoints.
    ///
    /// Self-loops and duplicate edges are rejected; returns whether the
    /// graph changed.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) -> bool {
        let u = u.into();
        let v = v.into();
        if u == v {
            return false;
        }
        if self.contains_edge(&u, &v) {
            return false;
        }
        self.adjacency.entry(u.clone()).or_default().push(v.clone());
        self.adjacency.entry(v).or_default().push(u);
        true
    }

    /// Remove the undirected edge `{u, v}` if present.
    ///
    /// Missing endpoints or a missing edge leave the graph unchanged;
    /// returns whether an edge was removed.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        if !self.adjacency.contains_key(u) || !self.adjacency.contains_key(v) {
            return false;
        }
        let mut removed = false;
        if let Some(neighbors) = self.adjacency.get_mut(u) {
            if let Some(pos) = neighbors.iter().position(|n| n == v) {
                neighbors.remove(pos);
                removed = true;
            }
        }
        if removed {
            if let Some(neighbors) = self.adjacency.get_mut(v) {
                if let Some(pos) = neighbors.iter().position(|n| n == u) {
                    neighbors.remove(pos);
                }
            }
        }
        removed
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Returns `false` if the vertex does not exist.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(neighbors) = self.adjacency.remove(label) else {
            return false;
        };
        for neighbor in neighbors {
            if let Some(list) = self.adjacency.get_mut(&neighbor) {
                list.retain(|n| n != label);
            }
        }
        true
    }

    /// Whether `label` is a vertex of the graph
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Whether the undirected edge `{u, v}` exists
    pub fn contains_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.iter().any(|n| n == v))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        // Symmetry: every edge appears in exactly two neighbor lists.
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// All vertex labels, sorted.
    ///
    /// Returns an owned copy; callers never alias internal storage.
    pub fn vertices(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.adjacency.keys().cloned().collect();
        labels.sort();
        labels
    }

    /// Each undirected edge exactly once as a `(min, max)` pair, sorted.
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (u, neighbors) in &self.adjacency {
            for v in neighbors {
                if u < v {
                    pairs.push((u.clone(), v.clone()));
                }
            }
        }
        pairs.sort();
        pairs
    }

    /// Sorted copy of `label`'s neighbor list; empty if the vertex is
    /// absent.
    pub fn neighbors(&self, label: &str) -> Vec<String> {
        let mut neighbors = self.adjacency.get(label).cloned().unwrap_or_default();
        neighbors.sort();
        neighbors
    }
}

/// Human-readable rendering for debugging; not a parseable format.
impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .vertices()
            .iter()
            .map(|label| format!("{}: [{}]", label, self.neighbors(label).join(", ")))
            .collect();
        write!(f, "GRAPH: {{{}}}", entries.join(", "))
    }
}
