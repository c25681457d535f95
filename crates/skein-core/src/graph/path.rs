//! Walk validation over existing edges

use super::UndirectedGraph;

impl UndirectedGraph {
    /// Whether `path` is a walk using only existing edges.
    ///
    /// An empty sequence is vacuously valid; a single label is valid
    /// iff it is a vertex; a longer sequence is valid iff every
    /// consecutive pair is an edge (checked unordered). Any missing
    /// vertex or edge invalidates the whole sequence.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        match path {
            [] => true,
            [only] => self.contains_vertex(only.as_ref()),
            _ => path
                .windows(2)
                .all(|pair| self.contains_edge(pair[0].as_ref(), pair[1].as_ref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_graph() -> UndirectedGraph {
        UndirectedGraph::from_edges([
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("C", "E"),
            ("D", "E"),
        ])
    }

    fn split(labels: &str) -> Vec<String> {
        labels.chars().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_empty_path_is_valid() {
        let graph = example_graph();
        assert!(graph.is_valid_path::<String>(&[]));
        assert!(UndirectedGraph::new().is_valid_path::<String>(&[]));
    }

    #[test]
    fn test_single_vertex_path() {
        let graph = example_graph();
        assert!(graph.is_valid_path(&split("D")));
        assert!(!graph.is_valid_path(&split("Z")));
    }

    #[test]
    fn test_multi_vertex_paths() {
        let graph = example_graph();
        assert!(graph.is_valid_path(&split("ABC")));
        assert!(!graph.is_valid_path(&split("ADE")));
        assert!(!graph.is_valid_path(&split("ECABDCBE")));
        assert!(graph.is_valid_path(&split("ACDECB")));
    }

    #[test]
    fn test_walk_may_revisit_vertices() {
        let graph = example_graph();
        assert!(graph.is_valid_path(&split("ABABAB")));
    }
}
