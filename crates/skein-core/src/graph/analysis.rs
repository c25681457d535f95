//! Connected-component counting and cycle detection
//!
//! Both sweep the vertex set in sorted order and launch one search per
//! undiscovered component against a shared visited set, so each runs
//! in O(V + E).

use std::collections::HashSet;

use super::UndirectedGraph;

impl UndirectedGraph {
    /// Number of connected components.
    ///
    /// An empty graph has zero components; an isolated vertex is a
    /// component of its own.
    #[tracing::instrument(skip(self))]
    pub fn count_connected_components(&self) -> usize {
        let mut visited: HashSet<String> = HashSet::new();
        let mut count = 0;
        for vertex in self.vertices() {
            if visited.contains(&vertex) {
                continue;
            }
            count += 1;
            self.collect_component(&vertex, &mut visited);
        }
        count
    }

    /// Whether any component contains a cycle.
    ///
    /// A graph with zero or one vertex, or any forest, has no cycle.
    #[tracing::instrument(skip(self))]
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<String> = HashSet::new();
        for vertex in self.vertices() {
            if visited.contains(&vertex) {
                continue;
            }
            if self.component_has_cycle(&vertex, &mut visited) {
                return true;
            }
        }
        false
    }

    /// Mark every vertex reachable from `start` as visited.
    fn collect_component(&self, start: &str, visited: &mut HashSet<String>) {
        let mut stack: Vec<String> = vec![start.to_string()];
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for neighbor in self.neighbors(&current) {
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    /// Depth-first search of one component with parent tracking.
    ///
    /// A visited neighbor other than the immediate parent is a back
    /// edge. Duplicate edges cannot exist, so the parent exclusion is
    /// exact.
    fn component_has_cycle(&self, start: &str, visited: &mut HashSet<String>) -> bool {
        let mut stack: Vec<(String, Option<String>)> = vec![(start.to_string(), None)];
        while let Some((current, parent)) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for neighbor in self.neighbors(&current) {
                if parent.as_deref() == Some(neighbor.as_str()) {
                    continue;
                }
                if visited.contains(&neighbor) {
                    return true;
                }
                stack.push((neighbor, Some(current.clone())));
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_component_graph() -> UndirectedGraph {
        UndirectedGraph::from_edges([
            ("A", "E"),
            ("A", "C"),
            ("B", "E"),
            ("C", "E"),
            ("C", "D"),
            ("C", "B"),
            ("B", "D"),
            ("E", "D"),
            ("B", "H"),
            ("Q", "G"),
            ("F", "G"),
        ])
    }

    #[test]
    fn test_component_count() {
        assert_eq!(two_component_graph().count_connected_components(), 2);
    }

    #[test]
    fn test_empty_graph_has_zero_components() {
        let graph = UndirectedGraph::new();
        assert_eq!(graph.count_connected_components(), 0);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_isolated_vertices_are_components() {
        let mut graph = UndirectedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_vertex("C");
        assert_eq!(graph.count_connected_components(), 3);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_removal_splits_component() {
        let mut graph = two_component_graph();
        assert_eq!(graph.count_connected_components(), 2);
        // H hangs off B by a single edge.
        graph.remove_edge("B", "H");
        assert_eq!(graph.count_connected_components(), 3);
        // Adding it back merges again.
        graph.add_edge("B", "H");
        assert_eq!(graph.count_connected_components(), 2);
    }

    #[test]
    fn test_edge_mutation_monotonicity() {
        let mut graph = two_component_graph();
        for (u, v) in graph.edges() {
            let before = graph.count_connected_components();
            graph.remove_edge(&u, &v);
            let after = graph.count_connected_components();
            assert!(after >= before, "removing {u}-{v} lost a component");
            graph.add_edge(u, v);
            assert_eq!(graph.count_connected_components(), before);
        }
    }

    #[test]
    fn test_cycle_detected() {
        // Triangle E-K-B-E inside a larger structure.
        let graph = UndirectedGraph::from_edges([
            ("F", "D"),
            ("E", "K"),
            ("E", "B"),
            ("E", "J"),
            ("K", "B"),
            ("J", "C"),
            ("J", "G"),
            ("C", "G"),
            ("G", "B"),
        ]);
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_forest_has_no_cycle() {
        let graph = UndirectedGraph::from_edges([
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("E", "F"),
        ]);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_single_edge_has_no_cycle() {
        let graph = UndirectedGraph::from_edges([("A", "B")]);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_cycle_in_second_component() {
        let graph = UndirectedGraph::from_edges([
            ("A", "B"),
            ("X", "Y"),
            ("Y", "Z"),
            ("Z", "X"),
        ]);
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_cycle_appears_and_disappears() {
        let mut graph = UndirectedGraph::from_edges([("A", "B"), ("B", "C")]);
        assert!(!graph.has_cycle());
        graph.add_edge("C", "A");
        assert!(graph.has_cycle());
        graph.remove_edge("A", "B");
        assert!(!graph.has_cycle());
    }
}
