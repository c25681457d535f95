//! Deterministic depth-first and breadth-first traversal
//!
//! Both strategies visit unvisited neighbors in ascending lexicographic
//! order, so a fixed graph state and a fixed (start, target) pair
//! always produce an identical visit sequence. Neighbor order comes
//! from sorted working copies; traversal never reorders stored state.

use std::collections::{HashSet, VecDeque};

use super::UndirectedGraph;

impl UndirectedGraph {
    /// Depth-first visit sequence from `start`.
    ///
    /// Uses an explicit stack rather than recursion, so stack depth is
    /// independent of component size. When `target` names a vertex,
    /// traversal stops once it is visited and the sequence up to and
    /// including it is returned. A missing start yields an empty
    /// sequence; a missing target is treated as absent.
    #[tracing::instrument(skip(self), fields(start = %start, target = ?target))]
    pub fn dfs(&self, start: &str, target: Option<&str>) -> Vec<String> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        let target = target.filter(|t| self.contains_vertex(t));

        let mut visited: HashSet<String> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut stack: Vec<String> = vec![start.to_string()];

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            order.push(current.clone());
            if target == Some(current.as_str()) {
                break;
            }
            // Push in descending order so the stack pops ascending,
            // matching a recursive descent over sorted neighbors.
            for neighbor in self.neighbors(&current).into_iter().rev() {
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        order
    }

    /// Breadth-first visit sequence from `start`.
    ///
    /// FIFO expansion; unvisited neighbors are enqueued in ascending
    /// lexicographic order. Traversal stops immediately when the target
    /// is marked visited, before its neighbors are enqueued. Missing
    /// start and target labels behave as in [`dfs`](Self::dfs).
    #[tracing::instrument(skip(self), fields(start = %start, target = ?target))]
    pub fn bfs(&self, start: &str, target: Option<&str>) -> Vec<String> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        let target = target.filter(|t| self.contains_vertex(t));

        let mut visited: HashSet<String> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(start.to_string());

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            order.push(current.clone());
            if target == Some(current.as_str()) {
                break;
            }
            for neighbor in self.neighbors(&current) {
                if !visited.contains(&neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-component graph from the reference exercises:
    /// {A, B, C, D, E, H} and {F, G, Q}.
    fn example_graph() -> UndirectedGraph {
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

    fn labels(visited: &[String]) -> String {
        visited.join("")
    }

    #[test]
    fn test_dfs_full_component() {
        let graph = example_graph();
        assert_eq!(labels(&graph.dfs("A", None)), "ACBDEH");
        assert_eq!(labels(&graph.dfs("G", None)), "GFQ");
        assert_eq!(labels(&graph.dfs("H", None)), "HBCAED");
    }

    #[test]
    fn test_bfs_full_component() {
        let graph = example_graph();
        assert_eq!(labels(&graph.bfs("A", None)), "ACEBDH");
        assert_eq!(labels(&graph.bfs("G", None)), "GFQ");
        assert_eq!(labels(&graph.bfs("H", None)), "HBCDEA");
    }

    #[test]
    fn test_dfs_stops_at_target() {
        let graph = example_graph();
        assert_eq!(labels(&graph.dfs("A", Some("E"))), "ACBDE");
        assert_eq!(labels(&graph.dfs("A", Some("C"))), "AC");
    }

    #[test]
    fn test_bfs_stops_at_target() {
        let graph = example_graph();
        assert_eq!(labels(&graph.bfs("A", Some("B"))), "ACEB");
        assert_eq!(labels(&graph.bfs("A", Some("E"))), "ACE");
    }

    #[test]
    fn test_bfs_target_neighbors_not_expanded() {
        // A-B, A-C, B-D, C-D: stopping at C must not reach D.
        let graph = UndirectedGraph::from_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert_eq!(labels(&graph.bfs("A", Some("C"))), "ABC");
    }

    #[test]
    fn test_missing_start_yields_empty() {
        let graph = example_graph();
        assert!(graph.dfs("Z", None).is_empty());
        assert!(graph.bfs("Z", None).is_empty());
    }

    #[test]
    fn test_missing_target_treated_as_absent() {
        let graph = example_graph();
        assert_eq!(graph.dfs("A", Some("Z")), graph.dfs("A", None));
        assert_eq!(graph.bfs("A", Some("Z")), graph.bfs("A", None));
    }

    #[test]
    fn test_target_in_other_component_unreachable() {
        let graph = example_graph();
        // Q is a real vertex but not reachable from A; the whole
        // component is visited.
        assert_eq!(labels(&graph.dfs("A", Some("Q"))), "ACBDEH");
    }

    #[test]
    fn test_traversal_deterministic() {
        let graph = example_graph();
        for _ in 0..10 {
            assert_eq!(labels(&graph.dfs("B", None)), "BCAEDH");
            assert_eq!(labels(&graph.bfs("B", None)), "BCDEHA");
        }
    }

    #[test]
    fn test_traversal_totality_on_connected_graph() {
        let graph = UndirectedGraph::from_edges([
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("C", "E"),
            ("D", "E"),
        ]);
        let mut expected = graph.vertices();
        expected.sort();

        let mut dfs = graph.dfs("C", None);
        dfs.sort();
        assert_eq!(dfs, expected);

        let mut bfs = graph.bfs("C", None);
        bfs.sort();
        assert_eq!(bfs, expected);
    }

    #[test]
    fn test_traversal_does_not_mutate_stored_order() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge("A", "C");
        graph.add_edge("A", "B");
        let before = graph.to_string();
        graph.dfs("A", None);
        graph.bfs("A", None);
        assert_eq!(graph.to_string(), before);
    }

    #[test]
    fn test_isolated_start() {
        let mut graph = UndirectedGraph::new();
        graph.add_vertex("A");
        assert_eq!(graph.dfs("A", None), vec!["A".to_string()]);
        assert_eq!(graph.bfs("A", None), vec!["A".to_string()]);
    }
}
