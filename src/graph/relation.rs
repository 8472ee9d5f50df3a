//! Undirected relation graph over category identifiers

use crate::error::{SplitError, SplitResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Category identifier; ordering is lexicographic and drives every tie-break
pub type NodeId = String;

/// Undirected, unweighted graph with at most one edge per unordered pair.
///
/// Nodes and adjacency sets are kept in ordered maps so that any iteration
/// over the graph visits identifiers in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationGraph {
    /// Display label per node, if one was given
    labels: BTreeMap<NodeId, Option<String>>,

    /// Adjacency sets; every node has an entry, possibly empty
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl RelationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; re-adding an existing id keeps the original label
    pub fn add_node(&mut self, id: &str, label: Option<&str>) {
        if self.labels.contains_key(id) {
            return;
        }
        self.labels
            .insert(id.to_string(), label.map(str::to_string));
        self.adjacency.insert(id.to_string(), BTreeSet::new());
    }

    /// Add an undirected edge between two known, distinct nodes
    pub fn add_edge(&mut self, a: &str, b: &str) -> SplitResult<()> {
        if a == b {
            return Err(SplitError::validation(format!(
                "self-relation on category '{}'",
                a
            )));
        }
        for id in [a, b] {
            if !self.has_node(id) {
                return Err(SplitError::validation(format!(
                    "relation {}-{} references unknown category '{}'",
                    a, b, id
                )));
            }
        }

        let inserted = self
            .adjacency
            .get_mut(a)
            .is_some_and(|set| set.insert(b.to_string()));
        if inserted {
            if let Some(set) = self.adjacency.get_mut(b) {
                set.insert(a.to_string());
            }
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Remove the edge between `a` and `b`; returns whether it existed
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let removed = self
            .adjacency
            .get_mut(a)
            .is_some_and(|set| set.remove(b));
        if removed {
            if let Some(set) = self.adjacency.get_mut(b) {
                set.remove(a);
            }
            self.edge_count -= 1;
        }
        removed
    }

    /// Neighbors of `id` in ascending order; empty for unknown ids
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.adjacency.get(id).into_iter().flatten()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.labels.contains_key(id)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|set| set.contains(b))
    }

    /// Display label of a node, if it has one
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).and_then(|label| label.as_deref())
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.labels.keys()
    }

    /// Every edge once as `(smaller, larger)`, in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(a, set)| {
            set.range::<NodeId, _>((
                std::ops::Bound::Excluded(a),
                std::ops::Bound::Unbounded,
            ))
            .map(move |b| (a, b))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> RelationGraph {
        let mut graph = RelationGraph::new();
        for id in ["A", "B", "C"] {
            graph.add_node(id, None);
        }
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("C", "A").unwrap();
        graph
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = RelationGraph::new();

        graph.add_node("A", Some("apple"));
        graph.add_node("A", Some("avocado"));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.label("A"), Some("apple"));
    }

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut graph = sample_graph();

        graph.add_edge("B", "A").unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("A").count(), 2);
    }

    #[test]
    fn test_add_edge_rejects_unknown_node() {
        let mut graph = sample_graph();

        let err = graph.add_edge("A", "Z").unwrap_err();

        assert!(matches!(err, SplitError::Validation(msg) if msg.contains("'Z'")));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_rejects_self_loop() {
        let mut graph = sample_graph();

        assert!(matches!(
            graph.add_edge("B", "B"),
            Err(SplitError::Validation(_))
        ));
    }

    #[test]
    fn test_neighbors_are_sorted() {
        let graph = sample_graph();

        let neighbors: Vec<&str> = graph.neighbors("A").map(String::as_str).collect();

        assert_eq!(neighbors, vec!["B", "C"]);
        assert_eq!(graph.neighbors("Z").count(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = sample_graph();

        assert!(graph.remove_edge("B", "A"));
        assert!(!graph.remove_edge("B", "A"));
        assert!(!graph.remove_edge("B", "C"));

        assert!(!graph.has_edge("A", "B"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_edges_listed_once() {
        let graph = sample_graph();

        let edges: Vec<(&str, &str)> = graph
            .edges()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();

        assert_eq!(edges, vec![("A", "B"), ("A", "C")]);
    }
}
