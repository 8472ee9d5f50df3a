//! Cluster size balancing
//!
//! Nodes are migrated one at a time from the largest cluster to the smallest
//! until every cluster size is within one of every other. Relations between a
//! moved node and its old or new cluster are marked as severed rather than
//! deleted, so the relation graph itself is left untouched.

use crate::cluster::{ClusterMembers, Partition};
use crate::graph::algorithms::external_neighbors;
use crate::graph::{NodeId, RelationGraph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single node migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMove {
    pub node: NodeId,
    pub from: usize,
    pub to: usize,
    /// Relations severed by this move
    pub severed: usize,
}

/// Result of balancing a partition
#[derive(Debug, Clone)]
pub struct Balanced {
    /// Final clusters satisfying the size balance
    pub partition: Partition,

    /// Number of relations severed while moving nodes
    pub removed_edge_count: usize,

    /// Severed relations as `(smaller, larger)` pairs, in ascending order
    pub severed_edges: Vec<(NodeId, NodeId)>,

    /// Migrations in the order they were applied
    pub moves: Vec<NodeMove>,
}

/// Equalizes cluster sizes by migrating weakly connected nodes
pub struct Balancer<'g> {
    graph: &'g RelationGraph,

    /// Relations no longer counted toward external degree
    severed: BTreeSet<(NodeId, NodeId)>,
}

impl<'g> Balancer<'g> {
    pub fn new(graph: &'g RelationGraph) -> Self {
        Self {
            graph,
            severed: BTreeSet::new(),
        }
    }

    /// Move nodes until the largest and smallest cluster differ by at most one
    pub fn balance(mut self, mut partition: Partition) -> Balanced {
        let mut moves = Vec::new();

        while let Some((largest, smallest)) = unbalanced_pair(&partition) {
            let members = &partition.clusters()[largest];
            let Some(node) = self.weakest_member(members) else {
                break;
            };

            partition.move_node(&node, largest, smallest);
            debug_assert!(partition.covers(self.graph));

            let severed = self.sever(&node, &partition.clusters()[largest])
                + self.sever(&node, &partition.clusters()[smallest]);

            log::debug!(
                "Moved '{}' from cluster {} to cluster {} ({} relations severed)",
                node,
                largest,
                smallest,
                severed
            );
            moves.push(NodeMove {
                node,
                from: largest,
                to: smallest,
                severed,
            });
        }

        let removed_edge_count = self.severed.len();
        log::info!(
            "Balanced clusters in {} moves; number of edges removed: {}",
            moves.len(),
            removed_edge_count
        );

        Balanced {
            partition,
            removed_edge_count,
            severed_edges: self.severed.into_iter().collect(),
            moves,
        }
    }

    /// Member with the fewest live relations leaving `members`; ties go to the smallest id
    fn weakest_member(&self, members: &ClusterMembers) -> Option<NodeId> {
        members
            .iter()
            .min_by_key(|node| (self.live_external_degree(node, members), *node))
            .cloned()
    }

    /// External degree of `node`, ignoring severed relations
    pub fn live_external_degree(&self, node: &str, members: &ClusterMembers) -> usize {
        external_neighbors(self.graph, node, members)
            .filter(|neighbor| !self.is_severed(node, neighbor))
            .count()
    }

    fn is_severed(&self, a: &str, b: &str) -> bool {
        self.severed.contains(&edge_key(a, b))
    }

    /// Mark every live relation between `node` and `members` as severed
    fn sever(&mut self, node: &str, members: &ClusterMembers) -> usize {
        let keys: Vec<(NodeId, NodeId)> = self
            .graph
            .neighbors(node)
            .filter(|neighbor| members.contains(*neighbor))
            .map(|neighbor| edge_key(node, neighbor))
            .collect();

        keys.into_iter()
            .filter(|key| self.severed.insert(key.clone()))
            .count()
    }
}

/// Indices of the first largest and first smallest cluster, if their sizes differ by more than one
fn unbalanced_pair(partition: &Partition) -> Option<(usize, usize)> {
    let sizes = partition.sizes();
    let largest = sizes
        .iter()
        .enumerate()
        .min_by_key(|&(idx, &size)| (std::cmp::Reverse(size), idx))?
        .0;
    let smallest = sizes
        .iter()
        .enumerate()
        .min_by_key(|&(idx, &size)| (size, idx))?
        .0;

    (sizes[largest] - sizes[smallest] > 1).then_some((largest, smallest))
}

fn edge_key(a: &str, b: &str) -> (NodeId, NodeId) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> RelationGraph {
        let mut graph = RelationGraph::new();
        for id in ids {
            graph.add_node(id, None);
        }
        for (a, b) in edges {
            graph.add_edge(a, b).unwrap();
        }
        graph
    }

    fn members(ids: &[&str]) -> ClusterMembers {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_balanced_partition_is_unchanged() {
        let graph = graph(&["A", "B", "C"], &[("A", "B")]);
        let partition = Partition::new(vec![members(&["A", "B"]), members(&["C"])]);

        let balanced = Balancer::new(&graph).balance(partition.clone());

        assert_eq!(balanced.partition, partition);
        assert_eq!(balanced.removed_edge_count, 0);
        assert!(balanced.moves.is_empty());
    }

    #[test]
    fn test_moves_least_connected_node() {
        // Arrange: D is the only member of the large cluster with no outside relation
        let graph = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("A", "E"), ("B", "E"), ("C", "E")],
        );
        let partition = Partition::new(vec![members(&["A", "B", "C", "D"]), members(&["E"])]);

        // Act
        let balanced = Balancer::new(&graph).balance(partition);

        // Assert
        assert_eq!(
            balanced.partition,
            Partition::new(vec![members(&["A", "B", "C"]), members(&["D", "E"])])
        );
        assert_eq!(balanced.removed_edge_count, 0);
        assert_eq!(
            balanced.moves,
            vec![NodeMove {
                node: "D".to_string(),
                from: 0,
                to: 1,
                severed: 0
            }]
        );
    }

    #[test]
    fn test_ties_break_on_identifier() {
        let graph = graph(&["A", "B", "C", "D"], &[]);
        let partition = Partition::new(vec![
            members(&["D", "C", "B"]),
            members(&["A"]),
            members(&[]),
        ]);

        let balanced = Balancer::new(&graph).balance(partition);

        assert_eq!(
            balanced.partition,
            Partition::new(vec![members(&["C", "D"]), members(&["A"]), members(&["B"])])
        );
    }

    #[test]
    fn test_severed_relations_are_counted_once() {
        // Arrange: a triangle forced apart
        let graph = graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("A", "C")]);
        let partition = Partition::new(vec![members(&["A", "B", "C", "D"]), members(&[])]);

        // Act
        let balanced = Balancer::new(&graph).balance(partition);

        // Assert: A leaves B and C behind, then B leaves C and joins A again
        assert_eq!(
            balanced.partition,
            Partition::new(vec![members(&["C", "D"]), members(&["A", "B"])])
        );
        assert_eq!(balanced.removed_edge_count, 3);
        assert_eq!(
            balanced.moves.iter().map(|m| m.severed).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(
            balanced.severed_edges,
            vec![
                ("A".to_string(), "B".to_string()),
                ("A".to_string(), "C".to_string()),
                ("B".to_string(), "C".to_string())
            ]
        );
        assert!(balanced.partition.covers(&graph));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_relation_into_new_cluster_is_severed() {
        // Arrange: every large-cluster member relates only to E
        let graph = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "E"), ("B", "E"), ("C", "E"), ("D", "E")],
        );
        let partition = Partition::new(vec![members(&["A", "B", "C", "D"]), members(&["E"])]);

        // Act
        let balanced = Balancer::new(&graph).balance(partition);

        // Assert
        assert_eq!(
            balanced.partition,
            Partition::new(vec![members(&["B", "C", "D"]), members(&["A", "E"])])
        );
        assert_eq!(balanced.removed_edge_count, 1);
        assert_eq!(
            balanced.moves,
            vec![NodeMove {
                node: "A".to_string(),
                from: 0,
                to: 1,
                severed: 1
            }]
        );
        assert_eq!(
            balanced.severed_edges,
            vec![("A".to_string(), "E".to_string())]
        );
    }

    #[test]
    fn test_live_external_degree_skips_severed() {
        let graph = graph(&["A", "B", "C"], &[("A", "B"), ("A", "C")]);
        let mut balancer = Balancer::new(&graph);
        let cluster = members(&["A"]);

        assert_eq!(balancer.live_external_degree("A", &cluster), 2);
        assert_eq!(balancer.sever("A", &members(&["B"])), 1);
        assert_eq!(balancer.sever("A", &members(&["B"])), 0);
        assert_eq!(balancer.live_external_degree("A", &cluster), 1);
    }
}
