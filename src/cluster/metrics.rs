//! Partition diagnostics

use crate::cluster::balance::Balanced;
use crate::cluster::bisection::Bisection;
use crate::cluster::{Cluster, Partition};
use crate::graph::algorithms::{crossing_edges, density, internal_edges};
use crate::graph::RelationGraph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Counters describing one split run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReport {
    /// Relations crossing between the initial (bisected) clusters
    pub initial_crossing_edges: usize,

    /// Relations severed by the balancer
    pub removed_edge_count: usize,

    /// Relations crossing between the final clusters
    pub final_crossing_edges: usize,

    /// Size of each final cluster
    pub cluster_sizes: Vec<usize>,

    /// Relations kept inside each final cluster
    pub internal_edges: Vec<usize>,

    pub node_count: usize,
    pub edge_count: usize,
}

impl PartitionReport {
    pub fn new(graph: &RelationGraph, bisection: &Bisection, balanced: &Balanced) -> Self {
        let partition = &balanced.partition;
        Self {
            initial_crossing_edges: bisection.crossing_edges,
            removed_edge_count: balanced.removed_edge_count,
            final_crossing_edges: crossing_edges(graph, partition),
            cluster_sizes: partition.sizes(),
            internal_edges: partition
                .clusters()
                .iter()
                .map(|members| internal_edges(graph, members))
                .collect(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
        }
    }

    /// Difference between the largest and smallest final cluster
    pub fn size_spread(&self) -> usize {
        match self.cluster_sizes.iter().minmax().into_option() {
            Some((min, max)) => max - min,
            None => 0,
        }
    }

    pub fn log_summary(&self) {
        log::info!(
            "Split {} categories with {} relations into {} clusters",
            self.node_count,
            self.edge_count,
            self.cluster_sizes.len()
        );
        log::info!(
            "Crossing edges: {} initial, {} final; edges removed while balancing: {}",
            self.initial_crossing_edges,
            self.final_crossing_edges,
            self.removed_edge_count
        );
        log::info!(
            "Cluster sizes: [{}] (spread {})",
            self.cluster_sizes.iter().join(", "),
            self.size_spread()
        );
    }
}

/// Summaries for every cluster of a partition
pub fn summarize_clusters(graph: &RelationGraph, partition: &Partition) -> Vec<Cluster> {
    partition
        .clusters()
        .iter()
        .enumerate()
        .map(|(id, members)| Cluster {
            id,
            members: members.iter().cloned().collect(),
            size: members.len(),
            internal_edges: internal_edges(graph, members),
            density: density(graph, members),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::balance::Balancer;
    use crate::cluster::bisection::Bisector;

    fn path_graph() -> RelationGraph {
        // A-B-C-D-E-F
        let mut graph = RelationGraph::new();
        for id in ["A", "B", "C", "D", "E", "F"] {
            graph.add_node(id, None);
        }
        for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "F")] {
            graph.add_edge(a, b).unwrap();
        }
        graph
    }

    #[test]
    fn test_report_counters() {
        // Arrange
        let graph = path_graph();
        let bisection = Bisector::new(&graph).partition(2);
        let balanced = Balancer::new(&graph).balance(bisection.partition.clone());

        // Act
        let report = PartitionReport::new(&graph, &bisection, &balanced);

        // Assert
        assert_eq!(report.initial_crossing_edges, 1);
        assert_eq!(report.final_crossing_edges, 1);
        assert_eq!(report.removed_edge_count, 0);
        assert_eq!(report.cluster_sizes, vec![3, 3]);
        assert_eq!(report.internal_edges, vec![2, 2]);
        assert_eq!(report.size_spread(), 0);
    }

    #[test]
    fn test_summarize_clusters() {
        let graph = path_graph();
        let bisection = Bisector::new(&graph).partition(2);

        let clusters = summarize_clusters(&graph, &bisection.partition);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].members, vec!["A", "B", "C"]);
        assert_eq!(clusters[1].id, 1);
        assert!((clusters[1].density - 2.0 / 3.0).abs() < f32::EPSILON);
    }
}
