//! Cluster partitioning module

pub mod balance;
pub mod bisection;
pub mod metrics;

use crate::graph::{NodeId, RelationGraph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Members of one cluster, ordered by identifier
pub type ClusterMembers = BTreeSet<NodeId>;

/// Summary of one final cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Position of the cluster in the partition
    pub id: usize,

    /// Members of this cluster (category abbreviations)
    pub members: Vec<NodeId>,

    /// Size of the cluster
    pub size: usize,

    /// Relations with both endpoints in this cluster
    pub internal_edges: usize,

    /// Density: internal edges / potential edges
    pub density: f32,
}

/// Ordered sequence of disjoint clusters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    clusters: Vec<ClusterMembers>,
}

impl Partition {
    pub fn new(clusters: Vec<ClusterMembers>) -> Self {
        Self { clusters }
    }

    pub fn clusters(&self) -> &[ClusterMembers] {
        &self.clusters
    }

    /// Number of clusters
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Size of each cluster, in cluster order
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(BTreeSet::len).collect()
    }

    /// Difference between the largest and smallest cluster size
    pub fn size_spread(&self) -> usize {
        let sizes = self.sizes();
        match (sizes.iter().max(), sizes.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    /// Whether all cluster sizes are within one of each other
    pub fn is_balanced(&self) -> bool {
        self.size_spread() <= 1
    }

    /// Index of the cluster holding `id`
    pub fn cluster_of(&self, id: &str) -> Option<usize> {
        self.clusters.iter().position(|members| members.contains(id))
    }

    /// Cluster index for every assigned node
    pub fn assignment(&self) -> BTreeMap<&NodeId, usize> {
        self.clusters
            .iter()
            .enumerate()
            .flat_map(|(idx, members)| members.iter().map(move |id| (id, idx)))
            .collect()
    }

    /// Move `id` from cluster `from` to cluster `to`; returns false if it was not in `from`
    pub fn move_node(&mut self, id: &str, from: usize, to: usize) -> bool {
        if from == to || to >= self.clusters.len() {
            return false;
        }
        let removed = self
            .clusters
            .get_mut(from)
            .and_then(|members| members.take(id));
        match removed {
            Some(node) => {
                self.clusters[to].insert(node);
                true
            }
            None => false,
        }
    }

    /// Whether every graph node appears in exactly one cluster and nothing else does
    pub fn covers(&self, graph: &RelationGraph) -> bool {
        let total: usize = self.sizes().iter().sum();
        if total != graph.node_count() {
            return false;
        }
        let assigned = self.assignment();
        assigned.len() == total && graph.node_ids().all(|id| assigned.contains_key(id))
    }
}
