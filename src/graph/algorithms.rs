//! Graph algorithms for partition analysis

use crate::cluster::{ClusterMembers, Partition};
use crate::graph::{NodeId, RelationGraph};

/// Count relations whose endpoints lie in different clusters
pub fn crossing_edges(graph: &RelationGraph, partition: &Partition) -> usize {
    let assignment = partition.assignment();

    graph
        .edges()
        .filter(|(a, b)| assignment.get(a) != assignment.get(b))
        .count()
}

/// Count relations with both endpoints inside `members`
pub fn internal_edges(graph: &RelationGraph, members: &ClusterMembers) -> usize {
    members
        .iter()
        .map(|node| {
            graph
                .neighbors(node)
                // Count each edge from its smaller endpoint only
                .filter(|neighbor| *neighbor > node && members.contains(*neighbor))
                .count()
        })
        .sum()
}

/// Neighbors of `node` outside `members`, in ascending order
pub fn external_neighbors<'a>(
    graph: &'a RelationGraph,
    node: &str,
    members: &'a ClusterMembers,
) -> impl Iterator<Item = &'a NodeId> + 'a {
    graph
        .neighbors(node)
        .filter(move |neighbor| !members.contains(*neighbor))
}

/// Density of an undirected cluster (internal edges / potential edges)
pub fn density(graph: &RelationGraph, members: &ClusterMembers) -> f32 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singleton clusters have density 1
    }

    let potential_edges = n * (n - 1) / 2;
    internal_edges(graph, members) as f32 / potential_edges as f32
}
