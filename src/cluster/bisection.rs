//! Recursive balanced min-cut bisection
//!
//! The initial multi-way split is produced in rounds: every part with more
//! than one node is cut into two halves of sizes `⌊k/2⌋` and `⌈k/2⌉`, doubling
//! the part count, until at least the requested number of parts exists. Each
//! cut is refined by pairwise swaps that strictly reduce the number of
//! relations crossing it.
//!
//! When the requested count is not a power of two the last round overshoots.
//! Surplus parts are then merged, two smallest first, until exactly the
//! requested count remains, so no node is ever dropped.

use crate::cluster::{ClusterMembers, Partition};
use crate::graph::algorithms::crossing_edges;
use crate::graph::{NodeId, RelationGraph};
use std::collections::BTreeSet;

/// Result of the initial split
#[derive(Debug, Clone)]
pub struct Bisection {
    /// Initial clusters, at most the requested count
    pub partition: Partition,

    /// Relations crossing between initial clusters
    pub crossing_edges: usize,

    /// Number of bisection rounds performed
    pub rounds: usize,
}

/// Splits a relation graph into parts by recursive two-way min-cut
pub struct Bisector<'g> {
    graph: &'g RelationGraph,
}

impl<'g> Bisector<'g> {
    pub fn new(graph: &'g RelationGraph) -> Self {
        Self { graph }
    }

    /// Produce an initial partition with at most `n_clusters` clusters
    pub fn partition(&self, n_clusters: usize) -> Bisection {
        let all_nodes: Vec<NodeId> = self.graph.node_ids().cloned().collect();

        let (parts, rounds) = if n_clusters <= 1 || all_nodes.len() <= 1 {
            (vec![all_nodes], 0)
        } else {
            self.split_rounds(vec![all_nodes], n_clusters, 0)
        };

        let parts = merge_surplus(parts, n_clusters.max(1));
        let partition = Partition::new(
            parts
                .into_iter()
                .map(|part| part.into_iter().collect::<ClusterMembers>())
                .collect(),
        );
        let crossing_edges = crossing_edges(self.graph, &partition);

        log::info!(
            "Initial bisection produced {} clusters after {} rounds",
            partition.len(),
            rounds
        );
        log::info!(
            "Number of crossing edges between clusters: {}",
            crossing_edges
        );

        Bisection {
            partition,
            crossing_edges,
            rounds,
        }
    }

    /// Bisect every splittable part until there are at least `target` parts
    fn split_rounds(
        &self,
        parts: Vec<Vec<NodeId>>,
        target: usize,
        rounds: usize,
    ) -> (Vec<Vec<NodeId>>, usize) {
        if parts.len() >= target || parts.iter().all(|part| part.len() <= 1) {
            return (parts, rounds);
        }

        let mut next = Vec::with_capacity(parts.len() * 2);
        for part in parts {
            if part.len() > 1 {
                let (left, right) = self.bisect(&part);
                next.push(left);
                next.push(right);
            } else {
                next.push(part);
            }
        }
        log::debug!("Bisection round {} yields {} parts", rounds + 1, next.len());

        self.split_rounds(next, target, rounds + 1)
    }

    /// Cut `subset` into halves of sizes `⌊k/2⌋` and `⌈k/2⌉` minimizing crossing relations.
    ///
    /// Only relations inside `subset` are considered. The search starts with
    /// the lower half of the sorted identifiers on the left, then repeatedly
    /// applies the swap with the largest strictly positive gain. Among equal
    /// gains the swap whose (left, right) identifiers sort first wins.
    pub fn bisect(&self, subset: &[NodeId]) -> (Vec<NodeId>, Vec<NodeId>) {
        let mut nodes: Vec<&NodeId> = subset.iter().collect();
        nodes.sort();
        nodes.dedup();
        let k = nodes.len();

        let adjacency = local_adjacency(self.graph, &nodes);
        let mut on_right: Vec<bool> = (0..k).map(|i| i >= k / 2).collect();

        let mut swaps = 0;
        while let Some((a, b)) = best_swap(&adjacency, &on_right) {
            on_right[a] = true;
            on_right[b] = false;
            swaps += 1;
        }
        log::debug!("Bisected {} nodes with {} swaps", k, swaps);

        let mut left = Vec::with_capacity(k / 2);
        let mut right = Vec::with_capacity(k - k / 2);
        for (node, &is_right) in nodes.into_iter().zip(&on_right) {
            if is_right {
                right.push(node.clone());
            } else {
                left.push(node.clone());
            }
        }

        (left, right)
    }
}

/// Neighbor sets restricted to `nodes`, indexed by position in `nodes`
fn local_adjacency(graph: &RelationGraph, nodes: &[&NodeId]) -> Vec<BTreeSet<usize>> {
    nodes
        .iter()
        .map(|node| {
            graph
                .neighbors(node)
                .filter_map(|neighbor| nodes.binary_search(&neighbor).ok())
                .collect()
        })
        .collect()
}

/// External minus internal degree of each node with respect to its side
fn cut_differences(adjacency: &[BTreeSet<usize>], on_right: &[bool]) -> Vec<i64> {
    adjacency
        .iter()
        .enumerate()
        .map(|(node, neighbors)| {
            neighbors.iter().fold(0i64, |acc, &other| {
                if on_right[other] == on_right[node] {
                    acc - 1
                } else {
                    acc + 1
                }
            })
        })
        .collect()
}

/// The best strictly improving (left, right) swap, if any
fn best_swap(adjacency: &[BTreeSet<usize>], on_right: &[bool]) -> Option<(usize, usize)> {
    let diffs = cut_differences(adjacency, on_right);
    let mut best: Option<(i64, usize, usize)> = None;

    for a in (0..on_right.len()).filter(|&i| !on_right[i]) {
        for b in (0..on_right.len()).filter(|&i| on_right[i]) {
            let shared = if adjacency[a].contains(&b) { 2 } else { 0 };
            let gain = diffs[a] + diffs[b] - shared;
            // Strict comparison keeps the first pair in identifier order on ties
            if gain > 0 && best.map_or(true, |(best_gain, _, _)| gain > best_gain) {
                best = Some((gain, a, b));
            }
        }
    }

    best.map(|(_, a, b)| (a, b))
}

/// Merge the two smallest parts until at most `target` remain
fn merge_surplus(mut parts: Vec<Vec<NodeId>>, target: usize) -> Vec<Vec<NodeId>> {
    while parts.len() > target {
        let mut order: Vec<usize> = (0..parts.len()).collect();
        order.sort_by_key(|&idx| (parts[idx].len(), idx));
        let (keep, absorb) = if order[0] < order[1] {
            (order[0], order[1])
        } else {
            (order[1], order[0])
        };

        let absorbed = parts.remove(absorb);
        log::debug!(
            "Merging surplus part {} ({} nodes) into part {}",
            absorb,
            absorbed.len(),
            keep
        );
        parts[keep].extend(absorbed);
    }
    parts
}
