//! End-to-end category split

use crate::cluster::balance::Balancer;
use crate::cluster::bisection::Bisector;
use crate::cluster::metrics::{summarize_clusters, PartitionReport};
use crate::cluster::{Cluster, Partition};
use crate::config::Config;
use crate::data::{CategoryPair, CategoryRecord};
use crate::error::SplitResult;
use crate::graph::{GraphBuilder, RelationGraph};

/// Everything produced by one split run
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// Relation graph as built from the input; balancing does not modify it
    pub graph: RelationGraph,

    /// Clusters straight out of bisection
    pub initial: Partition,

    /// Final balanced clusters
    pub partition: Partition,

    /// Relations severed by the balancer
    pub severed_edges: Vec<(String, String)>,

    pub report: PartitionReport,
    pub clusters: Vec<Cluster>,
}

/// Build the relation graph from records and split it into balanced clusters
pub fn split_categories(
    categories: &[CategoryRecord],
    pairs: &[CategoryPair],
    config: &Config,
) -> SplitResult<SplitOutcome> {
    let graph = GraphBuilder::from_records(categories, pairs)?;
    split_graph(graph, config)
}

/// Split an existing relation graph into `config.n_clusters` balanced clusters
pub fn split_graph(graph: RelationGraph, config: &Config) -> SplitResult<SplitOutcome> {
    config.validate(graph.node_count())?;

    let bisection = Bisector::new(&graph).partition(config.n_clusters);
    debug_assert!(bisection.partition.covers(&graph));

    let balanced = Balancer::new(&graph).balance(bisection.partition.clone());
    debug_assert!(balanced.partition.covers(&graph));
    debug_assert!(balanced.partition.is_balanced());

    let report = PartitionReport::new(&graph, &bisection, &balanced);
    report.log_summary();
    let clusters = summarize_clusters(&graph, &balanced.partition);

    Ok(SplitOutcome {
        initial: bisection.partition,
        partition: balanced.partition,
        severed_edges: balanced.severed_edges,
        report,
        clusters,
        graph,
    })
}
