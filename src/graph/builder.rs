//! Graph construction module

use crate::data::{CategoryPair, CategoryRecord};
use crate::error::SplitResult;
use crate::graph::RelationGraph;

/// Builder for incrementally constructing a RelationGraph
pub struct GraphBuilder {
    /// Graph under construction
    graph: RelationGraph,

    /// Number of category records skipped as duplicates
    duplicate_categories: usize,

    /// Number of pairs that repeated an existing relation
    duplicate_pairs: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: RelationGraph::new(),
            duplicate_categories: 0,
            duplicate_pairs: 0,
        }
    }

    /// Build a graph from loaded category and pair records
    pub fn from_records(
        categories: &[CategoryRecord],
        pairs: &[CategoryPair],
    ) -> SplitResult<RelationGraph> {
        let mut builder = Self::new();
        for category in categories {
            builder.add_category(category);
        }
        for pair in pairs {
            builder.add_pair(pair)?;
        }
        builder.build()
    }

    /// Add a category node; a repeated abbreviation keeps the first record
    pub fn add_category(&mut self, category: &CategoryRecord) {
        if self.graph.has_node(&category.abbreviation) {
            log::warn!(
                "Duplicate category '{}' ({}); keeping first record",
                category.abbreviation,
                category.name
            );
            self.duplicate_categories += 1;
            return;
        }
        self.graph
            .add_node(&category.abbreviation, Some(&category.name));
    }

    /// Add a relation between two previously added categories
    pub fn add_pair(&mut self, pair: &CategoryPair) -> SplitResult<()> {
        let CategoryPair(a, b) = pair;
        let before = self.graph.edge_count();
        self.graph.add_edge(a, b)?;
        if self.graph.edge_count() == before {
            self.duplicate_pairs += 1;
        }
        Ok(())
    }

    /// Finish construction
    pub fn build(self) -> SplitResult<RelationGraph> {
        if self.duplicate_pairs > 0 {
            log::debug!("Ignored {} duplicate pairs", self.duplicate_pairs);
        }
        log::info!(
            "Built relation graph with {} categories and {} relations ({} duplicate categories skipped)",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.duplicate_categories
        );
        Ok(self.graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
