//! Configuration management for the category splitter

use crate::error::{SplitError, SplitResult};
use std::path::PathBuf;

/// Run configuration for a split
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of clusters to produce
    pub n_clusters: usize,

    /// Directory where results are written, if any
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_clusters: 5,
            output_dir: None,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(n_clusters: usize, output_dir: Option<PathBuf>) -> Self {
        Self {
            n_clusters,
            output_dir,
        }
    }

    /// Create a configuration from a cluster count as given on the command line
    pub fn from_requested(n_clusters: i64, output_dir: Option<PathBuf>) -> SplitResult<Self> {
        match usize::try_from(n_clusters) {
            Ok(n_clusters) if n_clusters > 0 => Ok(Self::new(n_clusters, output_dir)),
            _ => Err(SplitError::configuration(
                n_clusters,
                "at least one cluster is required",
            )),
        }
    }

    fn requested(&self) -> i64 {
        i64::try_from(self.n_clusters).unwrap_or(i64::MAX)
    }

    /// Check the cluster count against the number of categories
    pub fn validate(&self, node_count: usize) -> SplitResult<()> {
        if node_count == 0 {
            return Err(SplitError::configuration(
                self.requested(),
                "category list is empty",
            ));
        }
        if self.n_clusters == 0 {
            return Err(SplitError::configuration(
                self.requested(),
                "at least one cluster is required",
            ));
        }
        if self.n_clusters > node_count {
            return Err(SplitError::configuration(
                self.requested(),
                format!("exceeds category count {}", node_count),
            ));
        }
        Ok(())
    }
}
