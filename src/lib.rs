//! Core library for splitting benchmark categories into balanced, relation-aware clusters

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod storage;

pub use anyhow::{anyhow, Result};
pub use error::{SplitError, SplitResult};
pub use pipeline::{split_categories, split_graph, SplitOutcome};
