//! Relation graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod relation;

pub use builder::GraphBuilder;
pub use relation::{NodeId, RelationGraph};
