//! Input data loading module

pub mod categories;

pub use categories::{CategoryPair, CategoryRecord};
