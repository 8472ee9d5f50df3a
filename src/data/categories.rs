//! JSON handling for category and pair lists

use crate::error::{SplitError, SplitResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One benchmark category as listed in the categories file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Unique short code, used as the node identifier
    pub abbreviation: String,

    /// Human-readable name
    pub name: String,
}

impl CategoryRecord {
    pub fn new(abbreviation: &str, name: &str) -> Self {
        Self {
            abbreviation: abbreviation.to_string(),
            name: name.to_string(),
        }
    }
}

/// Two categories known to co-occur, stored as a 2-element array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPair(pub String, pub String);

impl CategoryPair {
    pub fn new(a: &str, b: &str) -> Self {
        Self(a.to_string(), b.to_string())
    }
}

/// Parse a category list from a JSON string
pub fn parse_categories(json: &str) -> SplitResult<Vec<CategoryRecord>> {
    serde_json::from_str(json).map_err(|source| SplitError::Parse {
        origin: "category list".to_string(),
        source,
    })
}

/// Parse a pair list from a JSON string
pub fn parse_pairs(json: &str) -> SplitResult<Vec<CategoryPair>> {
    serde_json::from_str(json).map_err(|source| SplitError::Parse {
        origin: "pair list".to_string(),
        source,
    })
}

/// Load the category list from a JSON file
pub fn load_categories(path: &Path) -> SplitResult<Vec<CategoryRecord>> {
    log::info!("Reading categories file: {}", path.display());

    let contents = read_file(path)?;
    let categories: Vec<CategoryRecord> =
        serde_json::from_str(&contents).map_err(|source| SplitError::Parse {
            origin: path.display().to_string(),
            source,
        })?;

    log::info!("Loaded {} categories", categories.len());
    Ok(categories)
}

/// Load the pair list from a JSON file
pub fn load_pairs(path: &Path) -> SplitResult<Vec<CategoryPair>> {
    log::info!("Reading pairs file: {}", path.display());

    let contents = read_file(path)?;
    let pairs: Vec<CategoryPair> =
        serde_json::from_str(&contents).map_err(|source| SplitError::Parse {
            origin: path.display().to_string(),
            source,
        })?;

    log::info!("Loaded {} category pairs", pairs.len());
    Ok(pairs)
}

fn read_file(path: &Path) -> SplitResult<String> {
    std::fs::read_to_string(path).map_err(|source| SplitError::Io {
        path: path.to_path_buf(),
        source,
    })
}
