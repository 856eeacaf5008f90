//! JSON seed data for the catalog, fleet and tourist spots.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BusPosition, Route, Stop, TouristSpot};

use super::error::CatalogError;

/// Everything the server loads at startup.
///
/// Every section is optional in the file and defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub buses: Vec<BusPosition>,
    #[serde(default)]
    pub spots: Vec<TouristSpot>,
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse seed data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}
