//! Population records as served by the dataset API

use serde::{Deserialize, Serialize};

/// One (country, year, population) observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub country_name: String,
    pub year: i32,
    pub population: u64,
}

impl PopulationRecord {
    pub fn new(country_name: impl Into<String>, year: i32, population: u64) -> Self {
        Self {
            country_name: country_name.into(),
            year,
            population,
        }
    }
}
