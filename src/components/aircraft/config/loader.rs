use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::components::aircraft::config::{AircraftSpec, SpecError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft spec: {0}")]
    InvalidSpec(#[from] SpecError),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    #[error("Unknown aircraft type: {0}")]
    UnknownAircraft(String),
    #[error("Unknown airport: {0}")]
    UnknownAirport(String),
    #[error("Airport {airport} has no runway {runway}")]
    UnknownRunway { airport: String, runway: String },
}

/// On-disk layout of an aircraft table: a single spec or a list of specs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawAircraftTable {
    Single(AircraftSpec),
    Many(Vec<AircraftSpec>),
}

impl RawAircraftTable {
    fn into_specs(self) -> Vec<AircraftSpec> {
        match self {
            RawAircraftTable::Single(spec) => vec![spec],
            RawAircraftTable::Many(specs) => specs,
        }
    }
}

/// Parses and validates every spec in a YAML aircraft table.
pub fn parse_aircraft_table(contents: &str) -> Result<Vec<AircraftSpec>, ConfigError> {
    let raw: RawAircraftTable = serde_yaml::from_str(contents)?;
    let specs = raw.into_specs();

    if specs.is_empty() {
        return Err(ConfigError::ValidationError(
            "aircraft table contains no entries".to_string(),
        ));
    }

    for spec in &specs {
        spec.validate()?;
    }

    Ok(specs)
}

/// Reads an aircraft table from a YAML file.
pub fn load_aircraft_table<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftSpec>, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_aircraft_table(&contents)
}
