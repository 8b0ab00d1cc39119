use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{load_aircraft_table, AircraftSpec, ConfigError};

/// Enumeration of available aircraft types.
#[derive(Component, Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    Boeing737,
    AirbusA320,
    Boeing777,
    Cessna172,
    EmbraerE190,
    Custom(String),
}

impl AircraftType {
    /// The programmed aircraft, in menu order.
    pub fn all() -> [AircraftType; 5] {
        [
            AircraftType::Boeing737,
            AircraftType::AirbusA320,
            AircraftType::Boeing777,
            AircraftType::Cessna172,
            AircraftType::EmbraerE190,
        ]
    }

    pub fn display_name(&self) -> &str {
        match self {
            AircraftType::Boeing737 => "Boeing 737-800",
            AircraftType::AirbusA320 => "Airbus A320",
            AircraftType::Boeing777 => "Boeing 777-300ER",
            AircraftType::Cessna172 => "Cessna 172",
            AircraftType::EmbraerE190 => "Embraer E190",
            AircraftType::Custom(name) => name,
        }
    }

    /// Looks up a programmed aircraft by display name, ignoring case.
    pub fn from_name(name: &str) -> Option<AircraftType> {
        Self::all()
            .into_iter()
            .find(|ac_type| ac_type.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Source for an aircraft spec.
/// Can either be a hardcoded table entry (`Programmed`) or loaded from a YAML file (`File`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AircraftSource {
    Programmed(AircraftType),
    /// Path to a YAML aircraft table and the name of the entry to use. `None` takes the first.
    File { path: PathBuf, name: Option<String> },
}

impl Default for AircraftSource {
    fn default() -> Self {
        AircraftSource::Programmed(AircraftType::Boeing737)
    }
}

impl AircraftSpec {
    /// Resolves an aircraft source into a validated spec.
    ///
    /// # Arguments
    /// * `source` - Programmed type or YAML table on disk.
    ///
    /// # Returns
    /// The spec, or the load/validation error. Custom types are only resolvable from files.
    pub fn new(source: &AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(ac_type) => Self::from_programmed(ac_type),
            AircraftSource::File { path, name } => Self::from_file(path, name.as_deref()),
        }
    }

    /// Creates the spec for a predefined aircraft type.
    pub fn from_programmed(ac_type: &AircraftType) -> Result<Self, ConfigError> {
        match ac_type {
            AircraftType::Boeing737 => Ok(Self::boeing_737()),
            AircraftType::AirbusA320 => Ok(Self::airbus_a320()),
            AircraftType::Boeing777 => Ok(Self::boeing_777()),
            AircraftType::Cessna172 => Ok(Self::cessna_172()),
            AircraftType::EmbraerE190 => Ok(Self::embraer_e190()),
            AircraftType::Custom(name) => Err(ConfigError::UnknownAircraft(name.clone())),
        }
    }

    fn from_file(path: &Path, name: Option<&str>) -> Result<Self, ConfigError> {
        let specs = load_aircraft_table(path)?;

        match name {
            Some(name) => specs
                .into_iter()
                .find(|spec| spec.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| ConfigError::UnknownAircraft(name.to_string())),
            None => specs
                .into_iter()
                .next()
                .ok_or_else(|| ConfigError::ValidationError("empty aircraft table".to_string())),
        }
    }
}
