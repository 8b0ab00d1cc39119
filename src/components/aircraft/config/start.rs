use bevy::prelude::*;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::components::airport::find_airport;
use crate::components::AircraftState;

/// Where and how an aircraft starts its flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StartConfig {
    /// Parked at the threshold of a runway, aligned with it. `None` picks the longest runway.
    Runway {
        airport: String,
        runway: Option<String>,
    },
    /// Anywhere, at any speed. Used for in-flight starts.
    Fixed {
        position: Vector2<f64>,
        altitude: f64,
        heading: f64,
        speed: f64,
    },
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Runway {
            airport: "JFK".to_string(),
            runway: None,
        }
    }
}

impl StartConfig {
    /// Builds the initial aircraft state.
    ///
    /// Runway starts are at rest with the gear down and the throttle closed. Fixed starts above
    /// the ground take the gear up and a throttle setting that holds the requested speed.
    pub fn initial_state(&self, max_speed: f64) -> Result<AircraftState, ConfigError> {
        match self {
            StartConfig::Runway { airport, runway } => {
                let airport =
                    find_airport(airport).ok_or_else(|| ConfigError::UnknownAirport(airport.clone()))?;

                let selected = match runway {
                    Some(designator) => airport.runway(designator).ok_or_else(|| {
                        ConfigError::UnknownRunway {
                            airport: airport.code.clone(),
                            runway: designator.clone(),
                        }
                    })?,
                    None => airport.primary_runway().ok_or_else(|| {
                        ConfigError::ValidationError(format!("{} has no runways", airport.code))
                    })?,
                };

                info!(
                    "Starting at {} runway {} heading {:.0}",
                    airport.code, selected.designator, selected.heading
                );
                Ok(AircraftState::at_rest(
                    airport.runway_start_position(selected),
                    selected.heading,
                ))
            }
            StartConfig::Fixed {
                position,
                altitude,
                heading,
                speed,
            } => {
                if !altitude.is_finite() || *altitude < 0.0 {
                    return Err(ConfigError::ValidationError(format!(
                        "start altitude must be a non-negative number, got {altitude}"
                    )));
                }
                if !heading.is_finite() {
                    return Err(ConfigError::ValidationError(format!(
                        "start heading must be a finite number, got {heading}"
                    )));
                }
                if !(position.x.is_finite() && position.y.is_finite()) {
                    return Err(ConfigError::ValidationError(format!(
                        "start position must be finite, got ({}, {})",
                        position.x, position.y
                    )));
                }
                if !speed.is_finite() || *speed < 0.0 || *speed > max_speed {
                    return Err(ConfigError::ValidationError(format!(
                        "start speed must lie in [0, {max_speed}], got {speed}"
                    )));
                }

                let in_flight = *altitude > 0.0;
                Ok(AircraftState {
                    position: Vector3::new(position.x, position.y, *altitude),
                    heading: heading.rem_euclid(360.0),
                    speed: *speed,
                    throttle: (speed / max_speed * 100.0).clamp(0.0, 100.0),
                    gear_down: !in_flight,
                    airborne: in_flight,
                    ..Default::default()
                })
            }
        }
    }
}
