use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an [`AircraftSpec`] is rejected at load time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("stall speed ({stall_speed} kt) must be below max speed ({max_speed} kt)")]
    StallNotBelowMax { stall_speed: f64, max_speed: f64 },
}

/// Static performance envelope of one aircraft type.
///
/// Speeds are in knots, angular rates in degrees per second and the altitude rate in feet per
/// second. A spec is immutable for the lifetime of a flight session; swap the whole spec to
/// change aircraft.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSpec {
    /// Display name, e.g. "Boeing 737-800".
    pub name: String,
    /// Minimum flying speed (kt). Liftoff threshold and full-authority speed.
    pub stall_speed: f64,
    /// Maximum speed (kt).
    pub max_speed: f64,
    /// Maximum yaw rate in the air (deg/s).
    pub turn_rate: f64,
    /// Maximum pitch rate at full control authority (deg/s).
    pub max_pitch_rate: f64,
    /// Maximum roll rate at full control authority (deg/s).
    pub max_roll_rate: f64,
    /// Acceleration at full throttle from rest (kt/s).
    pub max_throttle_accel: f64,
    /// Scales the linear drag term; 1.0 makes full throttle converge on `max_speed`.
    #[serde(default = "default_drag_factor")]
    pub drag_factor: f64,
    /// Extra fractional drag while the gear is down.
    #[serde(default)]
    pub gear_drag: f64,
    /// Maximum climb or descent rate (ft/s).
    pub max_altitude_rate: f64,
    /// Altitude ceiling (ft).
    pub service_ceiling: f64,
    /// Usable fuel (US gallons).
    pub fuel_capacity: f64,
}

fn default_drag_factor() -> f64 {
    1.0
}

impl Default for AircraftSpec {
    /// The Boeing 737-800 is the default aircraft.
    fn default() -> Self {
        Self::boeing_737()
    }
}

impl AircraftSpec {
    pub fn boeing_737() -> Self {
        Self {
            name: "Boeing 737-800".to_string(),
            stall_speed: 132.0,
            max_speed: 544.0,
            turn_rate: 3.0,
            max_pitch_rate: 10.0,
            max_roll_rate: 20.0,
            max_throttle_accel: 50.0,
            drag_factor: 1.0,
            gear_drag: 0.05,
            max_altitude_rate: 2500.0 / 60.0,
            service_ceiling: 41_000.0,
            fuel_capacity: 6875.0,
        }
    }

    pub fn airbus_a320() -> Self {
        Self {
            name: "Airbus A320".to_string(),
            stall_speed: 127.0,
            max_speed: 537.0,
            turn_rate: 3.2,
            max_pitch_rate: 10.0,
            max_roll_rate: 20.0,
            max_throttle_accel: 48.0,
            drag_factor: 1.0,
            gear_drag: 0.05,
            max_altitude_rate: 2400.0 / 60.0,
            service_ceiling: 39_800.0,
            fuel_capacity: 6400.0,
        }
    }

    pub fn boeing_777() -> Self {
        Self {
            name: "Boeing 777-300ER".to_string(),
            stall_speed: 156.0,
            max_speed: 590.0,
            turn_rate: 2.0,
            max_pitch_rate: 8.0,
            max_roll_rate: 15.0,
            max_throttle_accel: 42.0,
            drag_factor: 1.0,
            gear_drag: 0.05,
            max_altitude_rate: 2000.0 / 60.0,
            service_ceiling: 43_100.0,
            fuel_capacity: 45_220.0,
        }
    }

    pub fn cessna_172() -> Self {
        Self {
            name: "Cessna 172".to_string(),
            stall_speed: 47.0,
            max_speed: 163.0,
            turn_rate: 15.0,
            max_pitch_rate: 15.0,
            max_roll_rate: 30.0,
            max_throttle_accel: 18.0,
            drag_factor: 1.0,
            gear_drag: 0.0,
            max_altitude_rate: 720.0 / 60.0,
            service_ceiling: 14_200.0,
            fuel_capacity: 56.0,
        }
    }

    pub fn embraer_e190() -> Self {
        Self {
            name: "Embraer E190".to_string(),
            stall_speed: 108.0,
            max_speed: 487.0,
            turn_rate: 4.0,
            max_pitch_rate: 12.0,
            max_roll_rate: 22.0,
            max_throttle_accel: 50.0,
            drag_factor: 1.0,
            gear_drag: 0.04,
            max_altitude_rate: 2800.0 / 60.0,
            service_ceiling: 41_000.0,
            fuel_capacity: 3284.0,
        }
    }

    /// Linear drag coefficient (1/s) for the current gear position.
    pub fn drag_coefficient(&self, gear_down: bool) -> f64 {
        let gear = if gear_down { 1.0 + self.gear_drag } else { 1.0 };
        (self.max_throttle_accel / self.max_speed) * self.drag_factor * gear
    }

    /// Checks the spec invariants: every rate and speed positive, stall below max speed.
    pub fn validate(&self) -> Result<(), SpecError> {
        let positive = [
            ("stall_speed", self.stall_speed),
            ("max_speed", self.max_speed),
            ("turn_rate", self.turn_rate),
            ("max_pitch_rate", self.max_pitch_rate),
            ("max_roll_rate", self.max_roll_rate),
            ("max_throttle_accel", self.max_throttle_accel),
            ("drag_factor", self.drag_factor),
            ("max_altitude_rate", self.max_altitude_rate),
            ("service_ceiling", self.service_ceiling),
            ("fuel_capacity", self.fuel_capacity),
        ];

        for (field, value) in positive {
            if !value.is_finite() {
                return Err(SpecError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(SpecError::NonPositive { field, value });
            }
        }

        if !self.gear_drag.is_finite() {
            return Err(SpecError::NonFinite { field: "gear_drag" });
        }
        if self.gear_drag < 0.0 {
            return Err(SpecError::Negative {
                field: "gear_drag",
                value: self.gear_drag,
            });
        }

        if self.stall_speed >= self.max_speed {
            return Err(SpecError::StallNotBelowMax {
                stall_speed: self.stall_speed,
                max_speed: self.max_speed,
            });
        }

        Ok(())
    }
}
