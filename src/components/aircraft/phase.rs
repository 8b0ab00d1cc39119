use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AircraftSpec, AircraftState};

/// Below this altitude (ft) the aircraft counts as rolling on the runway.
const GROUND_CONTACT_ALTITUDE: f64 = 5.0;
/// Below this speed (kt) a rolling aircraft is taxiing.
const TAXI_SPEED: f64 = 10.0;
const LOW_ALTITUDE: f64 = 1000.0;
const CRUISE_ALTITUDE: f64 = 10_000.0;
/// Speed of sound used for the Mach readout (kt).
const SPEED_OF_SOUND: f64 = 661.5;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    Ground,
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Approach,
}

impl FlightPhase {
    /// Classifies the phase of flight from altitude, speed and pitch.
    pub fn classify(state: &AircraftState) -> Self {
        let altitude = state.altitude();
        let pitch = state.pitch;

        if altitude < GROUND_CONTACT_ALTITUDE {
            if state.speed < TAXI_SPEED {
                FlightPhase::Ground
            } else {
                FlightPhase::Takeoff
            }
        } else if altitude < LOW_ALTITUDE {
            if pitch < -5.0 {
                FlightPhase::Approach
            } else {
                FlightPhase::Climb
            }
        } else if altitude > CRUISE_ALTITUDE {
            if pitch.abs() < 3.0 {
                FlightPhase::Cruise
            } else if pitch > 0.0 {
                FlightPhase::Climb
            } else {
                FlightPhase::Descent
            }
        } else if pitch > 3.0 {
            FlightPhase::Climb
        } else if pitch < -3.0 {
            FlightPhase::Descent
        } else {
            FlightPhase::Cruise
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlightPhase::Ground => "Ground",
            FlightPhase::Takeoff => "Takeoff",
            FlightPhase::Climb => "Climb",
            FlightPhase::Cruise => "Cruise",
            FlightPhase::Descent => "Descent",
            FlightPhase::Approach => "Approach",
        }
    }
}

/// Instrument readout derived from one state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub aircraft: String,
    pub phase: FlightPhase,
    pub x: f64,
    pub y: f64,
    /// Altitude (ft AGL).
    pub altitude: f64,
    /// Heading (degrees).
    pub heading: f64,
    /// Airspeed (kt).
    pub ground_speed: f64,
    /// Climb rate (ft/min).
    pub vertical_speed: f64,
    pub mach: f64,
    pub pitch: f64,
    pub bank: f64,
    /// Throttle (percent).
    pub throttle: f64,
    /// Fuel remaining (percent of the tank).
    pub fuel_percent: f64,
    /// Fuel remaining (gal).
    pub fuel_gallons: f64,
    pub gear_down: bool,
    pub airborne: bool,
    /// Below stall speed while flying.
    pub stalled: bool,
}

impl FlightInfo {
    pub fn from_state(state: &AircraftState, spec: &AircraftSpec) -> Self {
        Self {
            aircraft: spec.name.clone(),
            phase: FlightPhase::classify(state),
            x: state.position.x,
            y: state.position.y,
            altitude: state.altitude(),
            heading: state.heading,
            ground_speed: state.speed,
            vertical_speed: state.vertical_speed * 60.0,
            mach: state.speed / SPEED_OF_SOUND,
            pitch: state.pitch,
            bank: state.roll,
            throttle: state.throttle,
            fuel_percent: state.fuel * 100.0,
            fuel_gallons: state.fuel * spec.fuel_capacity,
            gear_down: state.gear_down,
            airborne: state.airborne,
            stalled: !state.on_ground() && state.speed < spec.stall_speed,
        }
    }
}
