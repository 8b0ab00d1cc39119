use bevy::prelude::*;

use crate::{
    components::{AircraftSpec, StartConfig},
    systems::FlightRegime,
};

/// An aircraft crossed the ground/air threshold.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct RegimeChanged {
    pub entity: Entity,
    pub from: FlightRegime,
    pub to: FlightRegime,
}

/// An aircraft came back onto the ground.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct Touchdown {
    pub entity: Entity,
    /// Sink rate at contact (ft/s).
    pub sink_rate: f64,
    pub speed: f64,
    pub hard: bool,
}

/// Replace the player aircraft with a different type at a new start position.
#[derive(Event, Debug, Clone)]
pub struct SwapAircraft {
    pub spec: AircraftSpec,
    pub start: StartConfig,
}
