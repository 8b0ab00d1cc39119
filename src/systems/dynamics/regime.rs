use serde::{Deserialize, Serialize};

use crate::{components::AircraftSpec, resources::FlightModelParams};

/// Which set of control rules applies on a tick.
///
/// Evaluated from altitude every tick; there is no latch, so hovering around the threshold simply
/// flips between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightRegime {
    Ground,
    Air,
}

impl FlightRegime {
    pub fn from_altitude(altitude: f64, params: &FlightModelParams) -> Self {
        if altitude < params.ground_threshold {
            FlightRegime::Ground
        } else {
            FlightRegime::Air
        }
    }

    pub fn is_ground(&self) -> bool {
        matches!(self, FlightRegime::Ground)
    }
}

/// Control gains for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlAuthority {
    pub regime: FlightRegime,
    /// Scales pitch and roll in both regimes, and yaw in the air.
    pub air_effectiveness: f64,
    pub yaw_effectiveness: f64,
    /// Yaw rate at full pedal (deg/s).
    pub yaw_rate_limit: f64,
}

impl ControlAuthority {
    pub fn new(
        regime: FlightRegime,
        speed: f64,
        spec: &AircraftSpec,
        params: &FlightModelParams,
    ) -> Self {
        let air_effectiveness =
            air_effectiveness(speed, spec.stall_speed, params.effectiveness_floor);

        match regime {
            // Nosewheel steering: full authority at any speed, fixed rate for every type.
            FlightRegime::Ground => Self {
                regime,
                air_effectiveness,
                yaw_effectiveness: 1.0,
                yaw_rate_limit: params.ground_yaw_rate,
            },
            FlightRegime::Air => Self {
                regime,
                air_effectiveness,
                yaw_effectiveness: air_effectiveness,
                yaw_rate_limit: spec.turn_rate,
            },
        }
    }
}

/// Aerodynamic control effectiveness: speed over stall speed, floored and capped at 1.
///
/// A non-positive stall speed counts as always flying.
pub fn air_effectiveness(speed: f64, stall_speed: f64, floor: f64) -> f64 {
    if stall_speed <= 0.0 {
        return 1.0;
    }
    (speed / stall_speed).max(floor).clamp(0.0, 1.0)
}
