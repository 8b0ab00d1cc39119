use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;

/// Tuning record for the flight dynamics model.
///
/// Collects every regime threshold and calibration constant in one place so tests and tools can
/// override them without touching the integration code. None of these are physical invariants.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModelParams {
    /// Throttle travel per second at full lever request (percent/s).
    pub throttle_response_rate: f64,
    /// Altitude (ft) below which the ground regime applies.
    pub ground_threshold: f64,
    /// Lowest control effectiveness, however slow the aircraft.
    pub effectiveness_floor: f64,
    /// Yaw rate limit while taxiing (deg/s), independent of the aircraft type.
    pub ground_yaw_rate: f64,
    /// Pitch limit (degrees either side of level).
    pub max_pitch_deg: f64,
    /// Roll limit (degrees either side of level).
    pub max_roll_deg: f64,
    /// Converts knots into feet per second for the climb rate.
    pub feet_per_knot_second: f64,
    /// Ground units travelled per knot per second.
    pub ground_units_per_knot_second: f64,
    /// Sink rate (ft/s) added at zero airspeed while stalled, scaled down towards stall speed.
    pub stall_sink_rate: f64,
    /// Nose-down pitch rate while stalled (deg/s).
    pub stall_pitch_drop: f64,
    /// Fraction of the aircraft turn rate gained from a full bank.
    pub bank_turn_factor: f64,
    /// Bank (degrees) below which no coordinated turn is applied.
    pub bank_turn_deadband_deg: f64,
    /// Wheel brake deceleration on the ground (kt/s).
    pub brake_deceleration: f64,
    /// Sink rate (ft/s) above which a touchdown is reported as hard.
    pub hard_landing_sink_rate: f64,
    /// Fuel flow with the engine at idle (gal/s).
    pub fuel_idle_burn: f64,
    /// Extra fuel flow at full throttle (gal/s), linear in throttle.
    pub fuel_throttle_burn: f64,
}

impl Default for FlightModelParams {
    fn default() -> Self {
        Self {
            throttle_response_rate: 20.0,
            ground_threshold: 10.0,
            effectiveness_floor: 0.3,
            ground_yaw_rate: 30.0,
            max_pitch_deg: 30.0,
            max_roll_deg: 45.0,
            feet_per_knot_second: 1.68781,
            ground_units_per_knot_second: 0.1,
            stall_sink_rate: 500.0 / 60.0,
            stall_pitch_drop: 20.0,
            bank_turn_factor: 0.5,
            bank_turn_deadband_deg: 5.0,
            brake_deceleration: 8.0,
            hard_landing_sink_rate: 10.0,
            fuel_idle_burn: 0.05,
            fuel_throttle_burn: 0.1,
        }
    }
}

impl FlightModelParams {
    /// Rejects values the dynamics step cannot integrate sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("throttle_response_rate", self.throttle_response_rate),
            ("ground_yaw_rate", self.ground_yaw_rate),
            ("max_pitch_deg", self.max_pitch_deg),
            ("max_roll_deg", self.max_roll_deg),
            ("feet_per_knot_second", self.feet_per_knot_second),
            ("ground_units_per_knot_second", self.ground_units_per_knot_second),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("ground_threshold", self.ground_threshold),
            ("stall_sink_rate", self.stall_sink_rate),
            ("stall_pitch_drop", self.stall_pitch_drop),
            ("bank_turn_factor", self.bank_turn_factor),
            ("bank_turn_deadband_deg", self.bank_turn_deadband_deg),
            ("brake_deceleration", self.brake_deceleration),
            ("hard_landing_sink_rate", self.hard_landing_sink_rate),
            ("fuel_idle_burn", self.fuel_idle_burn),
            ("fuel_throttle_burn", self.fuel_throttle_burn),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.effectiveness_floor) {
            return Err(ConfigError::ValidationError(format!(
                "effectiveness_floor must lie in [0, 1], got {}",
                self.effectiveness_floor
            )));
        }
        if self.max_pitch_deg >= 90.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_pitch_deg must be below 90, got {}",
                self.max_pitch_deg
            )));
        }

        Ok(())
    }

    /// Seconds for the throttle to travel from idle to full at full lever request.
    pub fn full_throttle_time(&self) -> f64 {
        100.0 / self.throttle_response_rate
    }
}
