use nalgebra::Vector3;

use super::regime::{ControlAuthority, FlightRegime};
use crate::{
    components::{AircraftSpec, AircraftState, ControlInputState},
    resources::FlightModelParams,
};

/// Advances one aircraft by `dt` seconds and returns the new state.
///
/// The step is a pure function of its arguments: the ground/air regime is derived from
/// `state`'s altitude, nothing is cached between calls, and identical inputs give bit-identical
/// outputs. A non-positive or non-finite `dt` returns the state unchanged. Control axes are
/// clamped to `[-1, 1]` and non-finite axes count as neutral.
///
/// Order of evaluation:
/// 1. throttle moves at `throttle_response_rate` toward the lever request
/// 2. speed integrates throttle acceleration against speed-proportional drag, then wheel brakes;
///    an empty tank gives no thrust
/// 3. control authority from the regime and the new speed
/// 4. heading, pitch and roll, with the coordinated bank turn in the air
/// 5. altitude from the climb rate, gated on the ground until the aircraft can fly; below stall
///    speed anywhere off the ground the nose drops and the aircraft cannot climb
/// 6. ground position along the new heading
pub fn step(
    state: &AircraftState,
    spec: &AircraftSpec,
    controls: &ControlInputState,
    params: &FlightModelParams,
    dt: f64,
) -> AircraftState {
    if !(dt.is_finite() && dt > 0.0) {
        return *state;
    }
    let controls = controls.sanitized();
    let gear_down = state.gear_down ^ controls.gear_toggle;

    let throttle = (state.throttle + controls.throttle_delta * params.throttle_response_rate * dt)
        .clamp(0.0, 100.0);

    let thrust = if state.fuel > 0.0 {
        spec.max_throttle_accel * throttle / 100.0
    } else {
        0.0
    };
    let fuel = (state.fuel - fuel_burn(throttle, spec, params) * dt).max(0.0);
    let drag = spec.drag_coefficient(gear_down) * state.speed;
    let mut speed = (state.speed + (thrust - drag) * dt).clamp(0.0, spec.max_speed);

    let regime = FlightRegime::from_altitude(state.altitude(), params);
    if regime.is_ground() && controls.brake {
        speed = (speed - params.brake_deceleration * dt).max(0.0);
    }
    let authority = ControlAuthority::new(regime, speed, spec, params);

    let max_pitch = params.max_pitch_deg.abs();
    let max_roll = params.max_roll_deg.abs();

    let mut heading = state.heading
        + controls.yaw * authority.yaw_rate_limit * authority.yaw_effectiveness * dt;
    let mut pitch = (state.pitch
        + controls.pitch * spec.max_pitch_rate * authority.air_effectiveness * dt)
        .clamp(-max_pitch, max_pitch);
    let mut roll = (state.roll
        + controls.roll * spec.max_roll_rate * authority.air_effectiveness * dt)
        .clamp(-max_roll, max_roll);

    if regime == FlightRegime::Air && roll.abs() > params.bank_turn_deadband_deg {
        heading += roll / max_roll * spec.turn_rate * params.bank_turn_factor * dt;
    }

    let stalled = state.altitude() > 0.0 && speed < spec.stall_speed;
    let mut altitude_rate = speed * params.feet_per_knot_second * pitch.to_radians().sin();
    if stalled {
        pitch = (pitch - params.stall_pitch_drop * dt).clamp(-max_pitch, max_pitch);
        altitude_rate = altitude_rate.min(0.0)
            - params.stall_sink_rate * stall_depth(speed, spec.stall_speed);
    }
    altitude_rate = altitude_rate.clamp(-spec.max_altitude_rate, spec.max_altitude_rate);

    let can_lift_off = speed >= spec.stall_speed && pitch > 0.0;
    let (altitude, vertical_speed) = if state.on_ground() && !can_lift_off {
        (0.0, 0.0)
    } else {
        let altitude = (state.altitude() + altitude_rate * dt).clamp(0.0, spec.service_ceiling);
        let held_at_ceiling = altitude >= spec.service_ceiling && altitude_rate > 0.0;
        (altitude, if held_at_ceiling { 0.0 } else { altitude_rate })
    };

    if !state.on_ground() && altitude <= 0.0 {
        roll = 0.0;
        pitch = pitch.max(0.0);
    }

    let heading = wrap_heading(heading);
    let distance = speed * params.ground_units_per_knot_second * dt;
    let (sin_h, cos_h) = heading.to_radians().sin_cos();
    let position = Vector3::new(
        state.position.x + sin_h * distance,
        state.position.y + cos_h * distance,
        altitude,
    );

    AircraftState {
        position,
        heading,
        pitch,
        roll,
        speed,
        throttle,
        fuel,
        gear_down,
        airborne: altitude > 0.0 && altitude >= params.ground_threshold,
        vertical_speed,
    }
}

/// Wraps any finite heading into `[0, 360)`.
pub fn wrap_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// True when the aircraft is off the ground below its stall speed, however low it is.
pub fn is_stalled(state: &AircraftState, spec: &AircraftSpec) -> bool {
    state.altitude() > 0.0 && state.speed < spec.stall_speed
}

/// Fraction of a full tank burnt per second at `throttle` percent.
pub fn fuel_burn(throttle: f64, spec: &AircraftSpec, params: &FlightModelParams) -> f64 {
    if spec.fuel_capacity <= 0.0 {
        return 0.0;
    }
    (params.fuel_idle_burn + params.fuel_throttle_burn * throttle / 100.0) / spec.fuel_capacity
}

fn stall_depth(speed: f64, stall_speed: f64) -> f64 {
    if stall_speed <= 0.0 {
        0.0
    } else {
        (1.0 - speed / stall_speed).clamp(0.0, 1.0)
    }
}

/// Details of a transition from flight onto the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchdownReport {
    /// Sink rate at contact (ft/s, positive down).
    pub sink_rate: f64,
    /// Airspeed at contact (knots).
    pub speed: f64,
    pub hard: bool,
}

/// Compares consecutive states and reports a touchdown, if one happened.
pub fn detect_touchdown(
    before: &AircraftState,
    after: &AircraftState,
    params: &FlightModelParams,
) -> Option<TouchdownReport> {
    if before.on_ground() || !after.on_ground() {
        return None;
    }
    let sink_rate = (-after.vertical_speed).max(0.0);
    Some(TouchdownReport {
        sink_rate,
        speed: after.speed,
        hard: sink_rate > params.hard_landing_sink_rate,
    })
}
