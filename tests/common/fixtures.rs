use nalgebra::Vector2;
use rand::Rng;
use skyhop::{
    components::{AircraftSpec, ControlInputState, StartConfig},
    resources::{ClockConfig, SimulationConfig},
};

/// Airliner-like spec with round numbers, gear drag disabled.
pub fn create_test_spec() -> AircraftSpec {
    AircraftSpec {
        name: "Test Jet".to_string(),
        stall_speed: 120.0,
        max_speed: 550.0,
        turn_rate: 3.0,
        max_pitch_rate: 10.0,
        max_roll_rate: 20.0,
        max_throttle_accel: 50.0,
        drag_factor: 1.0,
        gear_drag: 0.0,
        max_altitude_rate: 40.0,
        service_ceiling: 40_000.0,
        fuel_capacity: 5000.0,
    }
}

/// Default configuration with a variable clock: one tick per frame, of the frame's length.
pub fn create_test_config() -> SimulationConfig {
    SimulationConfig {
        clock: ClockConfig::Variable { max_dt: 0.1 },
        ..Default::default()
    }
}

/// In-flight start heading north from the ground origin.
pub fn create_in_flight_start(altitude: f64, speed: f64) -> StartConfig {
    StartConfig::Fixed {
        position: Vector2::zeros(),
        altitude,
        heading: 0.0,
        speed,
    }
}

/// Arbitrary, partly out-of-range control input.
pub fn random_controls<R: Rng>(rng: &mut R) -> ControlInputState {
    ControlInputState {
        pitch: rng.gen_range(-1.5..1.5),
        yaw: rng.gen_range(-1.5..1.5),
        roll: rng.gen_range(-1.5..1.5),
        throttle_delta: rng.gen_range(-1.0..1.5),
        gear_toggle: rng.gen_bool(0.02),
        brake: rng.gen_bool(0.1),
    }
}
