pub mod camera;
pub mod controller;
pub mod dynamics;

pub use camera::{camera_view_system, project, to_transform};
pub use controller::{keyboard_input_system, InputAdapter, InputFrame, KeyState};
pub use dynamics::{
    air_effectiveness, detect_touchdown, flight_dynamics_system, fuel_burn, is_stalled, step,
    swap_aircraft_system, wrap_heading, ControlAuthority, FlightRegime, TouchdownReport,
};
