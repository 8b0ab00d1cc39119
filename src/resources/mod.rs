pub mod clock;
pub mod config;

pub use clock::{SimulationClock, Ticks};
pub use config::{CameraRig, ClockConfig, FlightModelParams, InputConfig, SimulationConfig};
