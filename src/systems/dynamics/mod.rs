mod flight;
pub mod model;
pub mod regime;

pub use flight::{flight_dynamics_system, swap_aircraft_system};
pub use model::{detect_touchdown, fuel_burn, is_stalled, step, wrap_heading, TouchdownReport};
pub use regime::{air_effectiveness, ControlAuthority, FlightRegime};
