pub mod config;
pub mod controls;
pub mod phase;
pub mod state;

pub use config::{
    load_aircraft_table, parse_aircraft_table, AircraftSource, AircraftSpec, AircraftType,
    ConfigError, SpecError, StartConfig,
};
pub use controls::{ControlInputState, PlayerAircraft};
pub use phase::{FlightInfo, FlightPhase};
pub use state::AircraftState;
