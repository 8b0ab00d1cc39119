mod aircraft;
mod loader;
mod spec;
mod start;

pub use aircraft::{AircraftSource, AircraftType};
pub use loader::{load_aircraft_table, parse_aircraft_table, ConfigError, RawAircraftTable};
pub use spec::{AircraftSpec, SpecError};
pub use start::StartConfig;
