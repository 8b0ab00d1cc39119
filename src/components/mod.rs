pub mod aircraft;
pub mod airport;
pub mod camera;

pub use aircraft::{
    load_aircraft_table, parse_aircraft_table, AircraftSource, AircraftSpec, AircraftState,
    AircraftType, ConfigError, ControlInputState, FlightInfo, FlightPhase, PlayerAircraft,
    SpecError, StartConfig,
};
pub use airport::{builtin_airports, find_airport, Airport, Route, Runway};
pub use camera::{ActiveView, CameraMode, FlightCamera, ViewTransform};
