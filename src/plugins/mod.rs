mod events;
mod flight;
mod staging;

pub use events::{RegimeChanged, SwapAircraft, Touchdown};
pub use flight::FlightSimPlugin;
pub use staging::{FlightSet, StartupSequencePlugin, StartupStage};
