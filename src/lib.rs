pub mod components;
pub mod logging;
pub mod plugins;
pub mod resources;
pub mod scenario;
pub mod session;
pub mod systems;

pub use scenario::{ControlSegment, Scenario};
pub use session::FlightSession;
