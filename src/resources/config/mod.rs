pub mod camera;
pub mod clock;
pub mod flight_model;
pub mod input;
pub mod simulation;

pub use camera::CameraRig;
pub use clock::ClockConfig;
pub use flight_model::FlightModelParams;
pub use input::InputConfig;
pub use simulation::SimulationConfig;
