#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_position_eq, assert_state_valid, assert_view_eq};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{EventLog, TestApp, TestAppBuilder};
