mod adapter;
mod keyboard;

pub use adapter::{InputAdapter, InputFrame, KeyState};
pub use keyboard::keyboard_input_system;
