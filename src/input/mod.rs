//! Keyboard handling: key-to-intent mapping and held-key repeat.

pub mod handler;
pub mod map;

pub use handler::InputHandler;
pub use map::{intent_for_key, should_pause, should_quit, should_restart};
