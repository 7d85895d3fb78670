//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Held keys
//! arrive as repeated presses from the terminal, so no repeat timing is kept
//! here.

pub mod map;

pub use tetris_types as types;

pub use map::{handle_key_event, should_quit};
