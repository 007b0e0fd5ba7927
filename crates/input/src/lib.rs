//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. The map is
//! stateless: every press produces at most one action, and terminal auto-repeat
//! provides held-key movement.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
