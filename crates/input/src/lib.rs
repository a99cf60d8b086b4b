//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s. The engine only
//! ever sees a drop flag per tick; [`DropLatch`] holds presses between ticks.

pub mod latch;
pub mod map;

pub use tower_crane_types as types;

pub use latch::DropLatch;
pub use map::{handle_key_event, map_event, should_quit, InputEvent};
