//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders a [`core::GameSnapshot`] into a simple framebuffer that can be
//! flushed to a terminal backend. It only ever reads snapshots; the simulation
//! is never touched from here.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so frames can be asserted on in tests
//! - Scale the 800x600 world to whatever terminal is available

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tower_crane_core as core;
pub use tower_crane_types as types;

pub use fb::{Cell, CellStyle, ClipRect, FrameBuffer, Rgb};
pub use game_view::{crane_color, AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
