//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole tower-stacking simulation: the swinging crane,
//! drop evaluation, the block tower, the combo timer and the reset/win rules.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed and tick sequence produce identical games
//! - **Testable**: The random source and the clock are both supplied by the caller
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation tick processing and snapshots
//!
//! # Module Structure
//!
//! - [`crane`]: Horizontal oscillation with clamp-then-flip at the bounds
//! - [`attempt`]: Perfect / acceptable / miss classification of a drop
//! - [`combo`]: Combo multiplier with a shrinking expiry window
//! - [`stack`]: Ordered tower of placed blocks
//! - [`game_state`]: Orchestrator owning all of the above plus the miss counter
//! - [`rng`]: Injectable random source and a seeded LCG
//! - [`snapshot`]: Read-only view for renderers
//!
//! # Game Rules
//!
//! - The crane swings 200 units either side of the platform center, 3 units per step
//! - A drop within 20 units of center is **perfect** (block placed, combo +1)
//! - Within 50 units it is **acceptable** (block placed)
//! - Otherwise it is a **miss**; the third miss clears the tower
//! - The game is won when the tower holds more than 10 blocks
//!
//! # Example
//!
//! ```
//! use tower_crane_core::GameState;
//! use tower_crane_core::types::StateChangeNotice;
//!
//! let mut game = GameState::new(12345);
//!
//! // Advance one step per tick; the host supplies a monotonic clock.
//! for i in 0..10 {
//!     assert_eq!(game.tick(1, false, i * 10), StateChangeNotice::None);
//! }
//!
//! let snap = game.snapshot();
//! assert!(snap.crane_x >= snap.crane_left_bound && snap.crane_x <= snap.crane_right_bound);
//! assert_eq!(snap.combo_multiplier, 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per host frame with
//! the number of elapsed steps, the drop flag, and the current time in milliseconds.
//! Snapshots must be taken between ticks.

pub mod attempt;
pub mod combo;
pub mod crane;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tower_crane_types as types;

// Re-export commonly used types for convenience
pub use attempt::{classify, classify_distance};
pub use combo::ComboTimer;
pub use crane::Crane;
pub use game_state::GameState;
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
pub use stack::Stack;
