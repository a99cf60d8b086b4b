//! Tower crane (workspace facade crate).
//!
//! Re-exports the workspace crates as `tower_crane::{core, input, term, types}`
//! and hosts the runner configuration.

pub mod config;

pub use tower_crane_core as core;
pub use tower_crane_input as input;
pub use tower_crane_term as term;
pub use tower_crane_types as types;
