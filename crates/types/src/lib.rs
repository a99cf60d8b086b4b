//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # World Geometry
//!
//! Positions are integer world units on an 800x600 playfield with the origin at
//! the top-left corner and `y` growing downwards:
//!
//! - **Platform**: 200x50 at (300, 500), horizontal center at x = 400
//! - **Blocks**: 50x50, the bottom block rests at y = 450 (platform top minus one block)
//! - **Crane**: swings between x = 200 and x = 600 (center ± 200)
//!
//! # Drop Accuracy
//!
//! | Distance from center | Result |
//! |----------------------|--------|
//! | `d <= 20` | Perfect (block placed, combo +1) |
//! | `20 < d <= 50` | Acceptable (block placed) |
//! | `d > 50` | Miss (miss counter +1) |
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 10 | Host tick interval, one crane step per tick |
//! | `CRANE_SPEED` | 3 | Crane movement per step |
//! | `COMBO_BASE_SECS` | 10 | Combo window is `10 - multiplier` seconds |
//! | `COMBO_FLOOR_SECS` | 1 | Shortest combo window |
//!
//! # Examples
//!
//! ```
//! use tower_crane_types::{Attempt, Direction, PLATFORM_CENTER_X, CRANE_AMPLITUDE};
//!
//! // Crane bounds are derived from the platform center
//! assert_eq!(PLATFORM_CENTER_X - CRANE_AMPLITUDE, 200);
//! assert_eq!(PLATFORM_CENTER_X + CRANE_AMPLITUDE, 600);
//!
//! assert_eq!(Direction::Right.reversed(), Direction::Left);
//! assert!(Attempt::Perfect.places_block());
//! assert!(!Attempt::Miss.places_block());
//! ```

/// Playfield width in world units
pub const WORLD_WIDTH: i32 = 800;

/// Playfield height in world units
pub const WORLD_HEIGHT: i32 = 600;

/// Block width (50 units)
pub const BLOCK_WIDTH: i32 = 50;

/// Block height (50 units). The tower shifts up by this much per placed block.
pub const BLOCK_HEIGHT: i32 = 50;

pub const PLATFORM_WIDTH: i32 = 200;
pub const PLATFORM_HEIGHT: i32 = 50;

/// Left edge of the platform
pub const PLATFORM_X: i32 = WORLD_WIDTH / 2 - PLATFORM_WIDTH / 2;

/// Top edge of the platform
pub const PLATFORM_Y: i32 = WORLD_HEIGHT - 100;

/// Horizontal center of the platform; the drop target
pub const PLATFORM_CENTER_X: i32 = PLATFORM_X + PLATFORM_WIDTH / 2;

/// Resting `y` of a freshly placed block
pub const BLOCK_REST_Y: i32 = PLATFORM_Y - BLOCK_HEIGHT;

/// Crane movement per elapsed step
pub const CRANE_SPEED: i32 = 3;

/// Half-width of the crane swing around the platform center
pub const CRANE_AMPLITUDE: i32 = 200;

/// Crane starting position (the right bound)
pub const CRANE_START_X: i32 = PLATFORM_X * 2;

/// Height of the crane arm, also used to derive the held block offset
pub const CRANE_WIDTH: i32 = 100;

/// Horizontal offset between the crane position and the left edge of the held block
pub const HELD_BLOCK_OFFSET: i32 = CRANE_WIDTH / 8;

/// Max distance from the target for a perfect hit
pub const PERFECT_TOLERANCE: i32 = 20;

/// Max distance from the target for an acceptable hit
pub const ACCEPTABLE_TOLERANCE: i32 = 50;

/// Misses that clear the stack
pub const MISS_THRESHOLD: u32 = 3;

/// The game is won once the stack holds more than this many blocks
pub const WIN_HEIGHT: usize = 10;

/// Most blocks the stack can ever hold (the winning block included)
pub const STACK_CAPACITY: usize = WIN_HEIGHT + 1;

/// Combo window base: the window lasts `COMBO_BASE_SECS - multiplier` seconds
pub const COMBO_BASE_SECS: u64 = 10;

/// Combo window floor in seconds
pub const COMBO_FLOOR_SECS: u64 = 1;

/// Person counts are drawn uniformly from `[0, PERSON_COUNT_MAX)`
pub const PERSON_COUNT_MAX: u32 = 100;

/// Host tick interval in milliseconds
pub const TICK_MS: u64 = 10;


/// Horizontal travel direction of the crane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    /// The opposite direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tower_crane_types::Direction;
    ///
    /// assert_eq!(Direction::Right.reversed(), Direction::Left);
    /// assert_eq!(Direction::Left.reversed(), Direction::Right);
    /// ```
    pub fn reversed(&self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Sign of movement along x (+1 right, -1 left)
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
        }
    }
}

/// Classification of a drop attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attempt {
    /// Within `PERFECT_TOLERANCE`; places a block and grows the combo
    Perfect,
    /// Within `ACCEPTABLE_TOLERANCE`; places a block
    Acceptable,
    /// Outside both tolerances; counts toward a stack reset
    Miss,
}

impl Attempt {
    /// Whether this attempt places a block
    pub fn places_block(&self) -> bool {
        matches!(self, Attempt::Perfect | Attempt::Acceptable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Attempt::Perfect => "perfect",
            Attempt::Acceptable => "acceptable",
            Attempt::Miss => "miss",
        }
    }
}

/// A block placed on the stack
///
/// Only `y` changes after creation: it decreases by `BLOCK_HEIGHT` every time a
/// block is pushed on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Sequence number, unique for the lifetime of a game
    pub id: u32,
    /// Residents living in this floor, in `[0, PERSON_COUNT_MAX)`
    pub person_count: u32,
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
}

/// Outcome of a single engine tick
///
/// When an attempt and a post-step condition happen in the same tick the
/// post-step notice is reported (`StackReset` or `Won`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeNotice {
    None,
    BlockPlaced(Block),
    Missed,
    StackReset,
    Won,
}

impl StateChangeNotice {
    pub fn is_none(&self) -> bool {
        matches!(self, StateChangeNotice::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StateChangeNotice::None => "none",
            StateChangeNotice::BlockPlaced(_) => "blockPlaced",
            StateChangeNotice::Missed => "missed",
            StateChangeNotice::StackReset => "stackReset",
            StateChangeNotice::Won => "won",
        }
    }
}

/// Player actions delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Release the held block on the next tick
    Drop,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tower_crane_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("drop"), Some(GameAction::Drop));
    /// assert_eq!(GameAction::from_str("RESTART"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drop" => Some(GameAction::Drop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Drop => "drop",
            GameAction::Restart => "restart",
        }
    }
}
