//! Crane module - horizontal oscillation above the platform
//!
//! The crane moves `speed` units per elapsed step and bounces between two bounds
//! derived from the platform center. A move that would reach or cross a bound is
//! clamped to it and the direction flips; leftover distance is discarded.

use crate::types::{
    Direction, CRANE_AMPLITUDE, CRANE_SPEED, CRANE_START_X, HELD_BLOCK_OFFSET, PLATFORM_CENTER_X,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crane {
    position: i32,
    direction: Direction,
    speed: i32,
    left_bound: i32,
    right_bound: i32,
}

impl Crane {
    /// Create a crane swinging `amplitude` units either side of `center`.
    ///
    /// `start` is clamped into the bounds.
    pub fn new(center: i32, amplitude: i32, speed: i32, start: i32, direction: Direction) -> Self {
        debug_assert!(amplitude >= 0 && speed >= 0);
        let left_bound = center - amplitude;
        let right_bound = center + amplitude;
        Self {
            position: start.clamp(left_bound, right_bound),
            direction,
            speed,
            left_bound,
            right_bound,
        }
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn left_bound(&self) -> i32 {
        self.left_bound
    }

    pub fn right_bound(&self) -> i32 {
        self.right_bound
    }

    /// Left edge of the block hanging from the crane
    pub fn held_block_x(&self) -> i32 {
        self.position - HELD_BLOCK_OFFSET
    }

    /// Move for `elapsed` steps in the current direction (clamp-then-flip).
    pub fn advance(&mut self, elapsed: u32) {
        let distance = (self.speed as i64) * (elapsed as i64);
        if distance == 0 {
            return;
        }

        match self.direction {
            Direction::Right => {
                let target = self.position as i64 + distance;
                if target >= self.right_bound as i64 {
                    self.position = self.right_bound;
                    self.direction = Direction::Left;
                } else {
                    self.position = target as i32;
                }
            }
            Direction::Left => {
                let target = self.position as i64 - distance;
                if target <= self.left_bound as i64 {
                    self.position = self.left_bound;
                    self.direction = Direction::Right;
                } else {
                    self.position = target as i32;
                }
            }
        }
    }
}

impl Default for Crane {
    fn default() -> Self {
        Self::new(
            PLATFORM_CENTER_X,
            CRANE_AMPLITUDE,
            CRANE_SPEED,
            CRANE_START_X,
            Direction::Right,
        )
    }
}
