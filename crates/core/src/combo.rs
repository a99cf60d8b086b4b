//! Combo timer - multiplier that grows on perfect hits and lapses after a window
//!
//! Each perfect hit bumps the multiplier and restarts the window at
//! `COMBO_BASE_SECS - multiplier` seconds, never shorter than `COMBO_FLOOR_SECS`.
//! The multiplier only ever drops, back to 1, when a tick observes a time past the
//! deadline.

use crate::types::{COMBO_BASE_SECS, COMBO_FLOOR_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboTimer {
    multiplier: u32,
    /// Absolute deadline in host milliseconds.
    expiry_ms: u64,
}

impl ComboTimer {
    pub fn new() -> Self {
        Self {
            multiplier: 1,
            expiry_ms: 0,
        }
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn expiry_ms(&self) -> u64 {
        self.expiry_ms
    }

    /// Drop back to 1 once `now_ms` is past the deadline.
    pub fn tick(&mut self, now_ms: u64) {
        if now_ms > self.expiry_ms {
            self.multiplier = 1;
        }
    }

    /// Grow the multiplier and restart the window from `now_ms`.
    pub fn on_perfect_hit(&mut self, now_ms: u64) {
        self.multiplier = self.multiplier.saturating_add(1);
        self.expiry_ms = now_ms.saturating_add(window_ms(self.multiplier));
    }

    /// Time left before the multiplier lapses, 0 when no combo is running.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        if self.multiplier > 1 {
            self.expiry_ms.saturating_sub(now_ms)
        } else {
            0
        }
    }

    pub fn is_active(&self) -> bool {
        self.multiplier > 1
    }
}

impl Default for ComboTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Combo window for a given multiplier, in seconds.
///
/// ```
/// use tower_crane_core::combo::window_secs;
///
/// assert_eq!(window_secs(2), 8);
/// assert_eq!(window_secs(9), 1);
/// assert_eq!(window_secs(40), 1);
/// ```
pub fn window_secs(multiplier: u32) -> u64 {
    COMBO_BASE_SECS
        .saturating_sub(multiplier as u64)
        .max(COMBO_FLOOR_SECS)
}

pub fn window_ms(multiplier: u32) -> u64 {
    window_secs(multiplier) * 1000
}
