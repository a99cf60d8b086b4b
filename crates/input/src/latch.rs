//! Drop latch: remembers a drop request until the next tick consumes it.

/// Several presses between two ticks still count as a single drop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropLatch {
    pending: bool,
}

impl DropLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Hand the request to a tick and reset.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Forget a pending request (e.g. on restart).
    pub fn clear(&mut self) {
        self.pending = false;
    }
}
