//! Frame pacing: skip terminal flushes when nothing visible changed.
//!
//! The game ticks every 10 ms but the picture usually changes far less often
//! (the crane moves 3 world units per step, about a third of a cell). Callers
//! pass a fingerprint of everything visible and the throttle decides.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    /// Redraw an unchanged frame at most this often.
    refresh_interval_ms: u64,
    /// `(time, fingerprint)` of the last rendered frame.
    last: Option<(u64, u64)>,
    skipped: u64,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last: None,
            skipped: 0,
        }
    }

    /// Renders at once when `fingerprint` changed, otherwise at most once per
    /// refresh interval.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let render = match self.last {
            None => true,
            Some((_, seen)) if seen != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.refresh_interval_ms,
        };

        if render {
            self.last = Some((now_ms, fingerprint));
        } else {
            self.skipped += 1;
        }
        render
    }

    /// Force the next call to render (e.g. after a terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Frames skipped since creation.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}
