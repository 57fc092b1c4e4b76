//! Frame scheduling and input rate-limiting
//!
//! Rendering is cooperative: mutations and pointer moves mark the
//! scheduler dirty, and at most one frame is pending at a time. Rapid
//! dirty-triggers before that frame runs coalesce; the frame itself is
//! idempotent and simply renders the latest state.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameScheduler {
    pending: bool,
    coalesced: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame. Returns `true` when a new frame was scheduled,
    /// `false` when one is already pending (the request coalesces).
    pub fn mark_dirty(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            trace!(coalesced = self.coalesced, "scheduler: coalesced");
            return false;
        }
        self.pending = true;
        true
    }

    /// Take the pending frame, if any. The host calls this from its
    /// frame-presentation callback and renders when it returns `true`.
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// How many requests coalesced into already-pending frames.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

/// Rate limiter for pointer-drag handling, so drags are not processed
/// faster than frames can usefully render.
#[derive(Clone, Copy, Debug)]
pub struct DragDebouncer {
    min_interval: Duration,
    last: Option<Instant>,
}

impl DragDebouncer {
    /// The stock editor debounced drags to roughly one per frame.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// Whether a drag event arriving now should be handled. Accepting an
    /// event starts the next interval.
    pub fn accept(&mut self) -> bool {
        self.accept_at(Instant::now())
    }

    /// `accept` with an explicit clock, for tests.
    pub fn accept_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

impl Default for DragDebouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirty_triggers_coalesce_into_one_frame() {
        let mut s = FrameScheduler::new();
        assert!(s.mark_dirty());
        assert!(s.is_pending());
        assert!(!s.mark_dirty());
        assert!(!s.mark_dirty());
        assert_eq!(s.coalesced(), 2);

        assert!(s.take_frame());
        assert!(!s.take_frame());

        // Next mutation schedules again.
        assert!(s.mark_dirty());
    }

    #[test]
    fn debouncer_rejects_within_interval() {
        let mut d = DragDebouncer::new(Duration::from_millis(16));
        let t0 = Instant::now();

        assert!(d.accept_at(t0));
        assert!(!d.accept_at(t0 + Duration::from_millis(5)));
        assert!(!d.accept_at(t0 + Duration::from_millis(15)));
        assert!(d.accept_at(t0 + Duration::from_millis(16)));
    }
}
