//! Frame throttle: coalesces recompute requests to at most one per frame.
//!
//! Scroll events can fire many times per frame. Rather than recomputing on
//! each one, triggers are folded into a [`Pending`] set and released when a
//! full frame interval has passed since the last release. There is no
//! cancellation: a superseded request simply merges into the next release.

use bitflags::bitflags;
use std::time::{Duration, Instant};

bitflags! {
    /// Reasons a recompute has been requested.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Pending: u8 {
        /// The container scrolled.
        const SCROLL = 0b0000_0001;
        /// The container changed size.
        const RESIZE = 0b0000_0010;
        /// The item collection changed.
        const DATA = 0b0000_0100;
    }
}

impl std::fmt::Debug for Pending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Rate limiter for recompute triggers.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    /// Minimum time between releases.
    frame_duration: Duration,
    /// When work was last released.
    last_release: Option<Instant>,
    /// Accumulated, not yet released work.
    pending: Pending,
    /// Number of releases so far.
    frames: u64,
}

impl FrameThrottle {
    /// Create a throttle with the given frame interval.
    pub const fn new(frame_duration: Duration) -> Self {
        Self {
            frame_duration,
            last_release: None,
            pending: Pending::empty(),
            frames: 0,
        }
    }

    /// Record that work is needed.
    pub fn request(&mut self, reason: Pending) {
        self.pending |= reason;
    }

    /// Work requested but not yet released.
    pub const fn pending(&self) -> Pending {
        self.pending
    }

    /// Check if any work is waiting.
    pub const fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of releases so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Release pending work if a frame interval has elapsed.
    ///
    /// Returns `None` when nothing is pending or the current frame already
    /// had its recompute.
    pub fn poll(&mut self, now: Instant) -> Option<Pending> {
        if self.pending.is_empty() {
            return None;
        }
        if let Some(last) = self.last_release {
            if now.saturating_duration_since(last) < self.frame_duration {
                return None;
            }
        }
        Some(self.release(now))
    }

    /// Release pending work regardless of the frame budget.
    pub fn take(&mut self, now: Instant) -> Option<Pending> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.release(now))
        }
    }

    /// Earliest instant at which [`poll`](Self::poll) would release work.
    ///
    /// `None` when nothing is pending. Hosts can use this as a sleep deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.pending.is_empty() {
            return None;
        }
        Some(
            self.last_release
                .map_or_else(Instant::now, |last| last + self.frame_duration),
        )
    }

    /// Drop pending work without counting a frame.
    ///
    /// Used when a recompute already happened through another path.
    pub fn discard(&mut self) -> Pending {
        std::mem::take(&mut self.pending)
    }

    /// Forget pending work and timing history.
    pub fn reset(&mut self) {
        self.pending = Pending::empty();
        self.last_release = None;
    }

    fn release(&mut self, now: Instant) -> Pending {
        self.last_release = Some(now);
        self.frames += 1;
        std::mem::take(&mut self.pending)
    }
}
