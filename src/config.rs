//! Configuration for the virtual scroll engine.

use crate::error::VirtualScrollError;
use std::time::Duration;

/// Configuration for a [`VirtualScrollManager`](crate::VirtualScrollManager).
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualScrollConfig {
    /// Estimated extent of one item along the scroll axis.
    ///
    /// Replaced once by a measurement of an already-rendered element, if the
    /// target holds one at construction.
    pub item_extent: f64,
    /// Items rendered beyond each edge of the visible window.
    pub overscan: usize,
    /// Upper bound on recomputes per second triggered by scroll and resize.
    pub target_fps: u32,
    /// Capacity of the event channel shared with the container.
    pub event_capacity: usize,
}

impl Default for VirtualScrollConfig {
    fn default() -> Self {
        Self {
            item_extent: 50.0,
            overscan: 5,
            target_fps: 60,
            event_capacity: 64,
        }
    }
}

impl VirtualScrollConfig {
    /// Set the default item extent.
    #[must_use]
    pub fn with_item_extent(mut self, item_extent: f64) -> Self {
        self.item_extent = item_extent;
        self
    }

    /// Set the overscan margin.
    #[must_use]
    pub const fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Set the target frame rate used to throttle recomputes.
    #[must_use]
    pub const fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Set the event channel capacity.
    #[must_use]
    pub const fn with_event_capacity(mut self, event_capacity: usize) -> Self {
        self.event_capacity = event_capacity;
        self
    }

    /// Duration of one frame at the target frame rate.
    ///
    /// Returns `Duration::ZERO` for a zero frame rate; [`validate`](Self::validate)
    /// rejects that case before a manager is built.
    pub fn frame_duration(&self) -> Duration {
        if self.target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / self.target_fps
        }
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), VirtualScrollError> {
        if !self.item_extent.is_finite() || self.item_extent <= 0.0 {
            return Err(VirtualScrollError::InvalidItemExtent(self.item_extent));
        }
        if self.target_fps == 0 {
            return Err(VirtualScrollError::InvalidFrameRate);
        }
        Ok(())
    }
}
