//! Message types exchanged between containers and the engine.

/// A change in viewport geometry reported by a scrollable container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// The scroll offset changed.
    Scroll {
        /// New distance scrolled from the start of the content.
        offset: f64,
    },

    /// The visible extent of the container changed.
    Resize {
        /// New viewport extent along the scroll axis.
        extent: f64,
    },
}

/// Handle returned by a container when a sink subscribes to it.
///
/// Pass it back to the container to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}
