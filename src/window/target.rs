//! Seams to the rendering environment.
//!
//! The engine never touches a real display. It talks to two collaborators:
//! a [`RenderTarget`] that receives the ordered output of each pass, and a
//! [`ScrollContainer`] that owns scroll position and viewport size.

use crate::event::{EventSink, SubscriptionId};

use super::spacer::Spacer;

/// Where a render pass places its output.
///
/// Each pass calls [`clear`](Self::clear), then optionally the leading
/// spacer, then every rendered element in ascending index order, then
/// optionally the trailing spacer. Elements stay owned by the engine; a
/// target that needs to keep content copies or paints it during the pass.
pub trait RenderTarget<E> {
    /// Remove everything placed by the previous pass.
    fn clear(&mut self);

    /// Place a filler region.
    fn push_spacer(&mut self, spacer: Spacer);

    /// Place the element for `index`.
    fn push_element(&mut self, index: usize, element: &E);

    /// Extent of an element the target already displays, if it has one.
    ///
    /// Sampled once at construction to refine the default item extent.
    fn first_extent(&self) -> Option<f64> {
        None
    }
}

/// A scrollable area observed by the engine.
///
/// Containers report changes by emitting [`ViewportEvent`](crate::ViewportEvent)s
/// into every subscribed sink. The engine samples the geometry itself when
/// it recomputes.
pub trait ScrollContainer {
    /// Current distance scrolled from the start of the content.
    fn scroll_offset(&self) -> f64;

    /// Current visible size along the scroll axis.
    fn viewport_extent(&self) -> f64;

    /// Move the scroll position.
    ///
    /// Containers notify subscribers as for any other scroll.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Tell the container how large the scrollable content is.
    ///
    /// Called after every render pass. Containers that size their scroll
    /// range from their own layout can ignore it.
    fn set_content_extent(&mut self, _extent: f64) {}

    /// Register a sink for scroll and resize events.
    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId;

    /// Remove a previously registered sink. Unknown handles are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}
