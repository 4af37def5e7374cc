//! Viewport events: how a scrollable container talks to the engine.
//!
//! Containers own the scroll position and size; the engine only samples
//! them. Whenever either changes, the container pushes a [`ViewportEvent`]
//! into every subscribed [`EventSink`]. The engine drains its
//! [`Subscription`] and folds the events into a [`FrameThrottle`], which
//! lets at most one recompute through per frame.
//!
//! ```text
//! ┌──────────────┐   ViewportEvent   ┌──────────────┐   Pending   ┌─────────┐
//! │  Container   │ ────────────────▶ │ Subscription │ ──────────▶ │Throttle │
//! └──────────────┘     EventSink     └──────────────┘             └─────────┘
//! ```

mod messages;
mod subscription;
mod throttle;

pub use messages::{SubscriptionId, ViewportEvent};
pub use subscription::{channel, EventSink, Subscribers, Subscription};
pub use throttle::{FrameThrottle, Pending};
