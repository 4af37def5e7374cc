//! Windowing core: decides which items get an element and where.
//!
//! Only items inside the viewport, plus an overscan margin on each side,
//! are materialized. Everything else is represented by two spacers, so the
//! scrollable extent matches what fully rendering every item would give.
//!
//! ```text
//!  ┌───────────────────┐
//!  │  leading spacer   │  start * extent
//!  ├───────────────────┤
//!  │  overscan         │
//!  │ ┌───────────────┐ │
//!  │ │   viewport    │ │  rendered elements, index order
//!  │ └───────────────┘ │
//!  │  overscan         │
//!  ├───────────────────┤
//!  │  trailing spacer  │  (count - end - 1) * extent
//!  └───────────────────┘
//! ```

mod extent;
mod manager;
mod range;
mod recycler;
mod registry;
mod spacer;
mod target;

pub use extent::{ExtentEstimator, Lifecycle};
pub use manager::{CreateFn, UpdateFn, UpdateOutcome, VirtualScrollBuilder, VirtualScrollManager};
pub use range::{compute_visible_range, Geometry, VisibleRange};
pub use recycler::{reconcile, RenderStats};
pub use registry::{Rendered, RenderedRegistry};
pub use spacer::{Spacer, SpacerKind, Spacers};
pub use target::{RenderTarget, ScrollContainer};
