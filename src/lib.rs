//! # Rowport
//!
//! A virtual scrolling engine for very large row collections.
//!
//! Rendering a hundred thousand rows at once is slow and memory hungry.
//! Rowport keeps only the rows inside the viewport, plus a small overscan
//! margin, materialized as elements. Two spacers stand in for everything
//! else, so the scrollable extent is exactly what rendering every row would
//! produce.
//!
//! ## Core Concepts
//!
//! - **Visible range**: recomputed from scratch on every scroll, resize, or
//!   data change, in constant time
//! - **Element recycling**: rows that stay in range keep their element and
//!   are updated in place
//! - **Spacers**: leading and trailing filler keep the scroll extent exact
//! - **Frame throttling**: bursts of scroll events collapse into at most one
//!   recompute per frame
//!
//! The engine is backend-agnostic: anything implementing [`RenderTarget`]
//! and [`ScrollContainer`] can host it. The [`terminal`] module provides a
//! crossterm backend.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rowport::terminal::{LineTarget, RowElement, Style, TerminalViewport};
//! use rowport::{VirtualScrollConfig, VirtualScrollManager};
//!
//! let rows: Vec<String> = (0..100_000).map(|i| format!("row {i}")).collect();
//! let mut manager = VirtualScrollManager::builder()
//!     .target(LineTarget::new())
//!     .container(TerminalViewport::new(24, 1))
//!     .config(VirtualScrollConfig::default().with_item_extent(1.0))
//!     .items(rows)
//!     .create(|row: &String, _| RowElement::new(row.clone(), Style::PLAIN))
//!     .update(|el: &mut RowElement, row: &String, _| el.set(row.clone(), Style::PLAIN))
//!     .build()?;
//!
//! manager.scroll_to_index(5_000);
//! manager.flush();
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod terminal;
pub mod window;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use config::VirtualScrollConfig;
pub use error::VirtualScrollError;
pub use event::{EventSink, FrameThrottle, Pending, Subscription, SubscriptionId, ViewportEvent};
pub use layout::Rect;
pub use window::{
    compute_visible_range, Geometry, Lifecycle, RenderStats, RenderTarget, ScrollContainer, Spacer, SpacerKind,
    Spacers, UpdateOutcome, VirtualScrollBuilder, VirtualScrollManager, VisibleRange,
};
