//! Visible range calculation.
//!
//! Maps viewport geometry onto the inclusive span of item indices to
//! materialize. The computation is constant-time and is always redone from
//! scratch; nothing here is patched incrementally.

/// Viewport geometry sampled from a scrollable container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// Distance scrolled from the start of the content.
    pub scroll_offset: f64,
    /// Visible size of the container along the scroll axis.
    pub viewport_extent: f64,
}

impl Geometry {
    /// Create geometry from raw samples.
    ///
    /// Negative and non-finite samples are treated as zero.
    pub fn new(scroll_offset: f64, viewport_extent: f64) -> Self {
        Self {
            scroll_offset: non_negative(scroll_offset),
            viewport_extent: non_negative(viewport_extent),
        }
    }
}

/// Inclusive span of item indices to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibleRange {
    /// The collection is empty; nothing is materialized.
    #[default]
    Empty,
    /// Items `start..=end`.
    Span {
        /// First materialized index.
        start: usize,
        /// Last materialized index (inclusive).
        end: usize,
    },
}

impl VisibleRange {
    /// Check if the range is empty.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of indices covered.
    pub const fn len(&self) -> usize {
        match *self {
            Self::Empty => 0,
            Self::Span { start, end } => end - start + 1,
        }
    }

    /// First index, if any.
    pub const fn start(&self) -> Option<usize> {
        match *self {
            Self::Empty => None,
            Self::Span { start, .. } => Some(start),
        }
    }

    /// Last index (inclusive), if any.
    pub const fn end(&self) -> Option<usize> {
        match *self {
            Self::Empty => None,
            Self::Span { end, .. } => Some(end),
        }
    }

    /// Check if an index lies inside the range.
    pub const fn contains(&self, index: usize) -> bool {
        match *self {
            Self::Empty => false,
            Self::Span { start, end } => index >= start && index <= end,
        }
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> std::ops::Range<usize> {
        match *self {
            Self::Empty => 0..0,
            Self::Span { start, end } => start..end + 1,
        }
    }
}

/// Compute the range of items to materialize.
///
/// With `count` items of `item_extent` each:
///
/// ```text
/// start = max(0, floor(offset / extent) - overscan)
/// end   = min(count - 1, ceil((offset + viewport) / extent) + overscan)
/// ```
///
/// The scroll offset is first clamped to the scrollable span
/// `[0, max(0, count * extent - viewport)]`, the same bound a real scroll
/// element enforces, and `start` is clamped to `end`. Together these keep
/// `0 <= start <= end <= count - 1` even when the collection shrank under a
/// stale offset. `item_extent` must be positive.
pub fn compute_visible_range(
    geometry: Geometry,
    item_extent: f64,
    count: usize,
    overscan: usize,
) -> VisibleRange {
    if count == 0 {
        return VisibleRange::Empty;
    }
    debug_assert!(item_extent > 0.0, "item extent must be positive");

    let viewport = non_negative(geometry.viewport_extent);
    let max_offset = (count as f64).mul_add(item_extent, -viewport).max(0.0);
    let offset = non_negative(geometry.scroll_offset).min(max_offset);

    let last = count - 1;
    let first_visible = to_index((offset / item_extent).floor());
    let last_visible = to_index(((offset + viewport) / item_extent).ceil());

    let end = last_visible.saturating_add(overscan).min(last);
    let start = first_visible.saturating_sub(overscan).min(end);

    VisibleRange::Span { start, end }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Saturating float-to-index conversion for already floored/ceiled values.
fn to_index(value: f64) -> usize {
    if value <= 0.0 {
        0
    } else if value >= usize::MAX as f64 {
        usize::MAX
    } else {
        value as usize
    }
}
