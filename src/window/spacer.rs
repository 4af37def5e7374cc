//! Placeholder (spacer) sizing.
//!
//! Most items have no element. Two filler regions stand in for them so the
//! scrollable extent always equals `count * item_extent`: one before the
//! rendered window and one after it.

use super::range::VisibleRange;

/// Which side of the rendered window a spacer fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacerKind {
    /// Space for the items before the window.
    Leading,
    /// Space for the items after the window.
    Trailing,
}

/// A non-empty filler region handed to a rendering target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    /// Side of the window.
    pub kind: SpacerKind,
    /// Size along the scroll axis. Always positive.
    pub extent: f64,
}

/// Spacer sizes for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacers {
    /// Size reserved before the window.
    pub leading: f64,
    /// Size reserved after the window.
    pub trailing: f64,
}

impl Spacers {
    /// Compute spacer sizes for a range over `count` items.
    ///
    /// An empty range yields two zero-size spacers.
    pub fn compute(range: VisibleRange, count: usize, item_extent: f64) -> Self {
        match range {
            VisibleRange::Empty => Self::default(),
            VisibleRange::Span { start, end } => {
                let after = count.saturating_sub(end.saturating_add(1));
                Self {
                    leading: (start as f64 * item_extent).max(0.0),
                    trailing: (after as f64 * item_extent).max(0.0),
                }
            }
        }
    }

    /// The leading spacer, or `None` when it has no size.
    pub fn leading_spacer(&self) -> Option<Spacer> {
        (self.leading > 0.0).then_some(Spacer {
            kind: SpacerKind::Leading,
            extent: self.leading,
        })
    }

    /// The trailing spacer, or `None` when it has no size.
    pub fn trailing_spacer(&self) -> Option<Spacer> {
        (self.trailing > 0.0).then_some(Spacer {
            kind: SpacerKind::Trailing,
            extent: self.trailing,
        })
    }

    /// Combined size of both spacers.
    pub fn total(&self) -> f64 {
        self.leading + self.trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacers_reconstruct_total() {
        let range = VisibleRange::Span { start: 45, end: 65 };
        let spacers = Spacers::compute(range, 1000, 50.0);
        assert!((spacers.leading - 2250.0).abs() < f64::EPSILON);
        assert!((spacers.trailing - 46_700.0).abs() < f64::EPSILON);

        let rendered = range.len() as f64 * 50.0;
        assert!((spacers.total() + rendered - 50_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spacers_omitted_at_edges() {
        let spacers = Spacers::compute(VisibleRange::Span { start: 0, end: 9 }, 10, 50.0);
        assert!(spacers.leading_spacer().is_none());
        assert!(spacers.trailing_spacer().is_none());

        let spacers = Spacers::compute(VisibleRange::Span { start: 0, end: 15 }, 1000, 50.0);
        assert!(spacers.leading_spacer().is_none());
        assert_eq!(
            spacers.trailing_spacer(),
            Some(Spacer {
                kind: SpacerKind::Trailing,
                extent: 984.0 * 50.0,
            })
        );
    }

    #[test]
    fn test_spacers_empty_range() {
        let spacers = Spacers::compute(VisibleRange::Empty, 0, 50.0);
        assert_eq!(spacers, Spacers::default());
        assert!(spacers.leading_spacer().is_none());
        assert!(spacers.trailing_spacer().is_none());
    }
}
