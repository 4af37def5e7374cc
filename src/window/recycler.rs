//! Element recycling.
//!
//! Reconciles the previous registry against a freshly computed range:
//! indices still in range keep their element and get it updated in place,
//! new indices get a created element, and everything else is dropped.
//!
//! # Update contract
//!
//! The caller's update function must be idempotent for a fixed item and
//! index: applying it twice must leave the same observable content as
//! applying it once. Elements are updated on every pass they survive, often
//! with unchanged data.
//!
//! Without an update function a surviving element cannot be brought up to
//! date, so it is re-created instead. This keeps every registry entry
//! consistent with the item currently at its index.

use super::range::VisibleRange;
use super::registry::{Rendered, RenderedRegistry};

/// What one reconcile pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Range that was materialized.
    pub range: VisibleRange,
    /// Elements produced by the create function.
    pub created: usize,
    /// Elements kept and passed through the update function.
    pub reused: usize,
    /// Elements discarded because their index left the range.
    pub dropped: usize,
}

impl RenderStats {
    /// Number of elements materialized after the pass.
    pub const fn rendered(&self) -> usize {
        self.created + self.reused
    }
}

/// Reconcile `registry` against `range`.
///
/// Indices in `range` past the end of `items` are skipped. Caller functions
/// are invoked in ascending index order; a panic in either propagates
/// unchanged.
pub fn reconcile<T, E, C, U>(
    registry: &mut RenderedRegistry<E>,
    range: VisibleRange,
    items: &[T],
    create: &mut C,
    mut update: Option<&mut U>,
) -> RenderStats
where
    C: FnMut(&T, usize) -> E + ?Sized,
    U: FnMut(&mut E, &T, usize) + ?Sized,
{
    let mut previous = std::mem::replace(registry, RenderedRegistry::with_capacity(range.len()));
    let mut stats = RenderStats {
        range,
        ..RenderStats::default()
    };

    for index in range.iter() {
        let Some(item) = items.get(index) else {
            break;
        };

        let rendered = match (previous.remove(index), update.as_deref_mut()) {
            (Some(mut existing), Some(update)) => {
                update(existing.element_mut(), item, index);
                stats.reused += 1;
                existing
            }
            _ => {
                stats.created += 1;
                Rendered::new(index, create(item, index))
            }
        };
        registry.insert(rendered);
    }

    stats.dropped = previous.len();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        serial: u32,
        text: String,
    }

    struct Factory {
        next_serial: u32,
    }

    impl Factory {
        fn create(&mut self, item: &String, index: usize) -> Label {
            self.next_serial += 1;
            Label {
                serial: self.next_serial,
                text: format!("{index}:{item}"),
            }
        }
    }

    fn update(label: &mut Label, item: &String, index: usize) {
        label.text = format!("{index}:{item}");
    }

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    fn run(
        registry: &mut RenderedRegistry<Label>,
        factory: &mut Factory,
        range: VisibleRange,
        items: &[String],
        with_update: bool,
    ) -> RenderStats {
        let mut create = |item: &String, index: usize| factory.create(item, index);
        let mut upd = update;
        if with_update {
            reconcile(registry, range, items, &mut create, Some(&mut upd))
        } else {
            reconcile::<_, _, _, fn(&mut Label, &String, usize)>(
                registry,
                range,
                items,
                &mut create,
                None,
            )
        }
    }

    #[test]
    fn test_initial_pass_creates_everything() {
        let data = items(100);
        let mut reg = RenderedRegistry::new();
        let mut factory = Factory { next_serial: 0 };
        let stats = run(&mut reg, &mut factory, VisibleRange::Span { start: 0, end: 15 }, &data, true);
        assert_eq!(stats.created, 16);
        assert_eq!(stats.reused, 0);
        assert_eq!(stats.dropped, 0);
        assert_eq!(reg.indices(), (0..=15).collect::<Vec<_>>());
        assert_eq!(reg.get(3).unwrap().text, "3:item-3");
    }

    #[test]
    fn test_overlap_reuses_identity() {
        let data = items(100);
        let mut reg = RenderedRegistry::new();
        let mut factory = Factory { next_serial: 0 };
        run(&mut reg, &mut factory, VisibleRange::Span { start: 0, end: 15 }, &data, true);
        let serial_of_10 = reg.get(10).unwrap().serial;

        let stats = run(&mut reg, &mut factory, VisibleRange::Span { start: 10, end: 25 }, &data, true);
        assert_eq!(stats.reused, 6);
        assert_eq!(stats.created, 10);
        assert_eq!(stats.dropped, 10);
        assert_eq!(reg.get(10).unwrap().serial, serial_of_10);
        assert!(!reg.contains(9));
        assert_eq!(reg.len(), 16);
    }

    #[test]
    fn test_without_update_recreates() {
        let data = items(20);
        let mut reg = RenderedRegistry::new();
        let mut factory = Factory { next_serial: 0 };
        run(&mut reg, &mut factory, VisibleRange::Span { start: 0, end: 4 }, &data, false);
        let before = reg.get(2).unwrap().serial;

        let stats = run(&mut reg, &mut factory, VisibleRange::Span { start: 0, end: 4 }, &data, false);
        assert_eq!(stats.created, 5);
        assert_eq!(stats.reused, 0);
        assert_ne!(reg.get(2).unwrap().serial, before);
    }

    #[test]
    fn test_update_reflects_new_items() {
        let mut data = items(10);
        let mut reg = RenderedRegistry::new();
        let mut factory = Factory { next_serial: 0 };
        let range = VisibleRange::Span { start: 0, end: 9 };
        run(&mut reg, &mut factory, range, &data, true);

        data[4] = "changed".to_string();
        run(&mut reg, &mut factory, range, &data, true);
        assert_eq!(reg.get(4).unwrap().text, "4:changed");
    }

    #[test]
    fn test_update_is_idempotent() {
        let data = items(3);
        let mut label = Label {
            serial: 1,
            text: String::new(),
        };
        update(&mut label, &data[1], 1);
        let once = label.clone();
        update(&mut label, &data[1], 1);
        assert_eq!(label, once);
    }

    #[test]
    fn test_range_past_items_is_skipped() {
        let data = items(5);
        let mut reg = RenderedRegistry::new();
        let mut factory = Factory { next_serial: 0 };
        let stats = run(&mut reg, &mut factory, VisibleRange::Span { start: 3, end: 9 }, &data, true);
        assert_eq!(stats.created, 2);
        assert_eq!(reg.indices(), vec![3, 4]);
    }

    #[test]
    fn test_empty_range_drops_all() {
        let data = items(5);
        let mut reg = RenderedRegistry::new();
        let mut factory = Factory { next_serial: 0 };
        run(&mut reg, &mut factory, VisibleRange::Span { start: 0, end: 4 }, &data, true);
        let stats = run(&mut reg, &mut factory, VisibleRange::Empty, &data, true);
        assert_eq!(stats.dropped, 5);
        assert_eq!(stats.rendered(), 0);
        assert!(reg.is_empty());
    }
}
