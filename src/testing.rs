//! In-memory collaborators shared by unit tests.

use crate::event::{EventSink, Subscribers, SubscriptionId, ViewportEvent};
use crate::window::{RenderTarget, ScrollContainer, Spacer};

/// One placement recorded by [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<E> {
    Spacer(Spacer),
    Element(usize, E),
}

/// Target that records every placement of the latest pass.
#[derive(Debug)]
pub struct RecordingTarget<E> {
    pub slots: Vec<Slot<E>>,
    pub passes: usize,
    pub existing_extent: Option<f64>,
}

impl<E> RecordingTarget<E> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            passes: 0,
            existing_extent: None,
        }
    }

    pub const fn with_existing(extent: f64) -> Self {
        Self {
            slots: Vec::new(),
            passes: 0,
            existing_extent: Some(extent),
        }
    }

    pub fn element_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Element(index, _) => Some(*index),
                Slot::Spacer(_) => None,
            })
            .collect()
    }

    pub fn spacers(&self) -> Vec<Spacer> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Spacer(spacer) => Some(*spacer),
                Slot::Element(..) => None,
            })
            .collect()
    }
}

impl<E: Clone> RenderTarget<E> for RecordingTarget<E> {
    fn clear(&mut self) {
        self.slots.clear();
        self.passes += 1;
    }

    fn push_spacer(&mut self, spacer: Spacer) {
        self.slots.push(Slot::Spacer(spacer));
    }

    fn push_element(&mut self, index: usize, element: &E) {
        self.slots.push(Slot::Element(index, element.clone()));
    }

    fn first_extent(&self) -> Option<f64> {
        self.existing_extent
    }
}

/// Container whose geometry is set directly by the test.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    pub offset: f64,
    pub extent: f64,
    pub content_extent: f64,
    pub subscribers: Subscribers,
}

impl MemoryContainer {
    pub fn new(extent: f64) -> Self {
        Self {
            extent,
            ..Self::default()
        }
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.set_scroll_offset(offset);
    }

    pub fn resize(&mut self, extent: f64) {
        self.extent = extent;
        self.subscribers.broadcast(ViewportEvent::Resize { extent });
    }
}

impl ScrollContainer for MemoryContainer {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_extent(&self) -> f64 {
        self.extent
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.subscribers.broadcast(ViewportEvent::Scroll { offset });
    }

    fn set_content_extent(&mut self, extent: f64) {
        self.content_extent = extent;
    }

    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId {
        self.subscribers.add(sink)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.remove(id);
    }
}
