//! `TerminalViewport`: a scroll container measured in terminal lines.

use super::input::{InputEvent, KeyCode};
use crate::event::{EventSink, Subscribers, SubscriptionId, ViewportEvent};
use crate::window::ScrollContainer;

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: f64 = 3.0;

/// Scrollable region of the terminal.
///
/// The offset is clamped to the content like a native scroll area: it never
/// goes below zero or past `content - height`. Every change is broadcast to
/// subscribers.
#[derive(Debug)]
pub struct TerminalViewport {
    offset: f64,
    height: u16,
    reserved: u16,
    content: f64,
    subscribers: Subscribers,
}

impl TerminalViewport {
    /// Create a viewport filling a terminal of `terminal_height` rows, minus
    /// `reserved` rows kept for headers and status lines.
    pub const fn new(terminal_height: u16, reserved: u16) -> Self {
        Self {
            offset: 0.0,
            height: terminal_height.saturating_sub(reserved),
            reserved,
            content: 0.0,
            subscribers: Subscribers::new(),
        }
    }

    /// Visible lines.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Scrollable content height as last reported by the engine.
    pub const fn content_extent(&self) -> f64 {
        self.content
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> f64 {
        (self.content - f64::from(self.height)).max(0.0)
    }

    /// Scroll by `delta` lines; positive moves down.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.offset + delta);
    }

    /// Handle the terminal being resized to `terminal_height` rows.
    pub fn resize(&mut self, terminal_height: u16) {
        let height = terminal_height.saturating_sub(self.reserved);
        if height == self.height {
            return;
        }
        self.height = height;
        self.subscribers.broadcast(ViewportEvent::Resize {
            extent: f64::from(height),
        });
        // A taller viewport can leave the offset past the end.
        self.set_scroll_offset(self.offset);
    }

    /// Apply a navigation event. Returns `true` when the event was consumed.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        let page = f64::from(self.height.max(1));
        match event {
            InputEvent::MouseScroll { delta } => self.scroll_by(-f64::from(*delta) * WHEEL_STEP),
            InputEvent::Resize { height, .. } => self.resize(*height),
            InputEvent::Key { code, .. } => match code {
                KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1.0),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1.0),
                KeyCode::PageUp => self.scroll_by(-page),
                KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
                KeyCode::Home | KeyCode::Char('g') => self.set_scroll_offset(0.0),
                KeyCode::End | KeyCode::Char('G') => self.set_scroll_offset(self.max_offset()),
                _ => return false,
            },
            _ => return false,
        }
        true
    }
}

impl ScrollContainer for TerminalViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_extent(&self) -> f64 {
        f64::from(self.height)
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        let clamped = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        };
        if (clamped - self.offset).abs() < f64::EPSILON {
            return;
        }
        self.offset = clamped;
        self.subscribers.broadcast(ViewportEvent::Scroll { offset: clamped });
    }

    fn set_content_extent(&mut self, extent: f64) {
        self.content = extent;
        if self.offset > self.max_offset() {
            self.offset = self.max_offset();
        }
    }

    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId {
        self.subscribers.add(sink)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.remove(id);
    }
}
