//! `LineTarget`: a render target that lays rows out on terminal lines.
//!
//! Each pass rebuilds a flat list of slots (a gap for each spacer, a row for
//! each element). [`LineTarget::paint`] then maps the slots onto screen
//! lines for a given scroll offset, skipping everything above the viewport.

use super::output::OutputBuffer;
use super::row::{fit, RowElement};
use super::style::Style;
use crate::layout::Rect;
use crate::window::{RenderTarget, Spacer};

/// One placed region, in content lines.
#[derive(Debug, Clone, PartialEq)]
pub enum LineSlot {
    /// Blank space standing in for items without elements.
    Gap(f64),
    /// A rendered row.
    Row {
        /// Item index.
        index: usize,
        /// Copy of the element taken at placement.
        row: RowElement,
    },
}

impl LineSlot {
    /// Height in content lines.
    pub fn extent(&self) -> f64 {
        match self {
            Self::Gap(extent) => *extent,
            Self::Row { row, .. } => f64::from(row.height()),
        }
    }
}

/// Render target for terminal tables.
#[derive(Debug, Default)]
pub struct LineTarget {
    slots: Vec<LineSlot>,
    passes: u64,
}

impl LineTarget {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a target that already displays `sample`.
    ///
    /// The engine measures the sample at construction, so the row height
    /// does not have to be configured.
    pub fn seeded(sample: RowElement) -> Self {
        Self {
            slots: vec![LineSlot::Row { index: 0, row: sample }],
            passes: 0,
        }
    }

    /// Slots of the last pass, top to bottom.
    pub fn slots(&self) -> &[LineSlot] {
        &self.slots
    }

    /// Number of passes seen.
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Total content height in lines.
    pub fn content_extent(&self) -> f64 {
        self.slots.iter().map(LineSlot::extent).sum()
    }

    /// Rows intersecting `[offset, offset + height)`, with their screen line.
    pub fn visible_rows(&self, offset: f64, height: u16) -> Vec<(u16, usize, &RowElement)> {
        let mut visible = Vec::new();
        let bottom = offset + f64::from(height);
        let mut y = 0.0;
        for slot in &self.slots {
            let extent = slot.extent();
            if y >= bottom {
                break;
            }
            if let LineSlot::Row { index, row } = slot {
                if y + 1.0 > offset {
                    let line = (y - offset).floor();
                    if line >= 0.0 {
                        visible.push((line as u16, *index, row));
                    }
                }
            }
            y += extent;
        }
        visible
    }

    /// Paint the rows visible at `offset` into `area`.
    ///
    /// Every line of `area` is written; lines without a row are cleared.
    pub fn paint(&self, offset: f64, area: Rect, out: &mut OutputBuffer) {
        let width = usize::from(area.width);
        let mut painted = vec![false; usize::from(area.height)];

        for (line, _, row) in self.visible_rows(offset, area.height) {
            let Some(done) = painted.get_mut(usize::from(line)) else {
                continue;
            };
            *done = true;
            out.cursor_move(area.x, area.y + line);
            out.set_style(&row.style());
            out.write_str(&fit(row.text(), width));
        }

        out.set_style(&Style::PLAIN);
        let blank = " ".repeat(width);
        for (line, done) in painted.iter().enumerate() {
            if !done {
                out.cursor_move(area.x, area.y + line as u16);
                out.write_str(&blank);
            }
        }
    }
}

impl RenderTarget<RowElement> for LineTarget {
    fn clear(&mut self) {
        self.slots.clear();
        self.passes += 1;
    }

    fn push_spacer(&mut self, spacer: Spacer) {
        self.slots.push(LineSlot::Gap(spacer.extent));
    }

    fn push_element(&mut self, index: usize, element: &RowElement) {
        self.slots.push(LineSlot::Row {
            index,
            row: element.clone(),
        });
    }

    fn first_extent(&self) -> Option<f64> {
        self.slots.iter().find_map(|slot| match slot {
            LineSlot::Row { row, .. } => Some(f64::from(row.height())),
            LineSlot::Gap(_) => None,
        })
    }
}
