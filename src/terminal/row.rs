//! Row elements: one pre-formatted table line per item.
//!
//! Formatting happens in the create/update functions, so painting a frame
//! only copies already-fitted text. Cell text is cut on grapheme boundaries
//! and padded by display width, so wide characters never split a column.

use super::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Ellipsis appended to truncated cells.
const ELLIPSIS: &str = "…";

/// A fixed-width table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Width in terminal cells.
    pub width: u16,
}

impl Column {
    /// Create a column.
    pub fn new(title: impl Into<String>, width: u16) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// Column layout shared by every row of a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Columns {
    columns: Vec<Column>,
    gap: u16,
}

impl Columns {
    /// Create a layout with a one-cell gap between columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns, gap: 1 }
    }

    /// Set the gap between columns.
    #[must_use]
    pub const fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// The columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Total line width including gaps.
    pub fn width(&self) -> usize {
        let cells: usize = self.columns.iter().map(|c| usize::from(c.width)).sum();
        cells + usize::from(self.gap) * self.columns.len().saturating_sub(1)
    }

    /// Format one line from per-column cell values.
    ///
    /// Missing values render as blank cells; extra values are ignored.
    pub fn format<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut line = String::with_capacity(self.width());
        let gap = " ".repeat(usize::from(self.gap));
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                line.push_str(&gap);
            }
            let value = values.get(i).map_or("", AsRef::as_ref);
            line.push_str(&fit(value, usize::from(column.width)));
        }
        line
    }

    /// The header line.
    pub fn header(&self) -> String {
        let titles: Vec<&str> = self.columns.iter().map(|c| c.title.as_str()).collect();
        self.format(&titles)
    }
}

/// Fit `text` into exactly `width` display cells.
///
/// Longer text is truncated on a grapheme boundary and ends in `…`; shorter
/// text is padded with spaces.
pub fn fit(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        let mut out = String::with_capacity(text.len() + width - text_width);
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(width - text_width));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut out = String::with_capacity(width + ELLIPSIS.len());
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push_str(ELLIPSIS);
    used += 1;
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// The element produced for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowElement {
    text: String,
    style: Style,
    height: u16,
}

impl RowElement {
    /// Create a one-line row.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            height: 1,
        }
    }

    /// Set the height in terminal lines. Lines after the first are blank.
    #[must_use]
    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height.max(1);
        self
    }

    /// Replace content and style in place.
    pub fn set(&mut self, text: impl Into<String>, style: Style) {
        self.text = text.into();
        self.style = style;
    }

    /// Row text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Row style.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Height in terminal lines.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Display width of the text.
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}
