//! Rect: screen area in terminal cells.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Split vertically at a given row offset.
    pub const fn split_vertical(&self, at: u16) -> (Self, Self) {
        let at = if at < self.height { at } else { self.height };
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(self.x, self.y + at, self.width, self.height - at),
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_vertical_for_header_and_body() {
        let screen = Rect::from_size(80, 24);
        let (header, rest) = screen.split_vertical(1);
        assert_eq!(header, Rect::new(0, 0, 80, 1));
        assert_eq!(rest, Rect::new(0, 1, 80, 23));

        let (body, status) = rest.split_vertical(rest.height - 1);
        assert_eq!(body.bottom(), 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_split_past_end_clamps() {
        let (top, bottom) = Rect::new(2, 3, 10, 4).split_vertical(9);
        assert_eq!(top.height, 4);
        assert!(bottom.is_empty());
        assert!(top.contains(2, 6));
        assert!(!top.contains(2, 7));
    }
}
