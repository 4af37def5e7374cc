//! Colors and text attributes for terminal rows.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// # Example
    /// ```
    /// use rowport::terminal::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::REVERSED;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Modifiers {
    /// SGR parameter codes for the set attributes, in a fixed order.
    pub fn sgr_codes(self) -> impl Iterator<Item = u8> {
        [
            (Self::BOLD, 1),
            (Self::DIM, 2),
            (Self::ITALIC, 3),
            (Self::UNDERLINE, 4),
            (Self::REVERSED, 7),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, code)| code)
    }
}

/// Foreground, background and attributes for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color; `None` keeps the terminal default.
    pub fg: Option<Rgb>,
    /// Background color; `None` keeps the terminal default.
    pub bg: Option<Rgb>,
    /// Text attributes.
    pub modifiers: Modifiers,
}

impl Style {
    /// Terminal defaults, no attributes.
    pub const PLAIN: Self = Self {
        fg: None,
        bg: None,
        modifiers: Modifiers::empty(),
    };

    /// Set the foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Add attributes.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }

    /// Check if this style changes nothing.
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_u32(0xFF5500), Rgb::new(255, 85, 0));
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
        assert_eq!(format!("{:?}", Rgb::new(255, 0, 16)), "#ff0010");
    }

    #[test]
    fn test_sgr_codes_order() {
        let mods = Modifiers::REVERSED | Modifiers::BOLD;
        assert_eq!(mods.sgr_codes().collect::<Vec<_>>(), vec![1, 7]);
        assert_eq!(Modifiers::empty().sgr_codes().count(), 0);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::PLAIN
            .with_fg(Rgb::WHITE)
            .with_modifiers(Modifiers::BOLD)
            .with_modifiers(Modifiers::DIM);
        assert_eq!(style.fg, Some(Rgb::WHITE));
        assert_eq!(style.bg, None);
        assert_eq!(style.modifiers, Modifiers::BOLD | Modifiers::DIM);
        assert!(!style.is_plain());
        assert!(Style::default().is_plain());
    }
}
