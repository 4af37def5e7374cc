//! Error type for the virtual scroll engine.

use std::fmt;

/// Errors reported by [`VirtualScrollManager`](crate::VirtualScrollManager)
/// construction and its index-addressed operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VirtualScrollError {
    /// No rendering target was supplied to the builder.
    MissingTarget,
    /// No scrollable container was supplied to the builder.
    MissingContainer,
    /// No create function was supplied to the builder.
    MissingCreate,
    /// The configured item extent is zero, negative, or not finite.
    InvalidItemExtent(f64),
    /// The configured frame rate is zero.
    InvalidFrameRate,
    /// An index-addressed operation pointed past the end of the collection.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of items in the collection at the time of the call.
        len: usize,
    },
}

impl fmt::Display for VirtualScrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => f.write_str("a rendering target is required"),
            Self::MissingContainer => f.write_str("a scrollable container is required"),
            Self::MissingCreate => f.write_str("a create function is required"),
            Self::InvalidItemExtent(extent) => {
                write!(f, "item extent must be finite and positive, got {extent}")
            }
            Self::InvalidFrameRate => f.write_str("target frame rate must be non-zero"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for {len} items")
            }
        }
    }
}

impl std::error::Error for VirtualScrollError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            VirtualScrollError::MissingTarget.to_string(),
            "a rendering target is required"
        );
        assert_eq!(
            VirtualScrollError::IndexOutOfBounds { index: 12, len: 10 }.to_string(),
            "index 12 out of bounds for 10 items"
        );
        assert!(VirtualScrollError::InvalidItemExtent(-1.0)
            .to_string()
            .contains("-1"));
    }
}
