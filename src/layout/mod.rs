//! Layout primitives for placing the table on screen.

mod rect;

pub use rect::Rect;
