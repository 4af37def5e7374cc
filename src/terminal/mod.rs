//! Terminal backend: draws a virtualized table with crossterm.
//!
//! [`LineTarget`] and [`TerminalViewport`] plug the windowing core into a
//! terminal: rows are [`RowElement`]s one or more lines tall, the viewport
//! scrolls in whole lines, and each frame is assembled in an
//! [`OutputBuffer`] and written in one syscall.

mod input;
mod output;
mod row;
mod session;
mod style;
mod target;
mod viewport;

pub use input::{convert_event, InputActor, InputEvent, KeyCode, KeyModifiers};
pub use output::OutputBuffer;
pub use row::{fit, Column, Columns, RowElement};
pub use session::{SessionConfig, TerminalSession};
pub use style::{Modifiers, Rgb, Style};
pub use target::{LineSlot, LineTarget};
pub use viewport::TerminalViewport;
