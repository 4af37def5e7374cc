//! Input actor: dedicated thread polling terminal events.
//!
//! The actor converts crossterm events into the small [`InputEvent`] set a
//! scrolling table needs and forwards them over a channel, so the main loop
//! never blocks on the terminal.

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Key codes relevant to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

/// Events sent from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Active modifiers.
        modifiers: KeyModifiers,
    },
    /// Mouse wheel. Positive `delta` scrolls up.
    MouseScroll {
        /// Lines to scroll; positive is up.
        delta: i16,
    },
    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Error reading from the terminal.
    Error(String),
    /// The input thread is stopping.
    Shutdown,
}

impl InputEvent {
    /// Shorthand for a key press without modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Input actor that polls terminal events.
#[derive(Debug)]
pub struct InputActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking for shutdown.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("rowport-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Stop the thread and wait for it.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input) = convert_event(event) {
                            if sender.send(input).is_err() {
                                // Receiver dropped
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event, dropping those the table does not use.
pub fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            // Press only, not release or repeat
            if key.kind != KeyEventKind::Press {
                return None;
            }
            let code = convert_key_code(key.code)?;
            let modifiers = KeyModifiers {
                shift: key.modifiers.contains(event::KeyModifiers::SHIFT),
                control: key.modifiers.contains(event::KeyModifiers::CONTROL),
                alt: key.modifiers.contains(event::KeyModifiers::ALT),
            };
            Some(InputEvent::Key { code, modifiers })
        }
        Event::Mouse(mouse) => match mouse.kind {
            event::MouseEventKind::ScrollUp => Some(InputEvent::MouseScroll { delta: 1 }),
            event::MouseEventKind::ScrollDown => Some(InputEvent::MouseScroll { delta: -1 }),
            _ => None,
        },
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent, MouseEventKind};

    #[test]
    fn test_convert_key_press() {
        let press = KeyEvent::new(event::KeyCode::PageDown, event::KeyModifiers::SHIFT);
        assert_eq!(
            convert_event(Event::Key(press)),
            Some(InputEvent::Key {
                code: KeyCode::PageDown,
                modifiers: KeyModifiers {
                    shift: true,
                    ..KeyModifiers::NONE
                },
            })
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: event::KeyCode::Up,
            modifiers: event::KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(convert_event(Event::Key(release)), None);
        let tab = KeyEvent::new(event::KeyCode::Tab, event::KeyModifiers::NONE);
        assert_eq!(convert_event(Event::Key(tab)), None);
    }

    #[test]
    fn test_convert_mouse_and_resize() {
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 3,
            row: 4,
            modifiers: event::KeyModifiers::NONE,
        };
        assert_eq!(
            convert_event(Event::Mouse(wheel)),
            Some(InputEvent::MouseScroll { delta: -1 })
        );
        assert_eq!(
            convert_event(Event::Resize(120, 40)),
            Some(InputEvent::Resize { width: 120, height: 40 })
        );
        assert_eq!(convert_event(Event::FocusGained), None);
    }
}
