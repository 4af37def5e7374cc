//! `TerminalSession`: raw mode, alternate screen and input thread.
//!
//! The session owns the terminal for its lifetime and restores it on drop,
//! including when the application unwinds out of its main loop.

use super::input::{InputActor, InputEvent};
use super::output::OutputBuffer;
use crossbeam_channel::{bounded, Receiver};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Configuration for a [`TerminalSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to enable mouse capture (wheel scrolling).
    pub enable_mouse: bool,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Capacity of the input channel.
    pub input_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            enable_mouse: true,
            alternate_screen: true,
            input_capacity: 64,
        }
    }
}

/// An interactive terminal session.
#[derive(Debug)]
pub struct TerminalSession {
    config: SessionConfig,
    input_rx: Receiver<InputEvent>,
    input_actor: Option<InputActor>,
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl TerminalSession {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen,
    /// input thread).
    pub fn start(config: SessionConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.enable_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        execute!(stdout, cursor::Hide)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(config.input_capacity.max(1));
        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;
        vdebug!(width, height, "terminal session started");

        Ok(Self {
            config,
            input_rx,
            input_actor: Some(input_actor),
            stdout,
            width,
            height,
        })
    }

    /// Terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Record a new terminal size.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Input event receiver, for use with `select!`.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// Wait up to `timeout` for an input event.
    pub fn wait_input(&self, timeout: Duration) -> Option<InputEvent> {
        self.input_rx.recv_timeout(timeout).ok()
    }

    /// Take every queued input event.
    pub fn drain_input(&self) -> Vec<InputEvent> {
        self.input_rx.try_iter().collect()
    }

    /// Write a finished frame in one syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn present(&mut self, frame: &OutputBuffer) -> io::Result<()> {
        frame.flush_to(&mut self.stdout)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        let _ = execute!(self.stdout, cursor::Show);
        if self.config.enable_mouse {
            let _ = execute!(self.stdout, DisableMouseCapture);
        }
        if self.config.alternate_screen {
            let _ = execute!(self.stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
