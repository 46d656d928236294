//! Rendering backends.
//!
//! The backend is the only place a canvas meets a terminal. Keeping the trait
//! here lets the event loop run against either the ratatui terminal or the
//! headless test backend.

use crate::core::event::InputEvent;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Palette;
use std::io;

pub trait Backend {
    fn screen_size(&self) -> io::Result<Size>;

    /// Draws a canvas that covers the whole screen.
    fn draw(&mut self, canvas: &Canvas) -> io::Result<()>;

    /// Blocks until the next input event.
    fn next_event(&mut self) -> io::Result<InputEvent>;

    /// Styles used for every role in later draws.
    fn register_palette(&mut self, palette: Palette);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
