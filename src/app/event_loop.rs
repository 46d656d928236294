//! The dispatch loop.
//!
//! Each cycle draws the frame once, blocks for one input event, and handles it
//! completely before the next draw.

use crate::core::event::{InputEvent, Key, KeyEventKind};
use crate::popup::action::Flow;
use crate::popup::frame::{Dispatch, Frame};
use crate::ui::backend::Backend;
use crate::ui::core::geom::Size;
use crate::ui::widget::Widget;
use std::io;

pub fn run<B: Backend>(backend: &mut B, frame: &mut Frame) -> io::Result<()> {
    loop {
        let size = backend.screen_size()?;
        draw(backend, frame, size)?;
        let event = backend.next_event()?;
        if step(frame, size, event) == Flow::Exit {
            tracing::info!("main loop exit");
            return Ok(());
        }
    }
}

/// Handles one event against a frame currently laid out at `size`.
pub fn step(frame: &mut Frame, size: Size, event: InputEvent) -> Flow {
    match event {
        InputEvent::Key(event) if event.kind == KeyEventKind::Release => Flow::Continue,
        InputEvent::Key(event) => match frame.keypress(size, Key::from(event)) {
            Dispatch::Exit => Flow::Exit,
            Dispatch::Unhandled(key) => {
                tracing::debug!(%key, "unhandled key");
                Flow::Continue
            }
            Dispatch::Consumed => Flow::Continue,
        },
        InputEvent::Resize(cols, rows) => {
            frame.resize(Size::new(cols, rows));
            Flow::Continue
        }
        InputEvent::FocusGained | InputEvent::FocusLost | InputEvent::Paste(_) => Flow::Continue,
    }
}

/// Draws the frame; a popup that cannot be rendered is closed first.
pub fn draw<B: Backend>(backend: &mut B, frame: &mut Frame, size: Size) -> io::Result<()> {
    let canvas = match frame.render(size, true) {
        Ok(canvas) => canvas,
        Err(err) => {
            tracing::warn!(error = %err, "popup cannot be drawn, closing");
            frame.close_popup();
            frame.render(size, true).map_err(io::Error::other)?
        }
    };
    backend.draw(&canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/app/event_loop.rs"]
mod tests;
