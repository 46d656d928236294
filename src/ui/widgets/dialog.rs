//! A message above a row of buttons.
//!
//! The dialog's narrowest layout is its button row; its widest is the message
//! on one line. Anything in between wraps the message.

use super::button::{Button, ButtonRow, RowEvent};
use crate::core::error::Result;
use crate::core::event::{Key, KeyCode};
use crate::popup::action::ActionId;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Role;
use crate::ui::core::text::{display_width, wrap};
use crate::ui::overlay::{composite, WidthBounds};
use crate::ui::widget::{FlowContent, ItemId, Outcome, Popup, Resolution, Widget};
use compact_str::CompactString;

pub struct Dialog {
    message: CompactString,
    row: ButtonRow,
    bounds: WidthBounds,
    resolution: Resolution,
}

impl Dialog {
    pub fn new(message: impl Into<CompactString>, buttons: Vec<Button>) -> Self {
        let message = message.into();
        let row = ButtonRow::new(buttons);
        let min = row.width();
        let bounds = WidthBounds::new(min, display_width(&message));
        Self {
            message,
            row,
            bounds,
            resolution: Resolution::default(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn buttons(&self) -> &[Button] {
        self.row.buttons()
    }

    pub fn focused_button(&self) -> Option<&Button> {
        self.row.focused()
    }

    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }
}

impl FlowContent for Dialog {
    fn render_flow(&self, width: u16, focus: bool) -> Canvas {
        let mut parts: Vec<Canvas> = wrap(&self.message, width)
            .iter()
            .map(|line| Canvas::line(line, width, Role::Popup))
            .collect();
        parts.push(self.row.render_row(width, focus));
        Canvas::stack(Size::new(width, self.flow_height(width)), &parts, Role::Popup)
    }

    fn flow_height(&self, width: u16) -> u16 {
        let message_rows = wrap(&self.message, width).len().min(u16::MAX as usize) as u16;
        message_rows.saturating_add(1)
    }

    fn background(&self) -> Role {
        Role::Popup
    }
}

impl Widget for Dialog {
    fn render(&self, size: Size, focus: bool) -> Result<Canvas> {
        composite(size, self, self.bounds, focus)
    }

    fn keypress(&mut self, _size: Size, key: Key) -> Option<Key> {
        if self.resolution.is_resolved() {
            return Some(key);
        }
        if key.code == KeyCode::Esc {
            self.resolution.resolve(Outcome::Cancelled);
            return None;
        }

        match self.row.keypress(key) {
            RowEvent::Activated(idx) => {
                if let Some(button) = self.row.buttons().get(idx) {
                    self.resolution
                        .resolve(Outcome::Selected(button.id().clone()));
                }
                None
            }
            RowEvent::Moved => None,
            RowEvent::Unhandled(key) => Some(key),
        }
    }
}

impl Popup for Dialog {
    fn min_width(&self) -> u16 {
        self.bounds.min
    }

    fn max_width(&self) -> u16 {
        self.bounds.max
    }

    fn result(&self) -> Option<&Outcome> {
        self.resolution.result()
    }

    fn take_close(&mut self) -> Option<Outcome> {
        self.resolution.take_close()
    }

    fn bound_action(&self, id: &ItemId) -> Option<&ActionId> {
        self.row.find(id).and_then(Button::action)
    }

    fn action_refs(&self) -> Vec<&ActionId> {
        self.row.buttons().iter().filter_map(Button::action).collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/dialog.rs"]
mod tests;
