use crate::core::error::Result;
use crate::core::event::{Key, KeyCode};
use crate::popup::action::ActionId;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Role;
use crate::ui::core::text::display_width;
use crate::ui::widget::{ItemId, Widget};
use compact_str::CompactString;

/// Cells a button adds around its label: `< ` and ` >`.
pub const BUTTON_CHROME: u16 = 4;
/// Cells between adjacent buttons in a row.
pub const BUTTON_GAP: u16 = 1;

/// Enter and Space activate a focused button or item.
pub fn is_activation(key: &Key) -> bool {
    key.is(KeyCode::Enter) || key.is(KeyCode::Char(' '))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    id: ItemId,
    label: CompactString,
    action: Option<ActionId>,
}

impl Button {
    pub fn new(id: impl Into<ItemId>, label: impl Into<CompactString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<ActionId>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> Option<&ActionId> {
        self.action.as_ref()
    }

    pub fn width(&self) -> u16 {
        display_width(&self.label).saturating_add(BUTTON_CHROME)
    }

    fn caption(&self) -> String {
        format!("< {} >", self.label)
    }
}

impl Widget for Button {
    fn render(&self, size: Size, focus: bool) -> Result<Canvas> {
        let role = if focus { Role::PopupFocus } else { Role::Popup };
        let mut canvas = Canvas::blank(size, Role::Popup);
        canvas.put_str(0, 0, &self.caption(), role);
        Ok(canvas)
    }

    fn keypress(&mut self, _size: Size, key: Key) -> Option<Key> {
        if is_activation(&key) {
            return None;
        }
        Some(key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowEvent {
    Activated(usize),
    Moved,
    Unhandled(Key),
}

/// Horizontally arranged buttons with one focused at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonRow {
    buttons: Vec<Button>,
    focus: usize,
}

impl ButtonRow {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self { buttons, focus: 0 }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&Button> {
        self.buttons.get(self.focus)
    }

    pub fn find(&self, id: &ItemId) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Width of every button plus the gaps between them.
    pub fn width(&self) -> u16 {
        self.buttons
            .iter()
            .fold(0u16, |acc, b| acc.saturating_add(b.width() + BUTTON_GAP))
            .saturating_sub(BUTTON_GAP)
    }

    pub fn keypress(&mut self, key: Key) -> RowEvent {
        if key.is(KeyCode::Left) && self.focus > 0 {
            self.focus -= 1;
            return RowEvent::Moved;
        }
        if key.is(KeyCode::Right) && self.focus + 1 < self.buttons.len() {
            self.focus += 1;
            return RowEvent::Moved;
        }

        let focus = self.focus;
        let Some(button) = self.buttons.get_mut(focus) else {
            return RowEvent::Unhandled(key);
        };
        match button.keypress(Size::new(button.width(), 1), key) {
            None => RowEvent::Activated(focus),
            Some(key) => RowEvent::Unhandled(key),
        }
    }

    /// One row, buttons packed from the left.
    pub fn render_row(&self, width: u16, focus: bool) -> Canvas {
        let mut canvas = Canvas::blank(Size::new(width, 1), Role::Popup);
        let mut x = 0u16;
        for (idx, button) in self.buttons.iter().enumerate() {
            let role = if focus && idx == self.focus {
                Role::PopupFocus
            } else {
                Role::Popup
            };
            canvas.put_str(x, 0, &button.caption(), role);
            x = x.saturating_add(button.width() + BUTTON_GAP);
        }
        canvas
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
