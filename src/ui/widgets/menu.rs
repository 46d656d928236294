use crate::core::error::Result;
use crate::core::event::{Key, KeyCode};
use crate::popup::action::ActionId;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Role;
use crate::ui::core::text::display_width;
use crate::ui::overlay::{composite, WidthBounds};
use crate::ui::widget::{FlowContent, ItemId, Outcome, Popup, Resolution, Widget};
use compact_str::CompactString;

/// Cells a menu adds around the widest label.
pub const MENU_CHROME: u16 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    id: ItemId,
    label: CompactString,
    action: Option<ActionId>,
}

impl MenuItem {
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
}

/// A vertical list of items, one row each, never truncated.
pub struct Menu {
    items: Vec<MenuItem>,
    focus: usize,
    resolution: Resolution,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            focus: 0,
            resolution: Resolution::default(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&MenuItem> {
        self.items.get(self.focus)
    }

    pub fn width(&self) -> u16 {
        self.items
            .iter()
            .map(|item| display_width(&item.label))
            .max()
            .unwrap_or(0)
            .saturating_add(MENU_CHROME)
    }

    pub fn height(&self) -> u16 {
        self.items.len().min(u16::MAX as usize) as u16
    }

    fn last(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}

impl FlowContent for Menu {
    fn render_flow(&self, width: u16, focus: bool) -> Canvas {
        let rows: Vec<Canvas> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let role = if focus && idx == self.focus {
                    Role::MenuFocus
                } else {
                    Role::Menu
                };
                Canvas::line(&format!(" {}", item.label), width, role)
            })
            .collect();
        Canvas::stack(Size::new(width, self.height()), &rows, Role::Menu)
    }

    fn flow_height(&self, _width: u16) -> u16 {
        self.height()
    }

    fn background(&self) -> Role {
        Role::Menu
    }
}

impl Widget for Menu {
    fn render(&self, size: Size, focus: bool) -> Result<Canvas> {
        composite(size, self, WidthBounds::exact(self.width()), focus)
    }

    fn keypress(&mut self, _size: Size, key: Key) -> Option<Key> {
        if self.resolution.is_resolved() {
            return Some(key);
        }

        if key.code == KeyCode::Esc {
            self.resolution.resolve(Outcome::Cancelled);
            return None;
        }
        if !key.modifiers.is_empty() {
            return Some(key);
        }
        match key.code {
            KeyCode::Up => self.focus = self.focus.saturating_sub(1),
            KeyCode::Down => self.focus = (self.focus + 1).min(self.last()),
            KeyCode::Home => self.focus = 0,
            KeyCode::End => self.focus = self.last(),
            KeyCode::Enter => {
                // An empty menu swallows Enter and stays open.
                if let Some(item) = self.items.get(self.focus) {
                    self.resolution.resolve(Outcome::Selected(item.id.clone()));
                }
            }
            _ => return Some(key),
        }
        None
    }
}

impl Popup for Menu {
    fn min_width(&self) -> u16 {
        self.width()
    }

    fn max_width(&self) -> u16 {
        self.width()
    }

    fn result(&self) -> Option<&Outcome> {
        self.resolution.result()
    }

    fn take_close(&mut self) -> Option<Outcome> {
        self.resolution.take_close()
    }

    fn bound_action(&self, id: &ItemId) -> Option<&ActionId> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .and_then(MenuItem::action)
    }

    fn action_refs(&self) -> Vec<&ActionId> {
        self.items.iter().filter_map(MenuItem::action).collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/menu.rs"]
mod tests;
