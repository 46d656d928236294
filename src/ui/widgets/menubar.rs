use super::text::Span;
use crate::core::error::Result;
use crate::core::event::Key;
use crate::popup::launcher::LauncherId;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Role;
use crate::ui::core::text::display_width;
use crate::ui::widget::Widget;
use compact_str::CompactString;

/// Cells between adjacent menu labels.
pub const MENU_SEPARATION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuBarEntry {
    name: CompactString,
    label: Vec<Span>,
    launcher: Option<LauncherId>,
}

impl MenuBarEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &[Span] {
        &self.label
    }

    pub fn launcher(&self) -> Option<LauncherId> {
        self.launcher
    }

    pub fn width(&self) -> u16 {
        self.label
            .iter()
            .fold(0u16, |acc, s| acc.saturating_add(display_width(&s.text)))
    }
}

/// Named menus laid out left to right.
///
/// The bar only draws labels and maps names to the launchers that own each
/// menu popup; opening and closing is the frame's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuBar {
    entries: Vec<MenuBarEntry>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a menu and returns its index.
    pub fn push(&mut self, name: impl Into<CompactString>, label: Vec<Span>) -> usize {
        self.entries.push(MenuBarEntry {
            name: name.into(),
            label,
            launcher: None,
        });
        self.entries.len() - 1
    }

    pub fn set_launcher(&mut self, index: usize, launcher: LauncherId) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.launcher = Some(launcher);
        }
    }

    pub fn entries(&self) -> &[MenuBarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn index_of_launcher(&self, launcher: LauncherId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.launcher == Some(launcher))
    }

    pub fn launcher_for(&self, name: &str) -> Option<LauncherId> {
        self.index_of(name)
            .and_then(|idx| self.entries.get(idx))
            .and_then(MenuBarEntry::launcher)
    }

    /// Column where the label at `index` starts.
    pub fn label_offset(&self, index: usize) -> u16 {
        self.entries
            .iter()
            .take(index)
            .fold(0u16, |acc, e| acc.saturating_add(e.width() + MENU_SEPARATION))
    }

    /// Index of the menu beside `index`, wrapping at both ends.
    pub fn neighbour(&self, index: usize, forward: bool) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 || index >= len {
            return None;
        }
        Some(if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        })
    }
}

impl Widget for MenuBar {
    fn render(&self, size: Size, _focus: bool) -> Result<Canvas> {
        let mut canvas = Canvas::blank(size, Role::Menu);
        let mut x = 0u16;
        for entry in &self.entries {
            for span in &entry.label {
                x = canvas.put_str(x, 0, &span.text, span.role);
            }
            x = x.saturating_add(MENU_SEPARATION);
        }
        Ok(canvas)
    }

    fn keypress(&mut self, _size: Size, key: Key) -> Option<Key> {
        Some(key)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/menubar.rs"]
mod tests;
