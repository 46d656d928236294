//! Named display attributes.
//!
//! Canvas cells carry a [`Role`] rather than concrete colors; the backend maps
//! roles to styles through the palette registered at startup.

use super::style::{Color, Mod, Style};
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Body,
    Menu,
    /// Shortcut letter inside a menubar label.
    MenuShortcut,
    MenuFocus,
    Background,
    BackgroundFocus,
    Popup,
    PopupFocus,
    Alert,
    Code,
    LineNumber,
}

impl Role {
    pub const ALL: [Role; 11] = [
        Role::Body,
        Role::Menu,
        Role::MenuShortcut,
        Role::MenuFocus,
        Role::Background,
        Role::BackgroundFocus,
        Role::Popup,
        Role::PopupFocus,
        Role::Alert,
        Role::Code,
        Role::LineNumber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Body => "body",
            Role::Menu => "menu",
            Role::MenuShortcut => "menuh",
            Role::MenuFocus => "menuf",
            Role::Background => "bg",
            Role::BackgroundFocus => "bgf",
            Role::Popup => "popbg",
            Role::PopupFocus => "popf",
            Role::Alert => "alert",
            Role::Code => "code",
            Role::LineNumber => "lineno",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        Role::ALL.into_iter().find(|role| role.name() == v)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    styles: FxHashMap<Role, Style>,
}

impl Palette {
    pub fn empty() -> Self {
        Self {
            styles: FxHashMap::default(),
        }
    }

    /// Unknown roles resolve to the terminal default style.
    pub fn style(&self, role: Role) -> Style {
        self.styles.get(&role).copied().unwrap_or_default()
    }

    pub fn set(&mut self, role: Role, style: Style) {
        self.styles.insert(role, style);
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let on_gray = |fg: Color| Style::default().fg(fg).bg(Color::LIGHT_GRAY);
        let mut palette = Self::empty();
        palette.set(Role::Menu, on_gray(Color::BLACK));
        palette.set(
            Role::MenuShortcut,
            on_gray(Color::YELLOW).add_mod(Mod::BOLD),
        );
        palette.set(
            Role::MenuFocus,
            Style::default().fg(Color::LIGHT_GRAY).bg(Color::DARK_BLUE),
        );
        palette.set(
            Role::BackgroundFocus,
            Style::default().fg(Color::LIGHT_GRAY).bg(Color::DARK_BLUE),
        );
        palette.set(Role::Background, on_gray(Color::BLACK));
        palette.set(Role::Popup, on_gray(Color::BLACK));
        palette.set(
            Role::PopupFocus,
            Style::default().fg(Color::LIGHT_GRAY).bg(Color::DARK_BLUE),
        );
        palette.set(
            Role::Alert,
            Style::default()
                .fg(Color::LIGHT_GRAY)
                .bg(Color::DARK_RED)
                .add_mod(Mod::BOLD),
        );
        palette.set(Role::Code, on_gray(Color::BLACK));
        palette.set(Role::LineNumber, on_gray(Color::LIGHT_BLUE));
        palette
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/palette.rs"]
mod tests;
