use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

impl Color {
    pub const BLACK: Self = Color::Indexed(0);
    pub const DARK_RED: Self = Color::Indexed(1);
    pub const YELLOW: Self = Color::Indexed(11);
    pub const DARK_BLUE: Self = Color::Indexed(4);
    pub const LIGHT_GRAY: Self = Color::Indexed(7);
    pub const LIGHT_BLUE: Self = Color::Indexed(12);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u16);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const UNDERLINE: Self = Self(1 << 2);
    pub const REVERSE: Self = Self(1 << 3);
    pub const ITALIC: Self = Self(1 << 4);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bold" => Some(Self::BOLD),
            "dim" => Some(Self::DIM),
            "underline" => Some(Self::UNDERLINE),
            "reverse" | "standout" => Some(Self::REVERSE),
            "italic" | "italics" => Some(Self::ITALIC),
            _ => None,
        }
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn add_mod(mut self, m: Mod) -> Self {
        self.mods |= m;
        self
    }
}

/// Parses `#RRGGBB` or a named terminal color.
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase().replace(' ', "_");
    let c = match v.as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "dark_red" | "red" => Color::Indexed(1),
        "dark_green" | "green" => Color::Indexed(2),
        "brown" => Color::Indexed(3),
        "dark_blue" | "blue" => Color::Indexed(4),
        "dark_magenta" | "magenta" => Color::Indexed(5),
        "dark_cyan" | "cyan" => Color::Indexed(6),
        "light_gray" | "light_grey" | "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "yellow" | "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
