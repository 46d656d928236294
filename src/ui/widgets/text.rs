use crate::core::error::Result;
use crate::core::event::Key;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Role;
use crate::ui::core::text::{display_width, wrap};
use crate::ui::widget::{FlowContent, Widget};
use compact_str::CompactString;

/// A run of text in one role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: CompactString,
    pub role: Role,
}

impl Span {
    pub fn new(role: Role, text: impl Into<CompactString>) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Static text.
///
/// Single-role text wraps on whitespace; mixed-role markup is laid out as
/// one line and clipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    spans: Vec<Span>,
    role: Role,
    align: Align,
}

impl Text {
    pub fn new(text: impl Into<CompactString>, role: Role) -> Self {
        Self {
            spans: vec![Span::new(role, text)],
            role,
            align: Align::Left,
        }
    }

    pub fn markup(spans: Vec<Span>, role: Role) -> Self {
        Self {
            spans,
            role,
            align: Align::Left,
        }
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Cells needed to show the text on one line.
    pub fn width(&self) -> u16 {
        self.spans
            .iter()
            .fold(0u16, |acc, s| acc.saturating_add(display_width(&s.text)))
    }

    fn is_markup(&self) -> bool {
        self.spans.len() > 1
    }

    fn offset(&self, used: u16, width: u16) -> u16 {
        match self.align {
            Align::Left => 0,
            Align::Center => width.saturating_sub(used) / 2,
        }
    }
}

impl FlowContent for Text {
    fn render_flow(&self, width: u16, _focus: bool) -> Canvas {
        let mut canvas = Canvas::blank(Size::new(width, self.flow_height(width)), self.role);
        if self.is_markup() {
            let mut x = self.offset(self.width(), width);
            for span in &self.spans {
                x = canvas.put_str(x, 0, &span.text, span.role);
            }
            return canvas;
        }

        let role = self.spans.first().map(|s| s.role).unwrap_or(self.role);
        for (y, line) in wrap(&self.plain(), width).iter().enumerate() {
            let x = self.offset(display_width(line), width);
            canvas.put_str(x, y as u16, line, role);
        }
        canvas
    }

    fn flow_height(&self, width: u16) -> u16 {
        if self.is_markup() {
            return 1;
        }
        wrap(&self.plain(), width).len().min(u16::MAX as usize) as u16
    }

    fn background(&self) -> Role {
        self.role
    }
}

impl Widget for Text {
    fn render(&self, size: Size, focus: bool) -> Result<Canvas> {
        let flow = self.render_flow(size.cols, focus);
        Ok(Canvas::stack(size, &[flow], self.role))
    }

    fn keypress(&mut self, _size: Size, key: Key) -> Option<Key> {
        Some(key)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/text.rs"]
mod tests;
