use crate::core::event::InputEvent;
use crate::tui::crossterm::into_input_event;
use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Palette;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;

/// The real terminal, drawn through ratatui.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    palette: Palette,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            palette: Palette::default(),
        })
    }
}

impl Backend for RatatuiTerminal {
    fn screen_size(&self) -> io::Result<Size> {
        let size = self.terminal.size()?;
        Ok(Size::new(size.width, size.height))
    }

    fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        let palette = &self.palette;
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(CanvasWidget { canvas, palette }, area);
        })?;
        Ok(())
    }

    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Some(event) = into_input_event(crossterm::event::read()?) {
                return Ok(event);
            }
        }
    }

    fn register_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

struct CanvasWidget<'a> {
    canvas: &'a Canvas,
    palette: &'a Palette,
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let rows = self.canvas.height().min(area.height);
        let cols = self.canvas.width().min(area.width);
        for y in 0..rows {
            for x in 0..cols {
                let Some(src) = self.canvas.cell(x, y) else {
                    continue;
                };
                let style = to_ratatui_style(self.palette.style(src.role));
                let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) else {
                    continue;
                };
                if src.is_continuation() {
                    // Hidden behind the wide glyph to its left.
                    cell.reset();
                    cell.set_style(style);
                } else {
                    cell.set_symbol(&src.symbol).set_style(style);
                }
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out = out.add_modifier(to_ratatui_mods(s.mods));
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::ITALIC) {
        out |= RModifier::ITALIC;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}
