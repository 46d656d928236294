//! Fixed-size grids of styled cells.
//!
//! Every widget renders into a [`Canvas`]; compositing never changes the size
//! of the canvas it starts from. Wide glyphs occupy their first cell and leave
//! an empty-symbol continuation cell behind them.

use super::geom::{Pos, Rect, Size};
use super::layout::Insets;
use super::palette::Role;
use compact_str::CompactString;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: CompactString,
    pub role: Role,
}

impl Cell {
    pub fn blank(role: Role) -> Self {
        Self {
            symbol: CompactString::const_new(" "),
            role,
        }
    }

    /// Trailing half of a wide glyph.
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }

    fn is_wide(&self) -> bool {
        UnicodeWidthStr::width(self.symbol.as_str()) > 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn blank(size: Size, role: Role) -> Self {
        let len = size.cols as usize * size.rows as usize;
        Self {
            size,
            cells: vec![Cell::blank(role); len],
        }
    }

    /// A single row holding `text`, padded (or clipped) to `width` cells.
    pub fn line(text: &str, width: u16, role: Role) -> Self {
        let mut canvas = Self::blank(Size::new(width, 1), role);
        canvas.put_str(0, 0, text, role);
        canvas
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u16 {
        self.size.cols
    }

    pub fn height(&self) -> u16 {
        self.size.rows
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get(idx)
    }

    fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.size.cols || y >= self.size.rows {
            return None;
        }
        Some(y as usize * self.size.cols as usize + x as usize)
    }

    /// Writes `text` starting at `(x, y)`, clipped to the row.
    ///
    /// Returns the column after the last written glyph. A wide glyph that does
    /// not fit completely is not written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, role: Role) -> u16 {
        let mut x = x;
        if y >= self.size.rows {
            return x;
        }
        for g in text.graphemes(true) {
            let w = UnicodeWidthStr::width(g) as u16;
            if w == 0 {
                continue;
            }
            if x.saturating_add(w) > self.size.cols {
                break;
            }
            if let Some(cell) = self.cell_mut(x, y) {
                cell.symbol = CompactString::new(g);
                cell.role = role;
            }
            for dx in 1..w {
                if let Some(cell) = self.cell_mut(x + dx, y) {
                    cell.symbol = CompactString::default();
                    cell.role = role;
                }
            }
            x += w;
        }
        x
    }

    /// Visible text of row `y` (continuation cells contribute nothing).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.size.rows {
            return String::new();
        }
        let start = y as usize * self.size.cols as usize;
        let end = start + self.size.cols as usize;
        self.cells[start..end]
            .iter()
            .map(|c| c.symbol.as_str())
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.size.rows).map(|y| self.row_text(y)).collect()
    }

    /// Surrounds the canvas with blank cells of `role`.
    pub fn padded(self, insets: Insets, role: Role) -> Canvas {
        if insets == Insets::default() {
            return self;
        }
        let size = Size::new(
            self.size.cols.saturating_add(insets.horizontal()),
            self.size.rows.saturating_add(insets.vertical()),
        );
        Canvas::blank(size, role).overlay(&self, Pos::new(insets.left, insets.top))
    }

    /// Paints `top` over this canvas with its origin at `at`.
    ///
    /// Parts of `top` outside this canvas are dropped; the result keeps this
    /// canvas's size.
    pub fn overlay(mut self, top: &Canvas, at: Pos) -> Canvas {
        let bounds = Rect::from_size(self.size);
        let target = Rect::new(at.x, at.y, top.width(), top.height()).intersect(bounds);
        if target.is_empty() {
            return self;
        }

        for y in target.y..target.bottom() {
            let src_y = y - at.y;

            // A wide glyph cut by the left edge would bleed into the overlay.
            if target.x > 0 {
                if let Some(cell) = self.cell_mut(target.x - 1, y) {
                    if cell.is_wide() {
                        *cell = Cell::blank(cell.role);
                    }
                }
            }

            for x in target.x..target.right() {
                let src_x = x - at.x;
                if let (Some(src), Some(dst)) = (top.cell(src_x, src_y), self.idx(x, y)) {
                    self.cells[dst] = src.clone();
                }
            }

            if let Some(cell) = self.cell_mut(target.right(), y) {
                if cell.is_continuation() {
                    *cell = Cell::blank(cell.role);
                }
            }
        }
        self
    }

    /// Rows `top..top + rows` of this canvas.
    pub fn crop_rows(&self, top: u16, rows: u16) -> Canvas {
        let top = top.min(self.size.rows);
        let rows = rows.min(self.size.rows - top);
        let start = top as usize * self.size.cols as usize;
        let end = start + rows as usize * self.size.cols as usize;
        Canvas {
            size: Size::new(self.size.cols, rows),
            cells: self.cells[start..end].to_vec(),
        }
    }

    /// Stacks `parts` top to bottom into a canvas of exactly `size`.
    ///
    /// Parts are clipped to `size`; rows not covered are blank in `role`.
    pub fn stack(size: Size, parts: &[Canvas], role: Role) -> Canvas {
        let mut out = Canvas::blank(size, role);
        let mut y = 0u16;
        for part in parts {
            if y >= size.rows {
                break;
            }
            out = out.overlay(part, Pos::new(0, y));
            y = y.saturating_add(part.height());
        }
        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/canvas.rs"]
mod tests;
