//! The overlay compositor.
//!
//! Takes flow content that may be narrower than the area it is asked to fill,
//! clamps the width it renders at, and centres the result inside a canvas of
//! exactly the requested size. Padding is blank cells in the content's
//! background role.

use crate::core::error::{PopupError, Result};
use crate::core::event::Key;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::layout::Insets;
use crate::ui::widget::{FlowContent, Widget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthBounds {
    pub min: u16,
    pub max: u16,
}

impl WidthBounds {
    /// `max` never drops below `min`.
    pub fn new(min: u16, max: u16) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn exact(width: u16) -> Self {
        Self::new(width, width)
    }

    /// Width to render at when `cols` are available.
    pub fn clamp(&self, cols: u16) -> Result<u16> {
        if cols < self.min {
            return Err(PopupError::width(self.min, cols));
        }
        Ok(cols.min(self.max))
    }
}

/// Renders `content` centred in a canvas of exactly `requested`.
///
/// Fails with `InsufficientSpace` when `requested` is narrower than
/// `bounds.min`; nothing is rendered then. Content taller than `requested`
/// is trimmed evenly from the top and bottom.
pub fn composite<C>(requested: Size, content: &C, bounds: WidthBounds, focus: bool) -> Result<Canvas>
where
    C: FlowContent + ?Sized,
{
    let width = bounds.clamp(requested.cols)?;
    let height = content.flow_height(width);

    let mut canvas = content.render_flow(width, focus);
    if canvas.size() != Size::new(width, height) {
        tracing::warn!(
            expected_cols = width,
            expected_rows = height,
            cols = canvas.width(),
            rows = canvas.height(),
            "flow content rendered at the wrong size"
        );
        canvas = Canvas::stack(Size::new(width, height), &[canvas], content.background());
    }

    if height > requested.rows {
        let trim = Insets::centering(0, height - requested.rows);
        canvas = canvas.crop_rows(trim.top, requested.rows);
    }

    let insets = Insets::centering(requested.cols - width, requested.rows - canvas.height());
    Ok(canvas.padded(insets, content.background()))
}

/// Flow content wrapped so it fills any area it is given.
pub struct Centered<C> {
    content: C,
    bounds: WidthBounds,
}

impl<C: FlowContent> Centered<C> {
    pub fn new(content: C, bounds: WidthBounds) -> Self {
        Self { content, bounds }
    }

    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    pub fn content(&self) -> &C {
        &self.content
    }
}

impl<C: FlowContent + Widget> Widget for Centered<C> {
    fn render(&self, size: Size, focus: bool) -> Result<Canvas> {
        composite(size, &self.content, self.bounds, focus)
    }

    fn keypress(&mut self, size: Size, key: Key) -> Option<Key> {
        let Ok(width) = self.bounds.clamp(size.cols) else {
            return Some(key);
        };
        let inner = Size::new(width, self.content.flow_height(width));
        self.content.keypress(inner, key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/overlay.rs"]
mod tests;
