use crate::core::error::Result;
use crate::core::event::Key;
use crate::popup::action::ActionId;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::core::palette::Role;
use compact_str::CompactString;
use std::fmt;

/// The capability set every widget provides.
pub trait Widget {
    /// Renders into a canvas of exactly `size`.
    fn render(&self, size: Size, focus: bool) -> Result<Canvas>;

    /// Handles `key`, returning it if it was not consumed.
    ///
    /// Never fails: keys a widget does not understand are handed back.
    fn keypress(&mut self, size: Size, key: Key) -> Option<Key>;
}

/// Content laid out by width alone; its height follows from the width.
pub trait FlowContent {
    /// Renders at `width` columns and natural height.
    fn render_flow(&self, width: u16, focus: bool) -> Canvas;

    /// Rows needed at `width` columns.
    fn flow_height(&self, width: u16) -> u16;

    /// Role used for blank padding around the content.
    fn background(&self) -> Role;
}

/// A modal widget managed by a launcher.
///
/// A popup resolves to exactly one [`Outcome`]. After the keypress that
/// resolves it, [`Popup::take_close`] yields the outcome once; that is the
/// close event its owner reacts to.
pub trait Popup: Widget + FlowContent {
    fn min_width(&self) -> u16;

    fn max_width(&self) -> u16;

    fn result(&self) -> Option<&Outcome>;

    fn take_close(&mut self) -> Option<Outcome>;

    /// Action bound to the selectable entity `id`, if any.
    fn bound_action(&self, id: &ItemId) -> Option<&ActionId>;

    /// Every action id referenced by this popup's buttons or items.
    fn action_refs(&self) -> Vec<&ActionId>;
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(CompactString);

impl ItemId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Selected(ItemId),
    Cancelled,
}

impl Outcome {
    pub fn selected(&self) -> Option<&ItemId> {
        match self {
            Outcome::Selected(id) => Some(id),
            Outcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// Pending result of a popup: set once, taken once.
#[derive(Debug, Default)]
pub(crate) struct Resolution {
    result: Option<Outcome>,
    pending_close: bool,
}

impl Resolution {
    pub(crate) fn is_resolved(&self) -> bool {
        self.result.is_some()
    }

    pub(crate) fn resolve(&mut self, outcome: Outcome) {
        if self.result.is_some() {
            return;
        }
        self.result = Some(outcome);
        self.pending_close = true;
    }

    pub(crate) fn result(&self) -> Option<&Outcome> {
        self.result.as_ref()
    }

    pub(crate) fn take_close(&mut self) -> Option<Outcome> {
        if !std::mem::take(&mut self.pending_close) {
            return None;
        }
        self.result.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/widget.rs"]
mod tests;
