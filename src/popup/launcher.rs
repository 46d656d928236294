//! Launchers own a popup while it is open.
//!
//! A launcher builds its popup lazily on `open`, keeps the area it was laid
//! out in, and is the only thing that moves it between `Closed` and `Open`.
//! Closing runs the selected entity's bound action first, while the popup is
//! still in place.

use super::action::{ActionRegistry, Flow};
use crate::core::error::{PopupError, Result};
use crate::core::event::Key;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::overlay::WidthBounds;
use crate::ui::widget::{Outcome, Popup};
use compact_str::CompactString;
use slotmap::new_key_type;

new_key_type! { pub struct LauncherId; }

pub type PopupFactory = Box<dyn Fn() -> Box<dyn Popup>>;

/// Where an open popup is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The whole screen; the popup centres itself.
    Screen,
    /// Natural size with its top-left corner at the anchor, shifted back on
    /// screen if it would overflow.
    Anchored(Pos),
}

pub struct PopupSpec {
    area: Rect,
    content: Box<dyn Popup>,
}

impl PopupSpec {
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn content(&self) -> &dyn Popup {
        self.content.as_ref()
    }
}

pub enum LauncherState {
    Closed,
    Open(PopupSpec),
}

/// What a close transition produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Closed {
    pub outcome: Outcome,
    pub flow: Flow,
}

pub struct Launcher {
    name: CompactString,
    placement: Placement,
    factory: PopupFactory,
    actions: ActionRegistry,
    state: LauncherState,
}

impl Launcher {
    /// Fails with `UnboundActionReference` if the popup the factory builds
    /// refers to an action `actions` does not hold.
    pub fn new(
        name: impl Into<CompactString>,
        placement: Placement,
        factory: impl Fn() -> Box<dyn Popup> + 'static,
        actions: ActionRegistry,
    ) -> Result<Self> {
        let name = name.into();
        let probe = factory();
        actions.validate(probe.action_refs(), &name)?;

        Ok(Self {
            name,
            placement,
            factory: Box::new(factory),
            actions,
            state: LauncherState::Closed,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn state(&self) -> &LauncherState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LauncherState::Open(_))
    }

    /// Builds the popup and lays it out on a `screen`-sized area.
    ///
    /// Returns `Ok(false)` without touching anything when already open. A
    /// popup that cannot fit is rejected and the launcher stays closed.
    pub fn open(&mut self, screen: Size) -> Result<bool> {
        if self.is_open() {
            tracing::debug!(launcher = %self.name, "already open");
            return Ok(false);
        }

        let content = (self.factory)();
        let area = layout(self.placement, content.as_ref(), screen)?;
        tracing::debug!(
            launcher = %self.name,
            x = area.x,
            y = area.y,
            w = area.w,
            h = area.h,
            "popup opened"
        );
        self.state = LauncherState::Open(PopupSpec { area, content });
        Ok(true)
    }

    /// Re-lays out an open popup for a new screen size.
    ///
    /// On failure the old area is kept; the caller decides whether to close.
    pub fn relayout(&mut self, screen: Size) -> Result<()> {
        let LauncherState::Open(spec) = &mut self.state else {
            return Ok(());
        };
        spec.area = layout(self.placement, spec.content.as_ref(), screen)?;
        Ok(())
    }

    /// `(left, top, width, height)` of the open popup.
    pub fn overlay_parameters(&self) -> Option<Rect> {
        match &self.state {
            LauncherState::Open(spec) => Some(spec.area),
            LauncherState::Closed => None,
        }
    }

    pub fn popup(&self) -> Option<&dyn Popup> {
        match &self.state {
            LauncherState::Open(spec) => Some(spec.content.as_ref()),
            LauncherState::Closed => None,
        }
    }

    pub fn render(&self, focus: bool) -> Option<Result<Canvas>> {
        match &self.state {
            LauncherState::Open(spec) => Some(spec.content.render(spec.area.size(), focus)),
            LauncherState::Closed => None,
        }
    }

    /// Routes `key` to the open popup. A closed launcher hands it back.
    pub fn keypress(&mut self, key: Key) -> Option<Key> {
        match &mut self.state {
            LauncherState::Open(spec) => spec.content.keypress(spec.area.size(), key),
            LauncherState::Closed => Some(key),
        }
    }

    /// Takes the popup's close event, if it has one, and closes.
    ///
    /// The bound action of a selected entity runs before the transition.
    pub fn poll_close(&mut self) -> Option<Closed> {
        let LauncherState::Open(spec) = &mut self.state else {
            return None;
        };
        let outcome = spec.content.take_close()?;

        let mut flow = Flow::Continue;
        if let Some(id) = outcome.selected() {
            if let Some(action) = spec.content.bound_action(id).cloned() {
                flow = self.actions.run(&action).unwrap_or_default();
            }
        }

        tracing::debug!(launcher = %self.name, outcome = ?outcome, flow = ?flow, "popup closed");
        self.state = LauncherState::Closed;
        Some(Closed { outcome, flow })
    }

    /// Closes without running any action.
    pub fn dismiss(&mut self) -> Option<Outcome> {
        if !self.is_open() {
            return None;
        }
        tracing::debug!(launcher = %self.name, "popup dismissed");
        self.state = LauncherState::Closed;
        Some(Outcome::Cancelled)
    }
}

fn layout(placement: Placement, content: &dyn Popup, screen: Size) -> Result<Rect> {
    let bounds = WidthBounds::new(content.min_width(), content.max_width());
    match placement {
        Placement::Screen => {
            let width = bounds.clamp(screen.cols)?;
            let height = content.flow_height(width);
            if height > screen.rows {
                return Err(PopupError::height(height, screen.rows));
            }
            Ok(Rect::from_size(screen))
        }
        Placement::Anchored(anchor) => {
            bounds.clamp(screen.cols)?;
            let width = bounds.max.min(screen.cols);
            let height = content.flow_height(width);
            if height > screen.rows {
                return Err(PopupError::height(height, screen.rows));
            }
            Ok(Rect::new(anchor.x, anchor.y, width, height).fit_within(Rect::from_size(screen)))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/popup/launcher.rs"]
mod tests;
