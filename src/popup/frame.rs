//! The top-level container.
//!
//! A frame holds the base view (optional menubar header, body, optional
//! footer) and at most one active launcher. While a popup is active every key
//! goes to it and nothing falls through to the base view.

use super::action::{ActionId, ActionRegistry, Flow};
use super::launcher::{Launcher, LauncherId, Placement};
use crate::core::command::Command;
use crate::core::error::{PopupError, Result};
use crate::core::event::{Key, KeyCode};
use crate::core::keymap::Keymap;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::palette::Role;
use crate::ui::widget::{Outcome, Popup, Widget};
use crate::ui::widgets::menu::{Menu, MenuItem};
use crate::ui::widgets::menubar::MenuBar;
use crate::ui::widgets::text::Span;
use compact_str::CompactString;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

/// What happened to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Consumed,
    Unhandled(Key),
    Exit,
}

/// What a command does when its hot-key is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Launch(LauncherId),
    Run(ActionId),
}

/// One menubar menu: its bar label, its items and the actions they use.
pub struct MenuDef {
    pub name: CompactString,
    pub label: Vec<Span>,
    pub items: Vec<MenuItem>,
    pub actions: ActionRegistry,
}

pub struct Frame {
    body: Box<dyn Widget>,
    header: Option<MenuBar>,
    footer: Option<Box<dyn Widget>>,
    launchers: SlotMap<LauncherId, Launcher>,
    active: Option<LauncherId>,
    keymap: Keymap,
    commands: FxHashMap<Command, Target>,
    actions: ActionRegistry,
    last_outcome: Option<Outcome>,
}

impl Frame {
    pub fn new(body: Box<dyn Widget>) -> Self {
        Self {
            body,
            header: None,
            footer: None,
            launchers: SlotMap::with_key(),
            active: None,
            keymap: Keymap::with_defaults(),
            commands: FxHashMap::default(),
            actions: ActionRegistry::new(),
            last_outcome: None,
        }
    }

    pub fn with_footer(mut self, footer: Box<dyn Widget>) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn menubar(&self) -> Option<&MenuBar> {
        self.header.as_ref()
    }

    /// Replaces the header with a menubar holding `menus`.
    ///
    /// Each menu gets a launcher anchored under its label.
    pub fn set_menubar(&mut self, menus: Vec<MenuDef>) -> Result<()> {
        let mut bar = MenuBar::new();
        let mut created = Vec::with_capacity(menus.len());
        for def in menus {
            let index = bar.push(def.name.clone(), def.label);
            let anchor = Pos::new(bar.label_offset(index), 1);
            let items = def.items;
            let launcher = Launcher::new(
                def.name,
                Placement::Anchored(anchor),
                move || -> Box<dyn Popup> { Box::new(Menu::new(items.clone())) },
                def.actions,
            );
            match launcher {
                Ok(launcher) => {
                    let id = self.launchers.insert(launcher);
                    bar.set_launcher(index, id);
                    created.push(id);
                }
                Err(err) => {
                    for id in created {
                        self.launchers.remove(id);
                    }
                    return Err(err);
                }
            }
        }

        if let Some(old) = self.header.take() {
            for id in old.entries().iter().filter_map(|e| e.launcher()) {
                if self.active == Some(id) {
                    self.close_popup();
                }
                self.launchers.remove(id);
            }
        }
        self.header = Some(bar);
        Ok(())
    }

    pub fn add_launcher(&mut self, launcher: Launcher) -> LauncherId {
        self.launchers.insert(launcher)
    }

    pub fn launcher(&self, id: LauncherId) -> Option<&Launcher> {
        self.launchers.get(id)
    }

    pub fn register_action(
        &mut self,
        id: impl Into<ActionId>,
        action: impl FnMut() -> Flow + 'static,
    ) {
        self.actions.register(id, action);
    }

    /// Binds `command` to a launcher or a frame-level action.
    pub fn bind(&mut self, command: Command, target: Target) -> Result<()> {
        if let Target::Run(action) = &target {
            self.actions.validate([action], "frame")?;
        }
        self.commands.insert(command, target);
        Ok(())
    }

    pub fn has_popup(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_launcher(&self) -> Option<LauncherId> {
        self.active
    }

    /// Outcome of the most recently closed popup.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Opens launcher `id` on a `screen`-sized frame.
    ///
    /// Any other active popup is dismissed first. Returns `Ok(false)` when
    /// `id` is already the active popup or unknown.
    pub fn open(&mut self, id: LauncherId, screen: Size) -> Result<bool> {
        if self.active == Some(id) {
            return Ok(false);
        }
        if !self.launchers.contains_key(id) {
            tracing::warn!(?id, "open of unknown launcher");
            return Ok(false);
        }
        self.close_popup();

        let Some(launcher) = self.launchers.get_mut(id) else {
            return Ok(false);
        };
        let opened = launcher.open(screen)?;
        if opened {
            self.active = Some(id);
        }
        Ok(opened)
    }

    /// Force-closes the active popup with `Cancelled`; no action runs.
    pub fn close_popup(&mut self) -> Option<Outcome> {
        let id = self.active.take()?;
        let outcome = self.launchers.get_mut(id).and_then(Launcher::dismiss)?;
        self.last_outcome = Some(outcome.clone());
        Some(outcome)
    }

    pub fn keypress(&mut self, size: Size, key: Key) -> Dispatch {
        if let Some(id) = self.active {
            return self.route_to_popup(id, size, key);
        }

        if let Some(command) = self.keymap.resolve(&key).cloned() {
            if let Some(dispatch) = self.run_command(size, &command) {
                return dispatch;
            }
        }

        let body = self.body_area(size);
        match self.body.keypress(body.size(), key) {
            None => Dispatch::Consumed,
            Some(key) => Dispatch::Unhandled(key),
        }
    }

    fn route_to_popup(&mut self, id: LauncherId, size: Size, key: Key) -> Dispatch {
        let Some(launcher) = self.launchers.get_mut(id) else {
            self.active = None;
            return Dispatch::Consumed;
        };
        let unconsumed = launcher.keypress(key);

        if let Some(closed) = launcher.poll_close() {
            self.active = None;
            self.last_outcome = Some(closed.outcome);
            return match closed.flow {
                Flow::Exit => Dispatch::Exit,
                Flow::Continue => Dispatch::Consumed,
            };
        }

        if let Some(key) = unconsumed {
            self.switch_menu(id, size, key);
        }
        Dispatch::Consumed
    }

    /// Left/Right inside a menubar menu moves to the neighbouring menu.
    fn switch_menu(&mut self, id: LauncherId, size: Size, key: Key) {
        let forward = if key.is(KeyCode::Right) {
            true
        } else if key.is(KeyCode::Left) {
            false
        } else {
            return;
        };
        let Some(bar) = &self.header else {
            return;
        };
        let next = bar
            .index_of_launcher(id)
            .and_then(|idx| bar.neighbour(idx, forward))
            .and_then(|idx| bar.entries().get(idx))
            .and_then(|entry| entry.launcher());
        let Some(next) = next.filter(|next| *next != id) else {
            return;
        };
        if let Err(err) = self.open(next, size) {
            tracing::warn!(error = %err, "menu switch rejected");
        }
    }

    fn run_command(&mut self, size: Size, command: &Command) -> Option<Dispatch> {
        let target = match command {
            Command::OpenMenu(name) => self
                .header
                .as_ref()
                .and_then(|bar| bar.launcher_for(name))
                .map(Target::Launch),
            other => self.commands.get(other).cloned(),
        };
        let Some(target) = target else {
            tracing::debug!(command = command.name(), "command not bound");
            return None;
        };

        tracing::debug!(command = command.name(), "hot-key");
        match target {
            Target::Launch(id) => {
                if let Err(err) = self.open(id, size) {
                    tracing::warn!(command = command.name(), error = %err, "open rejected");
                }
                Some(Dispatch::Consumed)
            }
            Target::Run(action) => {
                match self.actions.run(&action)? {
                    Flow::Exit => Some(Dispatch::Exit),
                    Flow::Continue => Some(Dispatch::Consumed),
                }
            }
        }
    }

    /// Re-lays out the active popup; one that no longer fits is closed.
    pub fn resize(&mut self, size: Size) {
        let Some(id) = self.active else {
            return;
        };
        let result = self
            .launchers
            .get_mut(id)
            .map(|launcher| launcher.relayout(size));
        if let Some(Err(err)) = result {
            tracing::warn!(error = %err, "popup no longer fits, closing");
            self.close_popup();
        }
    }

    fn header_rows(&self, size: Size) -> u16 {
        u16::from(self.header.is_some()).min(size.rows)
    }

    fn footer_rows(&self, size: Size) -> u16 {
        u16::from(self.footer.is_some()).min(size.rows - self.header_rows(size))
    }

    fn body_area(&self, size: Size) -> Rect {
        let (_, rest) = Rect::from_size(size).split_top(self.header_rows(size));
        let (body, _) = rest.split_bottom(self.footer_rows(size));
        body
    }

    fn render_base(&self, size: Size, focus: bool) -> Canvas {
        let mut parts = Vec::with_capacity(3);

        let header_rows = self.header_rows(size);
        if let Some(bar) = &self.header {
            if header_rows > 0 {
                parts.push(render_or_blank(bar, Size::new(size.cols, header_rows), false, Role::Menu));
            }
        }

        let body = self.body_area(size);
        parts.push(render_or_blank(self.body.as_ref(), body.size(), focus, Role::Body));

        let footer_rows = self.footer_rows(size);
        if let Some(footer) = &self.footer {
            if footer_rows > 0 {
                parts.push(render_or_blank(
                    footer.as_ref(),
                    Size::new(size.cols, footer_rows),
                    false,
                    Role::Background,
                ));
            }
        }

        Canvas::stack(size, &parts, Role::Body)
    }
}

fn render_or_blank(widget: &dyn Widget, size: Size, focus: bool, role: Role) -> Canvas {
    match widget.render(size, focus) {
        Ok(canvas) if canvas.size() == size => canvas,
        Ok(canvas) => Canvas::stack(size, &[canvas], role),
        Err(err) => {
            tracing::debug!(error = %err, "base view does not fit");
            Canvas::blank(size, role)
        }
    }
}

impl Widget for Frame {
    /// The base view, with the active popup composited at its launcher's
    /// area. Always exactly `size`; fails if that area is off screen.
    fn render(&self, size: Size, focus: bool) -> Result<Canvas> {
        let base = self.render_base(size, focus && self.active.is_none());
        let Some(launcher) = self.active.and_then(|id| self.launchers.get(id)) else {
            return Ok(base);
        };
        let Some(area) = launcher.overlay_parameters() else {
            return Ok(base);
        };

        if area.right() > size.cols {
            return Err(PopupError::width(area.right(), size.cols));
        }
        if area.bottom() > size.rows {
            return Err(PopupError::height(area.bottom(), size.rows));
        }
        match launcher.render(focus) {
            Some(Ok(popup)) => Ok(base.overlay(&popup, area.pos())),
            Some(Err(err)) => Err(err),
            None => Ok(base),
        }
    }

    fn keypress(&mut self, size: Size, key: Key) -> Option<Key> {
        match Frame::keypress(self, size, key) {
            Dispatch::Unhandled(key) => Some(key),
            Dispatch::Consumed | Dispatch::Exit => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/popup/frame.rs"]
mod tests;
