//! Application wiring: the main frame, its hot-keys and its popups.

pub mod editor;
pub mod event_loop;
pub mod settings;

use crate::core::command::Command;
use crate::core::error::Result;
use crate::core::keymap::Keymap;
use crate::popup::action::{ActionRegistry, Flow};
use crate::popup::frame::{Frame, MenuDef, Target};
use crate::popup::launcher::{Launcher, Placement};
use crate::ui::core::palette::Role;
use crate::ui::overlay::{Centered, WidthBounds};
use crate::ui::widget::Popup;
use crate::ui::widgets::button::Button;
use crate::ui::widgets::dialog::Dialog;
use crate::ui::widgets::menu::MenuItem;
use crate::ui::widgets::text::{Span, Text};
use editor::Editor;
use std::cell::RefCell;
use std::rc::Rc;

pub const BODY_TEXT: &str = "Ctrl-P for popup, Alt-M for menu";
pub const BODY_WIDTH: u16 = 15;
pub const FOOTER_TEXT: &str = "Press Alt-H for help";
pub const HELP_MESSAGE: &str = "In a dialogbox you can select buttons or press <esc>";
pub const QUIT_MESSAGE: &str = "Do you want to quit?";

fn help_dialog() -> Box<dyn Popup> {
    Box::new(Dialog::new(
        HELP_MESSAGE,
        vec![Button::new("ok", "OK"), Button::new("yes", "Gotcha")],
    ))
}

fn quit_dialog() -> Box<dyn Popup> {
    Box::new(Dialog::new(
        QUIT_MESSAGE,
        vec![
            Button::new("yes", "Yes").with_action("quit"),
            Button::new("no", "No"),
        ],
    ))
}

fn save_action(editor: &Rc<RefCell<dyn Editor>>) -> impl FnMut() -> Flow + 'static {
    let editor = Rc::clone(editor);
    move || {
        if let Err(err) = editor.borrow_mut().save() {
            tracing::error!(error = %err, "save failed");
        }
        Flow::Continue
    }
}

fn open_action(editor: &Rc<RefCell<dyn Editor>>) -> impl FnMut() -> Flow + 'static {
    let editor = Rc::clone(editor);
    move || {
        match editor.borrow_mut().open() {
            Ok(handle) => tracing::debug!(name = %handle.name, "opened"),
            Err(err) => tracing::error!(error = %err, "open failed"),
        }
        Flow::Continue
    }
}

fn file_menu(editor: &Rc<RefCell<dyn Editor>>) -> MenuDef {
    MenuDef {
        name: "file".into(),
        label: vec![Span::new(Role::MenuShortcut, "F"), Span::new(Role::Menu, "ile")],
        items: vec![
            MenuItem::new("open", "Open").with_action("open"),
            MenuItem::new("save", "Save").with_action("save"),
            MenuItem::new("saveas", "Save As"),
            MenuItem::new("quit", "Quit").with_action("quit"),
        ],
        actions: ActionRegistry::new()
            .with("open", open_action(editor))
            .with("save", save_action(editor))
            .with("quit", || Flow::Exit),
    }
}

/// The editor's main frame: a File menubar, a short hint as the body, a help
/// line as the footer, and the help and quit dialogs on hot-keys.
pub fn build_main_frame(editor: Rc<RefCell<dyn Editor>>, keymap: Keymap) -> Result<Frame> {
    let body = Centered::new(
        Text::new(BODY_TEXT, Role::Body),
        WidthBounds::new(1, BODY_WIDTH),
    );
    let footer = Text::new(FOOTER_TEXT, Role::Menu);

    let mut frame = Frame::new(Box::new(body))
        .with_footer(Box::new(footer))
        .with_keymap(keymap);
    frame.set_menubar(vec![file_menu(&editor)])?;

    let help = frame.add_launcher(Launcher::new(
        "help",
        Placement::Screen,
        help_dialog,
        ActionRegistry::new(),
    )?);
    let confirm = frame.add_launcher(Launcher::new(
        "confirm-quit",
        Placement::Screen,
        quit_dialog,
        ActionRegistry::new().with("quit", || Flow::Exit),
    )?);

    frame.register_action("save", save_action(&editor));
    frame.register_action("quit", || Flow::Exit);

    frame.bind(Command::ShowHelp, Target::Launch(help))?;
    frame.bind(Command::ConfirmQuit, Target::Launch(confirm))?;
    frame.bind(Command::Save, Target::Run("save".into()))?;
    frame.bind(Command::Quit, Target::Run("quit".into()))?;

    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
