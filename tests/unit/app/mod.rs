use super::*;
use crate::core::event::{Key, KeyCode};
use crate::popup::frame::Dispatch;
use crate::ui::core::geom::Size;
use crate::ui::widget::{Outcome, Widget};
use editor::ScratchEditor;

const SCREEN: Size = Size::new(40, 12);

fn main_frame() -> (Frame, Rc<RefCell<ScratchEditor>>) {
    let editor = Rc::new(RefCell::new(ScratchEditor::new()));
    let shared: Rc<RefCell<dyn Editor>> = editor.clone();
    let frame = build_main_frame(shared, Keymap::with_defaults()).expect("main frame");
    (frame, editor)
}

#[test]
fn base_view_has_menubar_body_and_footer() {
    let (frame, _) = main_frame();
    let canvas = frame.render(SCREEN, true).expect("render");

    assert!(canvas.row_text(0).starts_with("File "));
    assert_eq!(canvas.cell(0, 0).map(|c| c.role), Some(Role::MenuShortcut));
    assert_eq!(canvas.row_text(4), format!("{:12}{:28}", "", "Ctrl-P for"));
    assert_eq!(canvas.row_text(5), format!("{:12}{:28}", "", "popup, Alt-M"));
    assert_eq!(canvas.row_text(6), format!("{:12}{:28}", "", "for menu"));
    assert!(canvas.row_text(11).starts_with(FOOTER_TEXT));
    assert_eq!(canvas.cell(0, 11).map(|c| c.role), Some(Role::Menu));
    assert_eq!(canvas.cell(39, 11).map(|c| c.role), Some(Role::Menu));
}

#[test]
fn ctrl_s_saves_through_the_editor() {
    let (mut frame, editor) = main_frame();
    assert_eq!(
        frame.keypress(SCREEN, Key::ctrl(KeyCode::Char('s'))),
        Dispatch::Consumed
    );
    assert_eq!(editor.borrow().saves(), 1);
}

#[test]
fn file_menu_items_reach_the_editor() {
    let (mut frame, editor) = main_frame();
    frame.keypress(SCREEN, Key::alt(KeyCode::Char('m')));
    frame.keypress(SCREEN, Key::simple(KeyCode::Enter));
    assert_eq!(editor.borrow().opened().len(), 1);

    frame.keypress(SCREEN, Key::alt(KeyCode::Char('f')));
    frame.keypress(SCREEN, Key::simple(KeyCode::Down));
    frame.keypress(SCREEN, Key::simple(KeyCode::Enter));
    assert_eq!(editor.borrow().saves(), 1);

    frame.keypress(SCREEN, Key::alt(KeyCode::Char('f')));
    frame.keypress(SCREEN, Key::simple(KeyCode::End));
    assert_eq!(frame.keypress(SCREEN, Key::simple(KeyCode::Enter)), Dispatch::Exit);
}

#[test]
fn help_dialog_is_modal_and_dismissable() {
    let (mut frame, editor) = main_frame();
    frame.keypress(SCREEN, Key::ctrl(KeyCode::Char('p')));
    assert!(frame.has_popup());

    let canvas = frame.render(SCREEN, true).expect("render");
    assert!(canvas.lines().iter().any(|l| l.contains("< OK > < Gotcha >")));

    frame.keypress(SCREEN, Key::ctrl(KeyCode::Char('s')));
    assert_eq!(editor.borrow().saves(), 0);

    frame.keypress(SCREEN, Key::simple(KeyCode::Right));
    frame.keypress(SCREEN, Key::simple(KeyCode::Enter));
    assert!(!frame.has_popup());
    assert_eq!(frame.last_outcome(), Some(&Outcome::Selected("yes".into())));
}

#[test]
fn confirm_quit_exits_on_yes_only() {
    let (mut frame, _) = main_frame();
    frame.keypress(SCREEN, Key::ctrl(KeyCode::Char('r')));
    frame.keypress(SCREEN, Key::simple(KeyCode::Right));
    assert_eq!(frame.keypress(SCREEN, Key::simple(KeyCode::Enter)), Dispatch::Consumed);

    frame.keypress(SCREEN, Key::ctrl(KeyCode::Char('r')));
    assert_eq!(frame.keypress(SCREEN, Key::simple(KeyCode::Enter)), Dispatch::Exit);
}

#[test]
fn ctrl_q_exits_immediately() {
    let (mut frame, _) = main_frame();
    assert_eq!(frame.keypress(SCREEN, Key::ctrl(KeyCode::Char('q'))), Dispatch::Exit);
}
