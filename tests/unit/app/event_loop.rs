use super::*;
use crate::core::command::Command;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::popup::action::ActionRegistry;
use crate::popup::frame::Target;
use crate::popup::launcher::{Launcher, Placement};
use crate::ui::backend::test::TestBackend;
use crate::ui::core::palette::Role;
use crate::ui::widget::Popup;
use crate::ui::widgets::button::Button;
use crate::ui::widgets::dialog::Dialog;
use crate::ui::widgets::text::Text;

fn quit_frame() -> Frame {
    let mut frame = Frame::new(Box::new(Text::new("body", Role::Body)));
    let factory = || -> Box<dyn Popup> {
        Box::new(Dialog::new(
            "Do you want to quit?",
            vec![
                Button::new("yes", "Yes").with_action("quit"),
                Button::new("no", "No"),
            ],
        ))
    };
    let launcher = Launcher::new(
        "confirm",
        Placement::Screen,
        factory,
        ActionRegistry::new().with("quit", || Flow::Exit),
    )
    .expect("valid");
    let id = frame.add_launcher(launcher);
    frame.bind(Command::ConfirmQuit, Target::Launch(id)).expect("bind");
    frame
}

#[test]
fn run_draws_once_per_event_until_exit() {
    let mut backend = TestBackend::new(30, 6)
        .with_keys([Key::ctrl(KeyCode::Char('r')), Key::simple(KeyCode::Enter)]);
    let mut frame = quit_frame();

    run(&mut backend, &mut frame).expect("clean exit");

    assert_eq!(backend.frames().len(), 2);
    assert_eq!(backend.frames()[0].row_text(0).trim_end(), "body");
    assert!(backend.frames()[1]
        .lines()
        .iter()
        .any(|l| l.contains("Do you want to quit?")));
}

#[test]
fn run_surfaces_backend_errors() {
    let mut backend = TestBackend::new(30, 6);
    let mut frame = quit_frame();
    let err = run(&mut backend, &mut frame).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(backend.frames().len(), 1);
}

#[test]
fn release_events_are_ignored() {
    let mut frame = quit_frame();
    let release = KeyEvent {
        code: KeyCode::Char('r'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Release,
    };
    assert_eq!(step(&mut frame, Size::new(30, 6), InputEvent::Key(release)), Flow::Continue);
    assert!(!frame.has_popup());
}

#[test]
fn resize_that_no_longer_fits_closes_the_popup() {
    let mut backend = TestBackend::new(30, 6).with_keys([Key::ctrl(KeyCode::Char('r'))]);
    backend.resize(10, 6);
    let mut frame = quit_frame();

    let err = run(&mut backend, &mut frame).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    assert!(!frame.has_popup());
    let last = backend.last_frame().expect("drawn");
    assert_eq!(last.size(), Size::new(10, 6));
    assert_eq!(last.row_text(0), "body      ");
}

#[test]
fn draw_closes_a_popup_that_cannot_render() {
    let mut backend = TestBackend::new(10, 6);
    let mut frame = quit_frame();
    let open = KeyEvent::press(KeyCode::Char('r'), KeyModifiers::CONTROL);
    step(&mut frame, Size::new(30, 6), InputEvent::Key(open));
    assert!(frame.has_popup());

    // The screen shrank without a resize event reaching the frame.
    draw(&mut backend, &mut frame, Size::new(10, 6)).expect("drawn");
    assert!(!frame.has_popup());
    assert_eq!(backend.frames().len(), 1);
}
