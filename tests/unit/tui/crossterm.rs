use super::*;
use crate::core::event::Key;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn alt_letter_converts_to_menu_hotkey() {
    let event = crossterm::event::Event::Key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('m'),
        crossterm::event::KeyModifiers::ALT,
    ));
    let Some(InputEvent::Key(key)) = into_input_event(event) else {
        panic!("expected key event");
    };
    assert_eq!(Key::from(key), Key::alt(KeyCode::Char('m')));
    assert_eq!(key.kind, KeyEventKind::Press);
}

#[test]
fn mouse_events_are_dropped_and_resize_kept() {
    let mouse = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Moved,
        column: 1,
        row: 2,
        modifiers: crossterm::event::KeyModifiers::NONE,
    });
    assert!(into_input_event(mouse).is_none());
    assert_eq!(
        into_input_event(crossterm::event::Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}
