use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::event as ct;

const MODIFIERS: [(ct::KeyModifiers, KeyModifiers); 4] = [
    (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
    (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
    (ct::KeyModifiers::ALT, KeyModifiers::ALT),
    (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
];

/// Converts a terminal event. Popups are keyboard driven, so mouse input is
/// dropped.
pub fn into_input_event(event: ct::Event) -> Option<InputEvent> {
    let event = match event {
        ct::Event::Key(key) => InputEvent::Key(into_key_event(key)),
        ct::Event::Resize(cols, rows) => InputEvent::Resize(cols, rows),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(text) => InputEvent::Paste(text),
        ct::Event::Mouse(_) => return None,
    };
    Some(event)
}

pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let mut modifiers = MODIFIERS
        .iter()
        .filter(|(theirs, _)| event.modifiers.contains(*theirs))
        .fold(KeyModifiers::NONE, |acc, (_, ours)| acc | *ours);

    let code = match event.code {
        // Terminals report ctrl+space as NUL.
        ct::KeyCode::Null => {
            modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        other => key_code(other),
    };

    let kind = match event.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };

    KeyEvent {
        code,
        modifiers,
        kind,
    }
}

fn key_code(code: ct::KeyCode) -> KeyCode {
    use ct::KeyCode as C;

    match code {
        C::Char(ch) => KeyCode::Char(ch),
        C::F(n) => KeyCode::F(n),
        C::Enter => KeyCode::Enter,
        C::Esc => KeyCode::Esc,
        C::Tab => KeyCode::Tab,
        C::BackTab => KeyCode::BackTab,
        C::Backspace => KeyCode::Backspace,
        C::Delete => KeyCode::Delete,
        C::Up => KeyCode::Up,
        C::Down => KeyCode::Down,
        C::Left => KeyCode::Left,
        C::Right => KeyCode::Right,
        C::Home => KeyCode::Home,
        C::End => KeyCode::End,
        C::PageUp => KeyCode::PageUp,
        C::PageDown => KeyCode::PageDown,
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
