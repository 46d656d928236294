use super::*;

#[test]
fn defaults_cover_frame_hotkeys() {
    let keymap = Keymap::with_defaults();
    assert_eq!(keymap.resolve(&Key::ctrl(KeyCode::Char('s'))), Some(&Command::Save));
    assert_eq!(keymap.resolve(&Key::ctrl(KeyCode::Char('q'))), Some(&Command::Quit));
    assert_eq!(
        keymap.resolve(&Key::ctrl(KeyCode::Char('r'))),
        Some(&Command::ConfirmQuit)
    );
    assert_eq!(
        keymap.resolve(&Key::alt(KeyCode::Char('m'))),
        Some(&Command::OpenMenu("file".into()))
    );
    assert!(keymap.resolve(&Key::simple(KeyCode::Esc)).is_none());
}

#[test]
fn keys_for_lists_every_binding() {
    let keymap = Keymap::with_defaults();
    let keys: Vec<String> = keymap
        .keys_for(&Command::ShowHelp)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, vec!["alt+h", "ctrl+p"]);
}

#[test]
fn bind_and_unbind() {
    let mut keymap = Keymap::empty();
    assert!(keymap.is_empty());
    let key = Key::ctrl(KeyCode::Char('x'));
    assert_eq!(keymap.bind(key, Command::Quit), None);
    assert_eq!(keymap.bind(key, Command::Save), Some(Command::Quit));
    assert_eq!(keymap.unbind(&key), Some(Command::Save));
    assert!(keymap.resolve(&key).is_none());
}

#[test]
fn parses_modifier_notation() {
    assert_eq!(parse_keybinding("ctrl+s"), Some(Key::ctrl(KeyCode::Char('s'))));
    assert_eq!(parse_keybinding(" Alt + m "), Some(Key::alt(KeyCode::Char('m'))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("F5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(
        parse_keybinding("ctrl+P"),
        Some(Key::new(
            KeyCode::Char('p'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(parse_keybinding("escape"), Some(Key::simple(KeyCode::Esc)));
}

#[test]
fn rejects_malformed_keys() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+foo"), None);
    assert_eq!(parse_keybinding("fx"), None);
}
