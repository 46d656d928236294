use super::*;
use crate::core::error::PopupError;

fn quit_dialog() -> Dialog {
    Dialog::new(
        "Do you want to quit?",
        vec![
            Button::new("yes", "Yes").with_action("quit"),
            Button::new("no", "No"),
        ],
    )
}

fn key(code: KeyCode) -> Key {
    Key::simple(code)
}

#[test]
fn width_bounds_follow_buttons_and_message() {
    let d = quit_dialog();
    assert_eq!(d.min_width(), 14);
    assert_eq!(d.max_width(), 20);
}

#[test]
fn max_width_never_drops_below_min() {
    let d = Dialog::new("Hi", vec![Button::new("ok", "OK"), Button::new("yes", "Gotcha")]);
    assert_eq!(d.min_width(), 17);
    assert_eq!(d.max_width(), 17);
}

#[test]
fn renders_centred_at_max_width() {
    let d = quit_dialog();
    let canvas = d.render(Size::new(30, 2), false).expect("fits");
    assert_eq!(canvas.size(), Size::new(30, 2));
    assert_eq!(canvas.row_text(0), "     Do you want to quit?     ");
    assert_eq!(canvas.row_text(1), "     < Yes > < No >           ");
}

#[test]
fn odd_slack_puts_extra_cell_on_the_right() {
    let d = Dialog::new("Do you want to quit?!", vec![Button::new("yes", "Yes")]);
    assert_eq!(d.max_width(), 21);
    let canvas = d.render(Size::new(30, 2), false).expect("fits");
    let row = canvas.row_text(0);
    assert!(row.starts_with("    Do"));
    assert!(row.ends_with("?!     "));
}

#[test]
fn narrower_area_wraps_the_message() {
    let d = quit_dialog();
    let canvas = d.render(Size::new(14, 3), false).expect("fits");
    assert_eq!(
        canvas.lines(),
        vec!["Do you want to", "quit?         ", "< Yes > < No >"]
    );
}

#[test]
fn narrow_area_is_rejected() {
    let d = quit_dialog();
    assert_eq!(
        d.render(Size::new(13, 10), false).unwrap_err(),
        PopupError::width(14, 13)
    );
}

#[test]
fn short_area_trims_to_the_message() {
    let d = quit_dialog();
    let canvas = d.render(Size::new(30, 1), false).expect("trimmed");
    assert_eq!(canvas.size(), Size::new(30, 1));
    assert_eq!(canvas.row_text(0), format!("{:5}{}{:5}", "", d.message(), ""));
}

#[test]
fn modified_escape_still_cancels() {
    let mut d = quit_dialog();
    assert_eq!(d.keypress(Size::new(30, 2), Key::alt(KeyCode::Esc)), None);
    assert_eq!(d.result(), Some(&Outcome::Cancelled));
}

#[test]
fn focused_button_uses_focus_role_only_with_focus() {
    let d = quit_dialog();
    let focused = d.render(Size::new(20, 2), true).expect("fits");
    assert_eq!(focused.cell(0, 1).map(|c| c.role), Some(Role::PopupFocus));
    let unfocused = d.render(Size::new(20, 2), false).expect("fits");
    assert_eq!(unfocused.cell(0, 1).map(|c| c.role), Some(Role::Popup));
}

#[test]
fn enter_selects_focused_button_once() {
    let mut d = quit_dialog();
    let size = Size::new(20, 2);
    assert_eq!(d.keypress(size, key(KeyCode::Right)), None);
    assert_eq!(d.keypress(size, key(KeyCode::Enter)), None);

    assert_eq!(d.result(), Some(&Outcome::Selected("no".into())));
    assert_eq!(d.take_close(), Some(Outcome::Selected("no".into())));
    assert_eq!(d.take_close(), None);

    // Resolved dialogs hand keys back.
    assert_eq!(d.keypress(size, key(KeyCode::Esc)), Some(key(KeyCode::Esc)));
}

#[test]
fn escape_cancels_after_navigation() {
    let mut d = quit_dialog();
    let size = Size::new(20, 2);
    d.keypress(size, key(KeyCode::Right));
    assert_eq!(d.keypress(size, key(KeyCode::Esc)), None);
    assert_eq!(d.take_close(), Some(Outcome::Cancelled));
}

#[test]
fn unknown_keys_propagate() {
    let mut d = quit_dialog();
    let size = Size::new(20, 2);
    let up = key(KeyCode::Up);
    assert_eq!(d.keypress(size, up), Some(up));
    assert_eq!(d.keypress(size, key(KeyCode::Left)), Some(key(KeyCode::Left)));
    assert!(d.result().is_none());
}

#[test]
fn exposes_bound_actions() {
    let d = quit_dialog();
    assert_eq!(
        d.bound_action(&"yes".into()).map(ActionId::as_str),
        Some("quit")
    );
    assert!(d.bound_action(&"no".into()).is_none());
    assert_eq!(d.action_refs().len(), 1);
}
