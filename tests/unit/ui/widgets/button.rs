use super::*;

fn ok_gotcha() -> ButtonRow {
    ButtonRow::new(vec![Button::new("ok", "OK"), Button::new("yes", "Gotcha")])
}

#[test]
fn button_width_includes_chrome() {
    assert_eq!(Button::new("yes", "Yes").width(), 7);
    assert_eq!(Button::new("saveas", "Save As").width(), 11);
}

#[test]
fn button_activates_on_enter_and_space() {
    let mut b = Button::new("ok", "OK");
    let size = Size::new(6, 1);
    assert_eq!(b.keypress(size, Key::simple(KeyCode::Enter)), None);
    assert_eq!(b.keypress(size, Key::simple(KeyCode::Char(' '))), None);
    let esc = Key::simple(KeyCode::Esc);
    assert_eq!(b.keypress(size, esc), Some(esc));
}

#[test]
fn button_renders_caption_in_focus_role() {
    let b = Button::new("ok", "OK");
    let canvas = b.render(Size::new(8, 1), true).expect("render");
    assert_eq!(canvas.row_text(0), "< OK >  ");
    assert_eq!(canvas.cell(0, 0).map(|c| c.role), Some(Role::PopupFocus));
    assert_eq!(canvas.cell(5, 0).map(|c| c.role), Some(Role::PopupFocus));
    assert_eq!(canvas.cell(6, 0).map(|c| c.role), Some(Role::Popup));
    assert_eq!(canvas.cell(7, 0).map(|c| c.role), Some(Role::Popup));
}

#[test]
fn row_width_sums_buttons_and_gaps() {
    // (2 + 5) + (6 + 5) - 1
    assert_eq!(ok_gotcha().width(), 17);
    assert_eq!(ButtonRow::new(Vec::new()).width(), 0);
}

#[test]
fn row_focus_moves_and_stops_at_edges() {
    let mut row = ok_gotcha();
    let left = Key::simple(KeyCode::Left);
    let right = Key::simple(KeyCode::Right);

    assert_eq!(row.keypress(left), RowEvent::Unhandled(left));
    assert_eq!(row.keypress(right), RowEvent::Moved);
    assert_eq!(row.focused().map(|b| b.label()), Some("Gotcha"));
    assert_eq!(row.keypress(right), RowEvent::Unhandled(right));
    assert_eq!(row.keypress(Key::simple(KeyCode::Enter)), RowEvent::Activated(1));
}

#[test]
fn row_renders_buttons_from_the_left() {
    let mut row = ok_gotcha();
    row.keypress(Key::simple(KeyCode::Right));
    let canvas = row.render_row(20, true);
    assert_eq!(canvas.row_text(0), "< OK > < Gotcha >   ");
    assert_eq!(canvas.cell(0, 0).map(|c| c.role), Some(Role::Popup));
    assert_eq!(canvas.cell(7, 0).map(|c| c.role), Some(Role::PopupFocus));
}

#[test]
fn empty_row_hands_keys_back() {
    let mut row = ButtonRow::new(Vec::new());
    let enter = Key::simple(KeyCode::Enter);
    assert_eq!(row.keypress(enter), RowEvent::Unhandled(enter));
}
