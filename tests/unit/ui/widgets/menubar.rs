use super::*;
use slotmap::SlotMap;

fn bar() -> MenuBar {
    let mut bar = MenuBar::new();
    bar.push(
        "file",
        vec![Span::new(Role::MenuShortcut, "F"), Span::new(Role::Menu, "ile")],
    );
    bar.push(
        "edit",
        vec![Span::new(Role::MenuShortcut, "E"), Span::new(Role::Menu, "dit")],
    );
    bar
}

#[test]
fn labels_are_separated_by_one_cell() {
    let bar = bar();
    assert_eq!(bar.label_offset(0), 0);
    assert_eq!(bar.label_offset(1), 5);

    let canvas = bar.render(Size::new(12, 1), false).expect("render");
    assert_eq!(canvas.row_text(0), "File Edit   ");
    assert_eq!(canvas.cell(5, 0).map(|c| c.role), Some(Role::MenuShortcut));
    assert_eq!(canvas.cell(11, 0).map(|c| c.role), Some(Role::Menu));
}

#[test]
fn labels_clip_on_narrow_screens() {
    let canvas = bar().render(Size::new(6, 1), false).expect("render");
    assert_eq!(canvas.row_text(0), "File E");
}

#[test]
fn neighbours_wrap_around() {
    let bar = bar();
    assert_eq!(bar.neighbour(0, true), Some(1));
    assert_eq!(bar.neighbour(1, true), Some(0));
    assert_eq!(bar.neighbour(0, false), Some(1));
    assert_eq!(bar.neighbour(5, true), None);
    assert_eq!(MenuBar::new().neighbour(0, true), None);
}

#[test]
fn launchers_are_looked_up_by_name_and_id() {
    let mut ids: SlotMap<LauncherId, ()> = SlotMap::with_key();
    let file = ids.insert(());

    let mut bar = bar();
    bar.set_launcher(0, file);
    assert_eq!(bar.launcher_for("file"), Some(file));
    assert_eq!(bar.launcher_for("edit"), None);
    assert_eq!(bar.index_of_launcher(file), Some(0));
    assert_eq!(bar.index_of("edit"), Some(1));
}
