use super::*;

#[test]
fn names_round_trip_through_parser() {
    for command in [
        Command::Save,
        Command::SaveAs,
        Command::Quit,
        Command::ConfirmQuit,
        Command::ShowHelp,
    ] {
        assert_eq!(Command::from_name(command.name()), command);
    }
}

#[test]
fn open_menu_carries_menu_name() {
    assert_eq!(
        Command::from_name("openMenu: file"),
        Command::OpenMenu("file".into())
    );
}

#[test]
fn unknown_names_become_custom() {
    let command = Command::from_name("reindent");
    assert_eq!(command, Command::Custom("reindent".into()));
    assert_eq!(command.name(), "reindent");
}

#[test]
fn exit_is_an_alias_for_quit() {
    assert_eq!(Command::from_name("exit"), Command::Quit);
}
