//! Semantic commands bound to hot-keys.
//!
//! The hot-key table maps physical keys to these values; the frame maps them
//! to a launcher or an action. Neither side knows about the other's keys.

use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Save,
    SaveAs,
    /// Leave the main loop without asking.
    Quit,
    /// Ask before leaving.
    ConfirmQuit,
    ShowHelp,
    OpenMenu(CompactString),
    Custom(CompactString),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Quit => "quit",
            Command::ConfirmQuit => "confirmQuit",
            Command::ShowHelp => "showHelp",
            Command::OpenMenu(_) => "openMenu",
            Command::Custom(name) => name,
        }
    }

    /// Parses a command name from configuration.
    ///
    /// `openMenu:<name>` selects a menubar menu; unknown names become
    /// [`Command::Custom`].
    pub fn from_name(value: &str) -> Self {
        let v = value.trim();
        if let Some(menu) = v.strip_prefix("openMenu:") {
            return Command::OpenMenu(menu.trim().into());
        }
        match v {
            "save" => Command::Save,
            "saveAs" => Command::SaveAs,
            "quit" | "exit" => Command::Quit,
            "confirmQuit" => Command::ConfirmQuit,
            "showHelp" | "help" => Command::ShowHelp,
            other => Command::Custom(other.into()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
