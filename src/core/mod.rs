pub mod command;
pub mod error;
pub mod event;
pub mod keymap;

pub use command::Command;
pub use error::{Axis, PopupError};
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers};
pub use keymap::Keymap;
