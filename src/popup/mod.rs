//! Popup lifecycle: actions bound to selections, launchers that own a popup
//! while it is open, and the frame that routes input to at most one of them.

pub mod action;
pub mod frame;
pub mod launcher;

pub use action::{Action, ActionId, ActionRegistry, Flow};
pub use frame::{Dispatch, Frame, MenuDef, Target};
pub use launcher::{Closed, Launcher, LauncherId, LauncherState, Placement, PopupSpec};
