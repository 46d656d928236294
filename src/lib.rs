//! ism - modal popups for terminal applications
//!
//! Module layout:
//! - core: events, hot-key table, commands, errors
//! - ui: canvas primitives, overlay compositor, widgets, rendering backends
//! - popup: actions, launchers, the frame that owns input dispatch
//! - app: settings, the editor collaborator, the main frame and event loop
//! - tui: crossterm conversion and terminal setup/restore (feature `tui`)

pub mod app;
pub mod core;
pub mod popup;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
