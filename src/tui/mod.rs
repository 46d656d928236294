//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `core`, `ui` and `popup` so those build and test without
//! terminal crates.

pub mod crossterm;
pub mod terminal_guard;
