//! UI layer: canvas primitives, the overlay compositor, widgets and rendering
//! backends.
//!
//! Widgets only ever produce [`core::canvas::Canvas`] values; backends are the
//! single place where canvases meet a terminal.

pub mod backend;
pub mod core;
pub mod overlay;
pub mod widget;
pub mod widgets;
