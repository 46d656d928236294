pub mod button;
pub mod dialog;
pub mod menu;
pub mod menubar;
pub mod text;
