pub mod canvas;
pub mod geom;
pub mod layout;
pub mod palette;
pub mod style;
pub mod text;
