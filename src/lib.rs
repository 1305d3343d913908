pub mod font;
pub mod render;
pub mod spec;
