pub mod font;
pub mod render;
