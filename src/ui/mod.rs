pub mod braille;
pub mod render;
pub mod viewport;

pub use render::{render, Theme};
pub use viewport::Viewport;
