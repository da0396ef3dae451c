//! Colors and the dark/light schemes the field is drawn with.

mod color;
mod scheme;

pub use color::Rgba;
pub use scheme::{ColorScheme, Theme};
