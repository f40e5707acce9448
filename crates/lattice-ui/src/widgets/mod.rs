//! Leaf components.

mod image;
mod raw;
mod space;
mod text;

pub use image::{Image, ScaleMode};
pub use raw::Raw;
pub use space::Space;
pub use text::{Text, TextStyle};
