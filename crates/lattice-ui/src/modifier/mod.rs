//! Single-child modifier components.
//!
//! Each modifier transforms the constraint handed to its child and/or
//! re-derives the reported size around the child's result.

mod align;
mod aspect;
mod half;
mod inset;

pub use align::Align;
pub use aspect::AspectFit;
pub use half::HalfHeight;
pub use inset::Inset;
