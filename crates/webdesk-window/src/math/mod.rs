//! Core geometry types for window placement
//!
//! Pointer positions are [`Vec2`], viewport dimensions are [`Size`], and a
//! window's on-screen box is a [`Rect`] expressed as top/left offsets within
//! the desktop viewport.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
