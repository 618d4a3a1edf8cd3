//! Window rectangle in viewport coordinates

use serde::{Deserialize, Serialize};

use super::{Size, Vec2};

/// Axis-aligned window rectangle
///
/// Uses CSS-style `top`/`left` offsets so a renderer can apply it to an
/// absolutely positioned element without conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Create from a top-left corner and a size
    pub fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self::new(origin.y, origin.x, size.width, size.height)
    }

    /// Top-left corner as a point (`x = left`, `y = top`)
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// Copy with the size raised to at least `min` and `top` clamped to zero
    pub fn clamped(&self, min: Size) -> Rect {
        let size = self.size().max(min);
        Rect::new(self.top.max(0.0), self.left, size.width, size.height)
    }
}
