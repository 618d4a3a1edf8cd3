//! Resize arithmetic

use super::ResizeDirection;
use crate::math::{Rect, Size, Vec2};

/// Compute the rect for one resize tick
///
/// `start` is the rect when the handle was grabbed and `delta` the pointer
/// travel since then. Each axis is gated by its own minimum: when the new
/// width would drop below `min.width`, width and the paired `left` keep
/// their `current` values for this tick while the vertical axis still
/// updates, and vice versa. A top edge dragged above the viewport stops at
/// `top = 0` with the bottom edge pinned.
pub fn calculate_resize(
    direction: ResizeDirection,
    start: Rect,
    current: Rect,
    delta: Vec2,
    min: Size,
) -> Rect {
    let mut rect = current;

    if direction.right() {
        let width = start.width + delta.x;
        if width >= min.width {
            rect.width = width;
        }
    } else if direction.left() {
        let width = start.width - delta.x;
        if width >= min.width {
            rect.width = width;
            rect.left = start.left + delta.x;
        }
    }

    if direction.bottom() {
        let height = start.height + delta.y;
        if height >= min.height {
            rect.height = height;
        }
    } else if direction.top() {
        let top = (start.top + delta.y).max(0.0);
        let height = start.bottom() - top;
        if height >= min.height {
            rect.height = height;
            rect.top = top;
        }
    }

    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(250.0, 150.0);

    fn start() -> Rect {
        Rect::new(100.0, 100.0, 600.0, 400.0)
    }

    #[test]
    fn test_resize_right_grows() {
        let r = calculate_resize(ResizeDirection::R, start(), start(), Vec2::new(50.0, 30.0), MIN);
        assert_eq!(r, Rect::new(100.0, 100.0, 650.0, 400.0));
    }

    #[test]
    fn test_resize_left_moves_origin() {
        let r = calculate_resize(ResizeDirection::L, start(), start(), Vec2::new(-40.0, 0.0), MIN);
        assert_eq!(r, Rect::new(100.0, 60.0, 640.0, 400.0));
        assert_eq!(r.right(), start().right());
    }

    #[test]
    fn test_resize_bottom_and_top() {
        let r = calculate_resize(ResizeDirection::B, start(), start(), Vec2::new(0.0, 25.0), MIN);
        assert_eq!(r, Rect::new(100.0, 100.0, 600.0, 425.0));

        let r = calculate_resize(ResizeDirection::T, start(), start(), Vec2::new(0.0, 25.0), MIN);
        assert_eq!(r, Rect::new(125.0, 100.0, 600.0, 375.0));
    }

    #[test]
    fn test_resize_right_underflow_keeps_width_and_left() {
        // First tick lands exactly on the minimum
        let at_min = calculate_resize(ResizeDirection::R, start(), start(), Vec2::new(-350.0, 0.0), MIN);
        assert_eq!(at_min.width, MIN.width);

        // Overshooting keeps the last accepted width
        let r = calculate_resize(ResizeDirection::R, start(), at_min, Vec2::new(-1000.0, 0.0), MIN);
        assert_eq!(r.width, MIN.width);
        assert_eq!(r.left, start().left);
    }

    #[test]
    fn test_resize_corner_axes_independent() {
        // dx would shrink width to 150 (< 250), dy keeps height at 300 (>= 150)
        let r = calculate_resize(
            ResizeDirection::Tl,
            start(),
            start(),
            Vec2::new(450.0, 100.0),
            MIN,
        );
        assert_eq!(r.width, 600.0);
        assert_eq!(r.left, 100.0);
        assert_eq!(r.height, 300.0);
        assert_eq!(r.top, 200.0);
    }

    #[test]
    fn test_resize_top_stops_at_viewport_edge() {
        let r = calculate_resize(ResizeDirection::T, start(), start(), Vec2::new(0.0, -300.0), MIN);
        assert_eq!(r.top, 0.0);
        assert_eq!(r.bottom(), start().bottom());
    }
}
