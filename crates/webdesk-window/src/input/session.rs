//! Drag and resize session state

use super::{PreviewChange, ResizeDirection, SnapZone};
use crate::math::{Rect, Vec2};

/// A title-bar drag in progress
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer offset from the window's top-left corner at grab time
    pub grab_offset: Vec2,
    /// Pointer position at pointer-down
    pub pointer_start: Vec2,
    /// Window rect at pointer-down (after any unmaximize/unsnap)
    pub rect_at_start: Rect,
    /// Zone whose preview is currently shown
    pub snap_zone: Option<SnapZone>,
}

impl DragSession {
    /// Start a drag anchored at `rect`
    pub fn new(pointer_start: Vec2, rect: Rect) -> Self {
        Self {
            grab_offset: pointer_start - rect.origin(),
            pointer_start,
            rect_at_start: rect,
            snap_zone: None,
        }
    }

    /// Rect for the current pointer position
    ///
    /// The window's top-left corner stays `grab_offset` away from the pointer.
    /// `top` never goes above the viewport; `left` is unclamped so a window
    /// may be pushed partly off the left edge.
    pub fn rect_at(&self, pointer: Vec2) -> Rect {
        let origin = pointer - self.grab_offset;
        Rect {
            top: origin.y.max(0.0),
            left: origin.x,
            ..self.rect_at_start
        }
    }

    /// Record the zone under the pointer, returning a change only on transitions
    pub fn track_zone(&mut self, zone: Option<SnapZone>) -> Option<PreviewChange> {
        if zone == self.snap_zone {
            return None;
        }
        self.snap_zone = zone;
        Some(match zone {
            Some(zone) => PreviewChange::Show(zone),
            None => PreviewChange::Hide,
        })
    }
}

/// A resize-handle drag in progress
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    /// Which handle was grabbed
    pub direction: ResizeDirection,
    /// Window rect at pointer-down
    pub rect_at_start: Rect,
    /// Pointer position at pointer-down
    pub pointer_start: Vec2,
}

impl ResizeSession {
    /// Start a resize from `rect`
    pub fn new(direction: ResizeDirection, pointer_start: Vec2, rect: Rect) -> Self {
        Self {
            direction,
            rect_at_start: rect,
            pointer_start,
        }
    }
}

/// The single active pointer session of a window
#[derive(Clone, Debug, PartialEq)]
pub enum Session {
    /// Moving the window by its title bar
    Drag(DragSession),
    /// Resizing the window by a frame handle
    Resize(ResizeSession),
}

impl Session {
    /// Check if this is a move operation
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, Session::Drag(_))
    }

    /// Check if this is a resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Session::Resize(_))
    }
}
