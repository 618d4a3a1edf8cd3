//! Pointer interaction sessions
//!
//! A drag or resize is an explicit [`Session`] value owned by the window's
//! geometry controller, created on pointer-down and dropped on pointer-up or
//! focus loss. Nothing here depends on a particular input-event API; the
//! same sessions are driven by mouse, touch, or synthetic test events.

mod direction;
mod resize;
mod session;
mod snap;

pub use direction::ResizeDirection;
pub use resize::calculate_resize;
pub use session::{DragSession, ResizeSession, Session};
pub use snap::{PreviewChange, SnapZone};
