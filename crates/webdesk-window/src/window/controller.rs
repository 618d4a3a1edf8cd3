//! Per-window geometry state machine
//!
//! [`WindowGeometryController`] owns one window's rect and placement state.
//! Every mutation goes through a transition method that either returns the
//! new rect and state tag for the renderer to paint, or `None` when the
//! transition is not allowed in the current state. Rejected transitions are
//! silent: callers are expected to gate their affordances (no resize handles
//! on a maximized window, and so on).

use tracing::{debug, trace};

use super::state::{GeometryChange, SnapSide, StateKind, WindowState};
use crate::config::{GeometryConfig, Screen};
use crate::input::{
    calculate_resize, DragSession, PreviewChange, ResizeDirection, ResizeSession, Session,
    SnapZone,
};
use crate::math::{Rect, Vec2};

/// Rect update produced by a drag tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    /// Rect to paint
    pub rect: Rect,
    /// Snap preview change, reported only when the zone under the pointer changes
    pub preview: Option<PreviewChange>,
}

/// Outcome of releasing a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd {
    /// Committed rect and state
    pub change: GeometryChange,
    /// Always [`PreviewChange::Hide`]: the overlay is cleared whatever the outcome
    pub preview: PreviewChange,
}

/// Geometry state machine for a single window
#[derive(Clone, Debug)]
pub struct WindowGeometryController {
    rect: Rect,
    state: WindowState,
    session: Option<Session>,
    config: GeometryConfig,
}

impl WindowGeometryController {
    /// Create a free window at `rect`
    ///
    /// The rect is raised to the configured minimum size and its top is
    /// clamped to the viewport.
    pub fn new(rect: Rect, config: GeometryConfig) -> Self {
        Self {
            rect: rect.clamped(config.min_size()),
            state: WindowState::Free,
            session: None,
            config,
        }
    }

    /// Rebuild a controller from previously emitted geometry
    ///
    /// `rect` is taken as-is for maximized and snapped windows, whose size is
    /// dictated by the screen. Nested minimized states are flattened.
    pub fn from_parts(rect: Rect, state: WindowState, config: GeometryConfig) -> Self {
        let state = match state {
            WindowState::Minimized { prior } => WindowState::Minimized {
                prior: Box::new(unwrap_minimized(*prior)),
            },
            other => other,
        };
        let rect = match &state {
            WindowState::Free => rect.clamped(config.min_size()),
            WindowState::Minimized { prior } if prior.is_free() => rect.clamped(config.min_size()),
            _ => rect,
        };
        Self {
            rect,
            state,
            session: None,
            config,
        }
    }

    /// Current rect
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Current placement state
    #[inline]
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    /// Current state tag
    #[inline]
    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Geometry limits in effect
    #[inline]
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Active pointer session, if any
    #[inline]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Check if a title-bar drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_drag)
    }

    /// Check if a resize is in progress
    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_resize)
    }

    /// Current rect and state tag
    pub fn snapshot(&self) -> GeometryChange {
        GeometryChange {
            rect: self.rect,
            kind: self.kind(),
        }
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Start a title-bar drag at `pointer`
    ///
    /// A maximized or snapped window is first returned to its saved free
    /// size, positioned so the pointer keeps its offset into the window.
    /// When the restored window is too small to keep that offset on an axis,
    /// the offset is scaled proportionally so the pointer stays over the
    /// window. Rejected while minimized or while another session is active.
    pub fn begin_drag(&mut self, pointer: Vec2) -> Option<GeometryChange> {
        if self.session.is_some() || self.state.is_minimized() {
            return None;
        }

        let current = self.rect;
        if let Some(restored) = self.unfreeze() {
            let grab = pointer - current.origin();
            let offset = Vec2::new(
                keep_offset(grab.x, current.width, restored.width),
                keep_offset(grab.y, current.height, restored.height),
            );
            let origin = pointer - offset;
            self.rect = Rect {
                top: origin.y.max(0.0),
                left: origin.x,
                ..restored
            };
            debug!(rect = ?self.rect, "window unfrozen by drag");
        }

        self.session = Some(Session::Drag(DragSession::new(pointer, self.rect)));
        Some(self.snapshot())
    }

    /// Move the window to follow `pointer`
    pub fn update_drag(&mut self, pointer: Vec2, screen: &Screen) -> Option<DragUpdate> {
        let threshold = self.config.snap_threshold;
        let Some(Session::Drag(drag)) = self.session.as_mut() else {
            return None;
        };

        let rect = drag.rect_at(pointer);
        let preview = drag.track_zone(SnapZone::at(pointer, screen.width(), threshold));
        self.rect = rect;
        trace!(?rect, ?preview, "drag tick");

        Some(DragUpdate { rect, preview })
    }

    /// Release the drag at `pointer` and commit any snap
    ///
    /// The commit looks only at the release position against the commit
    /// edge, not at the last previewed zone. A committed snap or maximize
    /// saves the free rect the drag started from.
    pub fn end_drag(&mut self, pointer: Vec2, screen: &Screen) -> Option<DragEnd> {
        let drag = match self.session.take() {
            Some(Session::Drag(drag)) => drag,
            other => {
                self.session = other;
                return None;
            }
        };

        match SnapZone::at(pointer, screen.width(), self.config.commit_edge) {
            Some(zone) => {
                // Restoring later returns to where the drag started
                self.rect = drag.rect_at_start;
                match SnapSide::from_zone(zone) {
                    Some(side) => self.snap_free(side, screen),
                    None => self.maximize(screen),
                }
            }
            None => {
                self.rect = drag.rect_at(pointer);
                debug!(rect = ?self.rect, "drag released");
            }
        }

        Some(DragEnd {
            change: self.snapshot(),
            preview: PreviewChange::Hide,
        })
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Start resizing from the `direction` handle
    ///
    /// Returns `false` (and does nothing) unless the window is free and idle.
    pub fn begin_resize(&mut self, direction: ResizeDirection, pointer: Vec2) -> bool {
        if self.session.is_some() || !self.state.is_free() {
            trace!(?direction, state = ?self.kind(), "resize rejected");
            return false;
        }
        self.session = Some(Session::Resize(ResizeSession::new(
            direction, pointer, self.rect,
        )));
        true
    }

    /// Resize to follow `pointer`
    pub fn update_resize(&mut self, pointer: Vec2) -> Option<Rect> {
        let Some(Session::Resize(resize)) = self.session.as_ref() else {
            return None;
        };

        let delta = pointer - resize.pointer_start;
        self.rect = calculate_resize(
            resize.direction,
            resize.rect_at_start,
            self.rect,
            delta,
            self.config.min_size(),
        );
        trace!(rect = ?self.rect, "resize tick");
        Some(self.rect)
    }

    /// Finish the resize; the window stays free
    pub fn end_resize(&mut self) -> bool {
        if self.is_resizing() {
            self.session = None;
            debug!(rect = ?self.rect, "resize released");
            true
        } else {
            false
        }
    }

    /// Tear down any session after focus loss
    ///
    /// The window stays at its last applied rect and no snap is committed.
    /// Returns [`PreviewChange::Hide`] if a snap preview was showing.
    pub fn cancel_session(&mut self) -> Option<PreviewChange> {
        let session = self.session.take()?;
        debug!(drag = session.is_drag(), "session cancelled");
        match session {
            Session::Drag(DragSession {
                snap_zone: Some(_), ..
            }) => Some(PreviewChange::Hide),
            _ => None,
        }
    }

    // =========================================================================
    // State transitions
    // =========================================================================

    /// Maximize, or restore a maximized window
    ///
    /// A snapped window is unsnapped before maximizing, so the saved rect is
    /// always the free geometry.
    pub fn toggle_maximize(&mut self, screen: &Screen) -> Option<GeometryChange> {
        if !self.accepts_transition() {
            return None;
        }
        match self.state {
            WindowState::Maximized { saved } => {
                self.rect = saved;
                self.state = WindowState::Free;
                debug!(rect = ?self.rect, "window restored from maximized");
            }
            _ => {
                self.unfreeze();
                self.maximize(screen);
            }
        }
        Some(self.snapshot())
    }

    /// Snap to one half of the screen
    ///
    /// Switching sides keeps the rect saved before the first snap.
    pub fn snap(&mut self, side: SnapSide, screen: &Screen) -> Option<GeometryChange> {
        if !self.accepts_transition() {
            return None;
        }
        match self.state {
            WindowState::Snapped { saved, .. } => {
                self.rect = side.rect(screen);
                self.state = WindowState::Snapped { side, saved };
                debug!(?side, "window switched snap side");
            }
            _ => {
                self.unfreeze();
                self.snap_free(side, screen);
            }
        }
        Some(self.snapshot())
    }

    /// Hide the window, remembering its state; geometry is untouched
    pub fn minimize(&mut self) -> Option<GeometryChange> {
        if !self.accepts_transition() {
            return None;
        }
        let prior = std::mem::take(&mut self.state);
        self.state = WindowState::Minimized {
            prior: Box::new(prior),
        };
        debug!("window minimized");
        Some(self.snapshot())
    }

    /// Bring a minimized window back in exactly its prior state
    pub fn restore(&mut self) -> Option<GeometryChange> {
        if self.session.is_some() || !self.state.is_minimized() {
            return None;
        }
        if let WindowState::Minimized { prior } = std::mem::take(&mut self.state) {
            self.state = *prior;
        }
        debug!(state = ?self.kind(), "window restored from minimized");
        Some(self.snapshot())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Idle and visible
    fn accepts_transition(&self) -> bool {
        self.session.is_none() && !self.state.is_minimized()
    }

    /// Return a maximized or snapped window to its saved rect
    fn unfreeze(&mut self) -> Option<Rect> {
        let saved = self.state.saved_rect()?;
        self.rect = saved;
        self.state = WindowState::Free;
        Some(saved)
    }

    /// Free → Maximized
    fn maximize(&mut self, screen: &Screen) {
        debug_assert!(self.state.is_free());
        let saved = self.rect;
        self.rect = screen.work_area();
        self.state = WindowState::Maximized { saved };
        debug!(?saved, "window maximized");
    }

    /// Free → Snapped
    fn snap_free(&mut self, side: SnapSide, screen: &Screen) {
        debug_assert!(self.state.is_free());
        let saved = self.rect;
        self.rect = side.rect(screen);
        self.state = WindowState::Snapped { side, saved };
        debug!(?side, ?saved, "window snapped");
    }
}

/// Keep a grab offset if it fits within `to`, otherwise scale it from `from`
fn keep_offset(offset: f32, from: f32, to: f32) -> f32 {
    if offset < to || from <= 0.0 {
        offset
    } else {
        offset * to / from
    }
}

fn unwrap_minimized(state: WindowState) -> WindowState {
    match state {
        WindowState::Minimized { prior } => unwrap_minimized(*prior),
        other => other,
    }
}
