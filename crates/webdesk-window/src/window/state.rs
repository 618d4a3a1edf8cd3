//! Window placement state

use serde::{Deserialize, Serialize};

use crate::config::Screen;
use crate::input::SnapZone;
use crate::math::Rect;

/// Half of the screen a window is snapped to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapSide {
    Left,
    Right,
}

impl SnapSide {
    /// Target rect for this side
    pub fn rect(&self, screen: &Screen) -> Rect {
        match self {
            SnapSide::Left => screen.left_half(),
            SnapSide::Right => screen.right_half(),
        }
    }

    /// Side for a snap zone (`None` for the top zone)
    pub fn from_zone(zone: SnapZone) -> Option<Self> {
        match zone {
            SnapZone::Left => Some(SnapSide::Left),
            SnapZone::Right => Some(SnapSide::Right),
            SnapZone::Top => None,
        }
    }
}

/// Placement state of a window
///
/// Exactly one variant holds at a time. `saved` is the free rect captured
/// before the window was maximized or snapped and is restored verbatim on
/// exit. `prior` is never itself `Minimized`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum WindowState {
    /// Free-floating at the controller's current rect
    #[default]
    Free,
    /// Filling the work area
    Maximized { saved: Rect },
    /// Filling half of the work area
    Snapped { side: SnapSide, saved: Rect },
    /// Hidden; `prior` is restored on un-minimize
    Minimized { prior: Box<WindowState> },
}

impl WindowState {
    /// Discrete tag for this state
    pub fn kind(&self) -> StateKind {
        match self {
            WindowState::Free => StateKind::Free,
            WindowState::Maximized { .. } => StateKind::Maximized,
            WindowState::Snapped { side, .. } => StateKind::Snapped(*side),
            WindowState::Minimized { .. } => StateKind::Minimized,
        }
    }

    /// Check if the window is free-floating
    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self, WindowState::Free)
    }

    /// Check if the window is minimized
    #[inline]
    pub fn is_minimized(&self) -> bool {
        matches!(self, WindowState::Minimized { .. })
    }

    /// Maximized or snapped: geometry is dictated by the screen
    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(
            self,
            WindowState::Maximized { .. } | WindowState::Snapped { .. }
        )
    }

    /// Rect that a maximized or snapped window returns to
    pub fn saved_rect(&self) -> Option<Rect> {
        match self {
            WindowState::Maximized { saved } | WindowState::Snapped { saved, .. } => Some(*saved),
            _ => None,
        }
    }
}

/// Discrete state tag emitted alongside every rect change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "side", rename_all = "lowercase")]
pub enum StateKind {
    Free,
    Maximized,
    Snapped(SnapSide),
    Minimized,
}

/// Result of a geometry transition: the rect to paint and the new state tag
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryChange {
    pub rect: Rect,
    pub kind: StateKind,
}
