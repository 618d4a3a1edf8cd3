//! Aero snap zones

use serde::{Deserialize, Serialize};

use crate::config::Screen;
use crate::math::{Rect, Vec2};

/// Screen edge a dragged window can snap to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapZone {
    /// Top edge (maximize)
    Top,
    /// Left edge (left half)
    Left,
    /// Right edge (right half)
    Right,
}

impl SnapZone {
    /// Zone under `pointer` when within `distance` of an edge
    ///
    /// Top wins over left, left over right. The same rule serves both the
    /// preview threshold during a drag and the commit edge on release.
    pub fn at(pointer: Vec2, screen_width: f32, distance: f32) -> Option<Self> {
        if pointer.y <= distance {
            Some(Self::Top)
        } else if pointer.x <= distance {
            Some(Self::Left)
        } else if pointer.x >= screen_width - distance {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Overlay rect previewing where the window would land
    pub fn preview_rect(&self, screen: &Screen) -> Rect {
        match self {
            Self::Top => screen.work_area(),
            Self::Left => screen.left_half(),
            Self::Right => screen.right_half(),
        }
    }
}

/// Edge-triggered change to the snap preview overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "zone", rename_all = "lowercase")]
pub enum PreviewChange {
    /// Show (or move) the overlay for a zone
    Show(SnapZone),
    /// Hide the overlay
    Hide,
}
