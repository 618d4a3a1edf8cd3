//! Geometry configuration and screen description

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size};

/// Minimum window width in pixels
pub const MIN_WIN_WIDTH: f32 = 250.0;

/// Minimum window height in pixels
pub const MIN_WIN_HEIGHT: f32 = 150.0;

/// Distance from a screen edge that shows a snap preview while dragging
pub const SNAP_THRESHOLD: f32 = 15.0;

/// Distance from a screen edge that commits a snap on release
pub const SNAP_COMMIT_EDGE: f32 = 1.0;

/// Tunable geometry limits
///
/// Every field has a default, so a partial JSON document such as
/// `{"snap_threshold": 20}` is a valid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Smallest width a free window may be resized to
    pub min_width: f32,
    /// Smallest height a free window may be resized to
    pub min_height: f32,
    /// Preview trigger distance from the top/left/right edges
    pub snap_threshold: f32,
    /// Commit distance from the top/left/right edges on pointer release
    pub commit_edge: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WIN_WIDTH,
            min_height: MIN_WIN_HEIGHT,
            snap_threshold: SNAP_THRESHOLD,
            commit_edge: SNAP_COMMIT_EDGE,
        }
    }
}

impl GeometryConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Minimum window size
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Check that the limits are usable
    pub fn validate(&self) -> DesktopResult<()> {
        if !(self.min_width > 0.0) {
            return Err(DesktopError::InvalidConfig {
                field: "min_width",
                reason: "must be positive",
            });
        }
        if !(self.min_height > 0.0) {
            return Err(DesktopError::InvalidConfig {
                field: "min_height",
                reason: "must be positive",
            });
        }
        if !(self.commit_edge >= 0.0) {
            return Err(DesktopError::InvalidConfig {
                field: "commit_edge",
                reason: "must not be negative",
            });
        }
        if self.snap_threshold < self.commit_edge {
            return Err(DesktopError::InvalidConfig {
                field: "snap_threshold",
                reason: "must be at least commit_edge",
            });
        }
        Ok(())
    }
}

/// The desktop viewport a window lives in
///
/// Supplied by the rendering layer on every operation that depends on
/// screen dimensions, so a browser resize needs no extra bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Viewport size in pixels
    pub size: Size,
    /// Height of the taskbar docked at the bottom of the viewport
    pub taskbar_height: f32,
}

impl Screen {
    /// Create a screen description
    pub const fn new(width: f32, height: f32, taskbar_height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            taskbar_height,
        }
    }

    /// Viewport width
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height available to windows (viewport minus taskbar)
    #[inline]
    pub fn work_height(&self) -> f32 {
        self.size.height - self.taskbar_height
    }

    /// Full work area, used for maximized windows
    pub fn work_area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.work_height())
    }

    /// Left half of the work area
    pub fn left_half(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() / 2.0, self.work_height())
    }

    /// Right half of the work area
    pub fn right_half(&self) -> Rect {
        let half = self.width() / 2.0;
        Rect::new(0.0, half, half, self.work_height())
    }
}
