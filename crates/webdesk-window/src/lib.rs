//! Window Geometry for WebDesk
//!
//! This crate provides the window-management core of the WebDesk browser
//! desktop:
//! - Per-window geometry state machine (free, maximized, snapped, minimized)
//! - Title-bar drag with Aero snap preview and commit
//! - Eight-handle resize with per-axis minimum size gating
//! - Window manager for focus, z-order, and taskbar activation
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`config`]: Geometry limits and screen description
//! - [`input`]: Drag/resize sessions, resize arithmetic, snap zones
//! - [`window`]: Geometry controller and window manager
//!
//! Rendering is out of scope: every operation returns the rect and state tag
//! to paint, plus edge-triggered snap preview changes.
//!
//! ## Example
//!
//! ```rust
//! use webdesk_window::{
//!     AppKind, PreviewChange, Screen, SnapZone, StateKind, Vec2, WindowConfig, WindowManager,
//! };
//!
//! let screen = Screen::new(1920.0, 1080.0, 48.0);
//! let mut wm = WindowManager::new();
//! let (id, _) = wm.create(WindowConfig::app("notepad", "Notepad", AppKind::Native));
//!
//! let geometry = wm.get_mut(id).unwrap().geometry_mut();
//! geometry.begin_drag(Vec2::new(150.0, 60.0));
//! let tick = geometry.update_drag(Vec2::new(900.0, 4.0), &screen).unwrap();
//! assert_eq!(tick.preview, Some(PreviewChange::Show(SnapZone::Top)));
//!
//! let end = geometry.end_drag(Vec2::new(900.0, 0.0), &screen).unwrap();
//! assert_eq!(end.change.kind, StateKind::Maximized);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod window;

mod types;

pub use config::{GeometryConfig, Screen};
pub use error::{DesktopError, DesktopResult};
pub use input::{DragSession, PreviewChange, ResizeDirection, ResizeSession, Session, SnapZone};
pub use math::{Rect, Size, Vec2};
pub use types::WindowId;
pub use window::{
    Activation, AppKind, DragEnd, DragUpdate, GeometryChange, ManagedWindow, SnapSide, StateKind,
    WindowConfig, WindowGeometryController, WindowManager, WindowState,
};
