//! Window geometry and management
//!
//! [`WindowGeometryController`] is the per-window state machine;
//! [`WindowManager`] owns the open windows and handles focus and z-order.

mod config;
mod controller;
mod manager;
mod state;

pub use config::{AppKind, WindowConfig};
pub use controller::{DragEnd, DragUpdate, WindowGeometryController};
pub use manager::{Activation, ManagedWindow, WindowManager};
pub use state::{GeometryChange, SnapSide, StateKind, WindowState};

pub use crate::types::WindowId;
