//! Window manager: open windows, focus, and z-order
//!
//! The manager is an explicit service object handed to whoever needs it.
//! Geometry controllers know nothing about it; the manager only calls their
//! transition methods and tears down their sessions on focus changes.

use std::collections::HashMap;

use tracing::debug;

use super::config::WindowConfig;
use super::controller::WindowGeometryController;
use super::state::GeometryChange;
use super::WindowId;
use crate::config::GeometryConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::input::PreviewChange;
use crate::math::{Rect, Vec2};

/// Cascade step between consecutively opened windows
const CASCADE_STEP: f32 = 30.0;

/// Number of cascade steps before wrapping back to the origin
const CASCADE_WRAP: usize = 10;

/// Cascade origin (left, top) for the first window
const CASCADE_ORIGIN: Vec2 = Vec2::new(100.0, 50.0);

/// An open window
#[derive(Clone, Debug)]
pub struct ManagedWindow {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Application identifier
    pub app_id: String,
    /// Stacking order (higher = on top)
    pub z_order: u32,
    geometry: WindowGeometryController,
}

impl ManagedWindow {
    /// Geometry state machine
    #[inline]
    pub fn geometry(&self) -> &WindowGeometryController {
        &self.geometry
    }

    /// Geometry state machine, for driving drags and transitions
    #[inline]
    pub fn geometry_mut(&mut self) -> &mut WindowGeometryController {
        &mut self.geometry
    }

    /// Check if the window is minimized
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.geometry.state().is_minimized()
    }
}

/// Outcome of a focus-changing operation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Activation {
    /// Geometry transition of the target window, if its state changed
    pub change: Option<GeometryChange>,
    /// Snap preview change from a torn-down drag
    pub preview: Option<PreviewChange>,
}

/// Manages all open windows
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    windows: HashMap<WindowId, ManagedWindow>,
    next_id: WindowId,
    next_z: u32,
    active: Option<WindowId>,
    config: GeometryConfig,
}

impl WindowManager {
    /// Create a manager with default geometry limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose windows use `config`
    pub fn with_config(config: GeometryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Open a window and focus it
    ///
    /// Any drag or resize on the previously active window is torn down;
    /// the returned change, if any, hides its snap preview.
    pub fn create(&mut self, config: WindowConfig) -> (WindowId, Option<PreviewChange>) {
        self.next_id += 1;
        let id = self.next_id;

        let position = config.position.unwrap_or_else(|| self.cascade_position());
        let size = config.size.unwrap_or_else(|| config.kind.default_size());
        let geometry =
            WindowGeometryController::new(Rect::from_origin_size(position, size), self.config);

        debug!(id, app_id = %config.app_id, rect = ?geometry.rect(), "window created");
        self.windows.insert(
            id,
            ManagedWindow {
                id,
                title: config.title,
                app_id: config.app_id,
                z_order: 0,
                geometry,
            },
        );
        let preview = self.release_active();
        self.raise(id);
        (id, preview)
    }

    /// Open an app, reusing its existing window if there is one
    ///
    /// An existing window is restored if minimized and focused.
    pub fn open_app(&mut self, config: WindowConfig) -> DesktopResult<(WindowId, Activation)> {
        let existing = self
            .windows
            .values()
            .filter(|w| w.app_id == config.app_id)
            .map(|w| w.id)
            .min();

        match existing {
            Some(id) => Ok((id, self.restore(id)?)),
            None => {
                let (id, preview) = self.create(config);
                Ok((
                    id,
                    Activation {
                        change: None,
                        preview,
                    },
                ))
            }
        }
    }

    /// Close a window, focusing the next one if it was active
    pub fn close(&mut self, id: WindowId) -> DesktopResult<()> {
        self.windows
            .remove(&id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        debug!(id, "window closed");

        if self.active == Some(id) {
            self.active = None;
            self.focus_next();
        }
        Ok(())
    }

    /// Focus a window and bring it to the top
    ///
    /// Any drag or resize on the previously active window is torn down;
    /// the returned change, if any, hides its snap preview.
    pub fn focus(&mut self, id: WindowId) -> DesktopResult<Option<PreviewChange>> {
        if !self.windows.contains_key(&id) {
            return Err(DesktopError::WindowNotFound(id));
        }
        if self.active == Some(id) {
            return Ok(None);
        }

        let preview = self.release_active();
        self.raise(id);
        Ok(preview)
    }

    /// Minimize a window, focusing the next one if it was active
    ///
    /// A drag or resize on the window is torn down first.
    pub fn minimize(&mut self, id: WindowId) -> DesktopResult<Activation> {
        let window = self.get_mut_or_err(id)?;
        let preview = window.geometry.cancel_session();
        let change = window.geometry.minimize();

        if change.is_some() && self.active == Some(id) {
            self.active = None;
            self.focus_next();
        }
        Ok(Activation { change, preview })
    }

    /// Un-minimize a window (if minimized) and focus it
    pub fn restore(&mut self, id: WindowId) -> DesktopResult<Activation> {
        let change = self.get_mut_or_err(id)?.geometry.restore();
        let preview = self.focus(id)?;
        Ok(Activation { change, preview })
    }

    /// Taskbar button behaviour: restore if minimized, minimize if active,
    /// otherwise focus
    pub fn activate_from_taskbar(&mut self, id: WindowId) -> DesktopResult<Activation> {
        let minimized = self.get_or_err(id)?.is_minimized();
        if minimized {
            self.restore(id)
        } else if self.active == Some(id) {
            self.minimize(id)
        } else {
            let preview = self.focus(id)?;
            Ok(Activation {
                change: None,
                preview,
            })
        }
    }

    /// The desktop lost focus: tear down every pointer session
    ///
    /// Returns the windows whose snap preview must be hidden.
    pub fn blur(&mut self) -> Vec<(WindowId, PreviewChange)> {
        let mut hidden: Vec<_> = self
            .windows
            .values_mut()
            .filter_map(|w| w.geometry.cancel_session().map(|p| (w.id, p)))
            .collect();
        hidden.sort_by_key(|(id, _)| *id);
        hidden
    }

    /// Get a window
    pub fn get(&self, id: WindowId) -> Option<&ManagedWindow> {
        self.windows.get(&id)
    }

    /// Get a window mutably
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut ManagedWindow> {
        self.windows.get_mut(&id)
    }

    /// Active (focused) window
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// All windows, bottom to top
    pub fn windows_by_z(&self) -> Vec<&ManagedWindow> {
        let mut windows: Vec<_> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Tear down any session on the active window
    fn release_active(&mut self) -> Option<PreviewChange> {
        self.active
            .and_then(|prev| self.windows.get_mut(&prev))
            .and_then(|prev| prev.geometry.cancel_session())
    }

    fn get_or_err(&self, id: WindowId) -> DesktopResult<&ManagedWindow> {
        self.windows.get(&id).ok_or(DesktopError::WindowNotFound(id))
    }

    fn get_mut_or_err(&mut self, id: WindowId) -> DesktopResult<&mut ManagedWindow> {
        self.windows
            .get_mut(&id)
            .ok_or(DesktopError::WindowNotFound(id))
    }

    /// Put a window on top and make it active
    fn raise(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            self.next_z += 1;
            window.z_order = self.next_z;
            self.active = Some(id);
            debug!(id, z = self.next_z, "window focused");
        }
    }

    /// Focus the topmost visible window, if any
    fn focus_next(&mut self) {
        let next = self
            .windows
            .values()
            .filter(|w| !w.is_minimized())
            .max_by_key(|w| w.z_order)
            .map(|w| w.id);
        if let Some(id) = next {
            self.raise(id);
        }
    }

    fn cascade_position(&self) -> Vec2 {
        let step = (self.windows.len() % CASCADE_WRAP) as f32 * CASCADE_STEP;
        CASCADE_ORIGIN + Vec2::new(step, step)
    }
}
