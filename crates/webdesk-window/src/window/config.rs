//! Window configuration for creation

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

/// How an app renders its content, which decides its default window size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    /// Built-in app rendered by the desktop itself
    #[default]
    Native,
    /// External page hosted in an iframe
    Iframe,
}

impl AppKind {
    /// Default window size for this kind of app
    pub fn default_size(&self) -> Size {
        match self {
            AppKind::Native => Size::new(600.0, 400.0),
            AppKind::Iframe => Size::new(800.0, 600.0),
        }
    }
}

/// Configuration for creating a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Application identifier
    pub app_id: String,
    /// Content kind
    pub kind: AppKind,
    /// Initial top-left corner (None = cascade)
    pub position: Option<Vec2>,
    /// Initial size (None = default for `kind`)
    pub size: Option<Size>,
}

impl WindowConfig {
    /// Config for an app window with cascade placement and default size
    pub fn app(app_id: &str, title: &str, kind: AppKind) -> Self {
        Self {
            title: title.to_string(),
            app_id: app_id.to_string(),
            kind,
            ..Default::default()
        }
    }
}
