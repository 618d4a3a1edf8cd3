//! Resize handle directions

use serde::{Deserialize, Serialize};

/// One of the eight resize handles around a window frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    /// Top edge
    T,
    /// Bottom edge
    B,
    /// Left edge
    L,
    /// Right edge
    R,
    /// Top-left corner
    Tl,
    /// Top-right corner
    Tr,
    /// Bottom-left corner
    Bl,
    /// Bottom-right corner
    Br,
}

impl ResizeDirection {
    /// All handles, edges first
    pub const ALL: [ResizeDirection; 8] = [
        Self::T,
        Self::B,
        Self::L,
        Self::R,
        Self::Tl,
        Self::Tr,
        Self::Bl,
        Self::Br,
    ];

    /// Parse a handle id as used in the frame markup (`"t"`, `"br"`, ...)
    pub fn from_handle(id: &str) -> Option<Self> {
        match id {
            "t" => Some(Self::T),
            "b" => Some(Self::B),
            "l" => Some(Self::L),
            "r" => Some(Self::R),
            "tl" => Some(Self::Tl),
            "tr" => Some(Self::Tr),
            "bl" => Some(Self::Bl),
            "br" => Some(Self::Br),
            _ => None,
        }
    }

    /// Handle id for this direction
    pub fn handle(&self) -> &'static str {
        match self {
            Self::T => "t",
            Self::B => "b",
            Self::L => "l",
            Self::R => "r",
            Self::Tl => "tl",
            Self::Tr => "tr",
            Self::Bl => "bl",
            Self::Br => "br",
        }
    }

    /// Moves the top edge
    #[inline]
    pub fn top(&self) -> bool {
        matches!(self, Self::T | Self::Tl | Self::Tr)
    }

    /// Moves the bottom edge
    #[inline]
    pub fn bottom(&self) -> bool {
        matches!(self, Self::B | Self::Bl | Self::Br)
    }

    /// Moves the left edge
    #[inline]
    pub fn left(&self) -> bool {
        matches!(self, Self::L | Self::Tl | Self::Bl)
    }

    /// Moves the right edge
    #[inline]
    pub fn right(&self) -> bool {
        matches!(self, Self::R | Self::Tr | Self::Br)
    }
}
