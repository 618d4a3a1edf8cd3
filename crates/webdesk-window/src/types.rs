//! Core type definitions shared across the crate

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer,
/// unique within a `WindowManager` instance.
pub type WindowId = u64;
