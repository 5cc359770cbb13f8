//! Marker types.

/// Marker type describing a moment an entity was detected.
#[derive(Clone, Copy, Debug)]
pub struct Detection;
