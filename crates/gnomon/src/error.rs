//! Error types for layout operations.

use thiserror::Error;

/// The main error type for Gnomon layout operations.
///
/// The engine itself is a pure computation with no I/O failure modes; the
/// only errors are caller contract violations on the track geometry.
/// Malformed intervals are corrected in place (clamped to zero length) and
/// never fail a batch.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("scale must be positive minutes-per-pixel, got {0}")]
    NonPositiveScale(f32),

    #[error("track width must be non-negative, got {0}")]
    NegativeTrackWidth(f32),
}
