//! Engine configuration types.
//!
//! [`TrackConfig`] carries the renderer-facing knobs (zoom level and track
//! width) in a deserializable form. File loading lives in the CLI crate;
//! library consumers construct the config directly or embed it in their own
//! configuration structures.

use serde::Deserialize;

use gnomon_core::Timestamp;

use crate::error::LayoutError;
use crate::layout::Track;

/// Declarative track geometry, typically read from a TOML section.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Zoom level in minutes per pixel.
    pub minutes_per_pixel: f32,
    /// Width of one day column.
    pub track_width: f32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            // One pixel per minute, a 320-unit day column.
            minutes_per_pixel: 1.0,
            track_width: 320.0,
        }
    }
}

impl TrackConfig {
    /// Builds a validated [`Track`] anchored at `day_start`.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] when the configured scale or width violate
    /// the geometry contract.
    pub fn track(&self, day_start: Timestamp) -> Result<Track, LayoutError> {
        Track::new(day_start, self.minutes_per_pixel, self.track_width)
    }
}
