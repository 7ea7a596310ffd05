//! The day track: reference frame and scale for geometry mapping.

use gnomon_core::{Frame, Interval, Timestamp};

use crate::error::LayoutError;
use crate::layout::{EventLayout, layout_on_track};

/// Rendering context for one day column.
///
/// Replaces the original system's app-wide view-model state with an explicit
/// value owned by whichever component renders the day. All geometry mapping
/// is pure arithmetic over this context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    day_start: Timestamp,
    /// Zoom level: how many minutes one pixel covers.
    minutes_per_pixel: f32,
    width: f32,
}

impl Track {
    /// Creates a track, validating the geometry contract.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NonPositiveScale`] unless `minutes_per_pixel`
    /// is positive, and [`LayoutError::NegativeTrackWidth`] for a negative
    /// `width`. A zero-width track is legal and collapses every frame to
    /// zero width.
    pub fn new(
        day_start: Timestamp,
        minutes_per_pixel: f32,
        width: f32,
    ) -> Result<Self, LayoutError> {
        if minutes_per_pixel.is_nan() || minutes_per_pixel <= 0.0 {
            return Err(LayoutError::NonPositiveScale(minutes_per_pixel));
        }
        if width.is_nan() || width < 0.0 {
            return Err(LayoutError::NegativeTrackWidth(width));
        }
        Ok(Self {
            day_start,
            minutes_per_pixel,
            width,
        })
    }

    /// Returns the timestamp the track's top edge maps to.
    pub fn day_start(self) -> Timestamp {
        self.day_start
    }

    /// Returns the zoom level in minutes per pixel.
    pub fn minutes_per_pixel(self) -> f32 {
        self.minutes_per_pixel
    }

    /// Returns the full track width.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Computes the layout of one day's events on this track.
    ///
    /// Infallible: the geometry contract was validated in [`Track::new`].
    pub fn layout(&self, events: &[Interval]) -> Vec<EventLayout> {
        layout_on_track(self, events)
    }

    /// Maps an event's time span onto the vertical axis.
    ///
    /// Returns `(offset, height)` from the track's top edge. A reversed span
    /// yields zero height at its start.
    pub fn vertical_extent(self, event: &Interval) -> (f32, f32) {
        let offset = (event.start - self.day_start).minutes() as f32 / self.minutes_per_pixel;
        let height = event.duration().minutes() as f32 / self.minutes_per_pixel;
        (offset, height)
    }

    /// Maps a lane onto the horizontal axis.
    ///
    /// Returns `(offset, width)` of the lane's column. `lane_count` is
    /// normalized to at least one so a stray zero cannot divide the track by
    /// zero.
    pub fn lane_extent(self, lane_index: usize, lane_count: usize) -> (f32, f32) {
        let lane_count = lane_count.max(1);
        let width = self.width / lane_count as f32;
        (lane_index as f32 * width, width)
    }

    /// Combines the vertical and horizontal mappings into one frame.
    pub fn frame_for(self, event: &Interval, lane_index: usize, lane_count: usize) -> Frame {
        let (y, height) = self.vertical_extent(event);
        let (x, width) = self.lane_extent(lane_index, lane_count);
        Frame::new(x, y, width, height)
    }
}
