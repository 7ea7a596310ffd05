//! Layout computation for a day track.
//!
//! The pipeline runs in four stages over the caller's event list:
//!
//! 1. sanitize reversed intervals to zero length,
//! 2. stable-sort by start time,
//! 3. group into collision clusters and assign lanes ([`cluster`], [`lanes`]),
//! 4. map each event onto a [`Frame`] of the track ([`track`]).
//!
//! Output records are returned in the caller's original order, so inputs and
//! outputs zip positionally.

mod cluster;
mod lanes;
mod track;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use gnomon_core::{EventId, Frame, Interval, Timestamp};

use crate::error::LayoutError;

pub use track::Track;

/// Computed placement of one event on a day track.
///
/// Consumed by renderers to paint one rectangle; the engine never retains it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventLayout {
    /// Identifier of the input event this record belongs to.
    pub id: EventId,
    /// Rectangle to paint, in track coordinates.
    pub frame: Frame,
    /// 0-based horizontal lane within the event's collision cluster.
    pub lane_index: usize,
    /// Number of lanes the cluster divides the track into, always >= 1.
    pub lane_count: usize,
}

/// Computes the layout for one day's events.
///
/// `events` need not be sorted; records come back in input order. `scale` is
/// the zoom level in minutes per pixel and must be positive; `track_width`
/// must be non-negative. Reversed intervals are clamped to zero length at
/// their start rather than failing the batch.
pub fn compute_layout(
    events: &[Interval],
    day_start: Timestamp,
    scale: f32,
    track_width: f32,
) -> Result<Vec<EventLayout>, LayoutError> {
    let track = Track::new(day_start, scale, track_width)?;
    Ok(track.layout(events))
}

/// Engine body shared by [`compute_layout`] and [`Track::layout`].
pub(crate) fn layout_on_track(track: &Track, events: &[Interval]) -> Vec<EventLayout> {
    if events.is_empty() {
        return Vec::new();
    }

    // Sanitize per event: a reversed span becomes a zero-length point at its
    // start so one bad event cannot corrupt the rest of the day.
    let mut order: Vec<(usize, Interval)> = events
        .iter()
        .map(|event| {
            if event.end < event.start {
                warn!(
                    id = event.id.raw(),
                    start = event.start.minutes(),
                    end = event.end.minutes();
                    "Reversed interval clamped to zero length"
                );
            }
            event.sanitized()
        })
        .enumerate()
        .collect();
    order.sort_by_key(|(_, event)| event.start);

    let sorted: Vec<Interval> = order.iter().map(|(_, event)| *event).collect();
    let clusters = cluster::group(&sorted);
    debug!(
        events_len = sorted.len(),
        clusters_len = clusters.len();
        "Grouped events into collision clusters"
    );

    let mut layouts = vec![None; events.len()];
    for cluster in &clusters {
        let members = &sorted[cluster.range.clone()];
        let assignment = lanes::assign(members);

        for (offset, event) in members.iter().enumerate() {
            let lane_index = assignment.lanes[offset];
            let (original_index, _) = order[cluster.range.start + offset];
            layouts[original_index] = Some(EventLayout {
                id: event.id,
                frame: track.frame_for(event, lane_index, assignment.lane_count),
                lane_index,
                lane_count: assignment.lane_count,
            });
        }
    }

    // Every input index is covered by exactly one cluster.
    layouts.into_iter().flatten().collect()
}
