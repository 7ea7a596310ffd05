//! Calendar events as half-open time intervals.
//!
//! An [`Interval`] is one event's occupied time span `[start, end)`. The
//! overlap predicate here is deliberately strict: an event ending exactly
//! when another begins does not overlap it, so back-to-back events can share
//! a rendering lane. The one exception is a pair of exact duplicates (same
//! start and same end), which count as overlapping even when zero-length.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{TimeDelta, Timestamp};

/// Opaque identifier of a calendar event.
///
/// The layout engine never interprets the id; it only carries it through to
/// the output so renderers can match records back to events.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event#{}", self.0)
    }
}

/// One calendar event's occupied time span.
///
/// `end >= start` is not required; the layout engine treats a reversed
/// interval as zero-length at `start` rather than rejecting the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub id: EventId,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Interval {
    pub const fn new(id: EventId, start: Timestamp, end: Timestamp) -> Self {
        Self { id, start, end }
    }

    /// Duration of the interval, clamped to zero for reversed inputs.
    pub fn duration(&self) -> TimeDelta {
        (self.end - self.start).clamp_non_negative()
    }

    /// Returns true if the span is reversed or empty.
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    /// Returns a copy with a reversed span clamped to zero length at `start`.
    pub fn sanitized(&self) -> Self {
        Self {
            end: self.end.max(self.start),
            ..*self
        }
    }

    /// Returns true if both spans cover exactly the same time.
    ///
    /// Duplicates are the one pair of distinct events allowed to share a
    /// lane; they render stacked in the identical column.
    pub fn is_duplicate_of(&self, other: &Interval) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Strict overlap predicate for lane collision.
    ///
    /// Two spans overlap iff one's endpoint falls strictly inside the other,
    /// or they are exact duplicates. Touching endpoints (`self.end ==
    /// other.start`) never overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        let strictly_inside = |t: Timestamp, iv: &Interval| t > iv.start && t < iv.end;

        strictly_inside(self.start, other)
            || strictly_inside(self.end, other)
            || strictly_inside(other.start, self)
            || strictly_inside(other.end, self)
            || self.is_duplicate_of(other)
    }

    /// Overlap that forces distinct lanes.
    ///
    /// Exact duplicates overlap but deliberately share a lane, so they are
    /// excluded here.
    pub fn collides_with(&self, other: &Interval) -> bool {
        self.overlaps(other) && !self.is_duplicate_of(other)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.id, self.start, self.end)
    }
}
