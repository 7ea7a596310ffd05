//! Per-day memoization of layout results.
//!
//! The engine recomputes from scratch on every call, which is wasteful when
//! a scroll frame re-renders a day whose events have not changed. The cache
//! keys each day's result on a fingerprint of the interval set and the track
//! geometry, so an unchanged day costs one hash pass instead of a layout
//! pass. The engine itself stays stateless; the cache is an opt-in wrapper
//! owned by the caller.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use log::debug;

use gnomon_core::{Interval, Timestamp};

use crate::layout::{EventLayout, Track};

#[derive(Debug)]
struct CacheEntry {
    fingerprint: u64,
    layouts: Vec<EventLayout>,
}

/// Memoizes one layout result per day track.
///
/// Any mutation of a day's events changes its fingerprint and triggers a
/// recomputation on the next lookup; [`LayoutCache::invalidate_day`] exists
/// for callers that prefer to drop a day eagerly on mutation.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<Timestamp, CacheEntry>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for `events` on `track`, recomputing only when the
    /// day's input or geometry changed since the previous lookup.
    ///
    /// Records zip positionally with `events`, exactly as with
    /// [`Track::layout`].
    pub fn layout_for_day(&mut self, events: &[Interval], track: &Track) -> &[EventLayout] {
        let day = track.day_start();
        let fingerprint = fingerprint(events, track);

        let stale = self
            .entries
            .get(&day)
            .is_none_or(|entry| entry.fingerprint != fingerprint);
        if stale {
            debug!(
                day = day.minutes(),
                events_len = events.len();
                "Layout cache miss, recomputing day"
            );
            let layouts = track.layout(events);
            self.entries.insert(
                day,
                CacheEntry {
                    fingerprint,
                    layouts,
                },
            );
        }

        self.entries
            .get(&day)
            .map(|entry| entry.layouts.as_slice())
            .unwrap_or(&[])
    }

    /// Drops the cached result for one day.
    pub fn invalidate_day(&mut self, day_start: Timestamp) {
        self.entries.remove(&day_start);
    }

    /// Drops every cached day.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of days currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hashes the interval set together with the track geometry.
///
/// Interval order matters: output records zip with input positions, so a
/// reordered list is a different result even with an identical set.
fn fingerprint(events: &[Interval], track: &Track) -> u64 {
    let mut hasher = DefaultHasher::new();
    track.day_start().hash(&mut hasher);
    track.minutes_per_pixel().to_bits().hash(&mut hasher);
    track.width().to_bits().hash(&mut hasher);
    events.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomon_core::EventId;

    fn iv(id: u64, start: (i64, i64), end: (i64, i64)) -> Interval {
        Interval::new(
            EventId::new(id),
            Timestamp::from_hm(start.0, start.1),
            Timestamp::from_hm(end.0, end.1),
        )
    }

    fn track_for_day(day_hour: i64) -> Track {
        Track::new(Timestamp::from_hm(day_hour, 0), 1.0, 300.0).unwrap()
    }

    #[test]
    fn test_hit_returns_same_result_as_engine() {
        let track = track_for_day(0);
        let events = [iv(1, (9, 0), (10, 0)), iv(2, (9, 30), (10, 30))];

        let mut cache = LayoutCache::new();
        let direct = track.layout(&events);
        assert_eq!(cache.layout_for_day(&events, &track), direct.as_slice());
        // Second lookup hits the cache and must match as well.
        assert_eq!(cache.layout_for_day(&events, &track), direct.as_slice());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_mutated_day_recomputes() {
        let track = track_for_day(0);
        let mut cache = LayoutCache::new();

        let before = [iv(1, (9, 0), (10, 0))];
        assert_eq!(cache.layout_for_day(&before, &track).len(), 1);

        let after = [iv(1, (9, 0), (10, 0)), iv(2, (9, 30), (10, 30))];
        let layouts = cache.layout_for_day(&after, &track);
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].lane_count, 2);
    }

    #[test]
    fn test_zoom_change_recomputes() {
        let events = [iv(1, (9, 0), (10, 0))];
        let mut cache = LayoutCache::new();

        let near = Track::new(Timestamp::from_hm(0, 0), 1.0, 300.0).unwrap();
        let far = Track::new(Timestamp::from_hm(0, 0), 2.0, 300.0).unwrap();

        assert_eq!(cache.layout_for_day(&events, &near)[0].frame.height(), 60.0);
        assert_eq!(cache.layout_for_day(&events, &far)[0].frame.height(), 30.0);
    }

    #[test]
    fn test_days_are_cached_independently() {
        let events = [iv(1, (9, 0), (10, 0))];
        let mut cache = LayoutCache::new();

        cache.layout_for_day(&events, &track_for_day(0));
        cache.layout_for_day(&events, &track_for_day(24));
        assert_eq!(cache.len(), 2);

        cache.invalidate_day(Timestamp::from_hm(0, 0));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reordered_input_is_a_different_fingerprint() {
        let track = track_for_day(0);
        let forward = [iv(1, (9, 0), (10, 0)), iv(2, (11, 0), (12, 0))];
        let backward = [iv(2, (11, 0), (12, 0)), iv(1, (9, 0), (10, 0))];

        let mut cache = LayoutCache::new();
        cache.layout_for_day(&forward, &track);
        let layouts = cache.layout_for_day(&backward, &track);
        // Positional zip: the first record now belongs to event 2.
        assert_eq!(layouts[0].id, EventId::new(2));
    }
}
