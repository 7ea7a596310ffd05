//! Overlap grouping: splitting a sorted day into collision clusters.

use std::ops::Range;

use gnomon_core::Interval;

/// A maximal run of start-sorted events connected by overlap.
///
/// Membership is transitive: events `i` and `i+2` need not overlap directly
/// as long as each adjacent link in the run does. Every cluster is laid out
/// independently; lanes never leak across cluster boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollisionCluster {
    /// Index range into the start-sorted event slice.
    pub range: Range<usize>,
}

/// Groups start-sorted events into collision clusters.
///
/// Forward sweep tracking the running maximum end: an event joins the open
/// cluster while it starts strictly before the furthest end seen so far.
/// The comparison is strict, so an event starting exactly when the cluster's
/// last span ends opens a fresh cluster (back-to-back events stack, they do
/// not sit side by side). Zero-length duplicates carry no forward window and
/// are chained through the duplicate rule instead.
///
/// Clusters cover every index of `events` exactly once, in ascending order.
pub(crate) fn group(events: &[Interval]) -> Vec<CollisionCluster> {
    let mut clusters = Vec::new();
    let mut start = 0;

    while start < events.len() {
        let mut upper = start;
        let mut max_end = events[start].end;

        while upper + 1 < events.len() {
            let next = &events[upper + 1];
            if next.start < max_end || next.is_duplicate_of(&events[upper]) {
                upper += 1;
                max_end = max_end.max(next.end);
            } else {
                break;
            }
        }

        clusters.push(CollisionCluster {
            range: start..upper + 1,
        });
        start = upper + 1;
    }

    clusters
}
