//! Lane assignment within one collision cluster.

use gnomon_core::{Interval, Timestamp};

/// Lanes chosen for one cluster's members, in member order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LaneAssignment {
    /// 0-based lane per member, parallel to the cluster slice.
    pub lanes: Vec<usize>,
    /// Total lanes allocated for the cluster, always >= 1. Shared by every
    /// member so the renderer divides the track consistently.
    pub lane_count: usize,
}

/// Assigns lanes to one cluster's start-sorted members.
///
/// Greedy lowest-free-lane coloring: each event takes the smallest lane
/// whose previous occupant has already ended. "Ended" is `occupant.end <=
/// event.start`, matching the strict overlap predicate, so a back-to-back
/// successor inside the same cluster reuses its predecessor's lane. Exact
/// duplicates are placed in their twin's lane; they are the only overlapping
/// pair allowed to share a column.
///
/// The assignment is a deterministic function of the member list, so
/// recomputing an unchanged day can never shuffle events between lanes.
pub(crate) fn assign(members: &[Interval]) -> LaneAssignment {
    let mut lanes: Vec<usize> = Vec::with_capacity(members.len());
    // Per lane, when its latest occupant ends. Occupant ends are
    // non-decreasing within a lane, so the latest end is enough.
    let mut lane_ends: Vec<Timestamp> = Vec::new();

    for (index, event) in members.iter().enumerate() {
        if let Some(twin) = members[..index]
            .iter()
            .position(|earlier| earlier.is_duplicate_of(event))
        {
            lanes.push(lanes[twin]);
            continue;
        }

        let lane = lane_ends
            .iter()
            .position(|&end| end <= event.start)
            .unwrap_or_else(|| {
                lane_ends.push(event.end);
                lane_ends.len() - 1
            });
        lane_ends[lane] = event.end;
        lanes.push(lane);
    }

    LaneAssignment {
        lanes,
        lane_count: lane_ends.len().max(1),
    }
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

    #[test]
    fn test_singleton_gets_lane_zero_of_one() {
        let assignment = assign(&[iv(1, (9, 0), (10, 0))]);
        assert_eq!(assignment.lanes, vec![0]);
        assert_eq!(assignment.lane_count, 1);
    }

    #[test]
    fn test_two_overlapping_members_split_lanes() {
        let assignment = assign(&[iv(1, (9, 0), (10, 0)), iv(2, (9, 30), (10, 30))]);
        assert_eq!(assignment.lanes, vec![0, 1]);
        assert_eq!(assignment.lane_count, 2);
    }

    #[test]
    fn test_vacated_lane_is_reused() {
        // A and B overlap; C starts after A ended and reuses lane 0.
        let assignment = assign(&[
            iv(1, (9, 0), (10, 0)),
            iv(2, (9, 30), (11, 0)),
            iv(3, (10, 30), (11, 30)),
        ]);
        assert_eq!(assignment.lanes, vec![0, 1, 0]);
        assert_eq!(assignment.lane_count, 2);
    }

    #[test]
    fn test_three_mutually_overlapping_members() {
        let assignment = assign(&[
            iv(1, (9, 0), (11, 0)),
            iv(2, (9, 15), (10, 0)),
            iv(3, (9, 30), (10, 30)),
        ]);
        assert_eq!(assignment.lanes, vec![0, 1, 2]);
        assert_eq!(assignment.lane_count, 3);
    }

    #[test]
    fn test_exact_duplicates_share_a_lane() {
        let assignment = assign(&[iv(1, (9, 0), (10, 0)), iv(2, (9, 0), (10, 0))]);
        assert_eq!(assignment.lanes, vec![0, 0]);
        assert_eq!(assignment.lane_count, 1);
    }

    #[test]
    fn test_duplicates_among_other_members() {
        // The duplicate pair shares lane 0 while the overlapping third event
        // is pushed aside.
        let assignment = assign(&[
            iv(1, (9, 0), (10, 0)),
            iv(2, (9, 0), (10, 0)),
            iv(3, (9, 30), (10, 30)),
        ]);
        assert_eq!(assignment.lanes, vec![0, 0, 1]);
        assert_eq!(assignment.lane_count, 2);
    }

    #[test]
    fn test_touching_members_share_a_lane() {
        // Inside a cluster held open by an umbrella event, back-to-back
        // events stack in one lane.
        let assignment = assign(&[
            iv(1, (9, 0), (12, 0)),
            iv(2, (9, 30), (10, 0)),
            iv(3, (10, 0), (10, 30)),
        ]);
        assert_eq!(assignment.lanes, vec![0, 1, 1]);
        assert_eq!(assignment.lane_count, 2);
    }

    #[test]
    fn test_colliding_members_never_share_a_lane() {
        let members = [
            iv(1, (9, 0), (10, 0)),
            iv(2, (9, 10), (9, 40)),
            iv(3, (9, 20), (11, 0)),
            iv(4, (9, 50), (10, 30)),
            iv(5, (10, 40), (11, 30)),
        ];
        let assignment = assign(&members);

        for i in 0..members.len() {
            for j in i + 1..members.len() {
                if members[i].collides_with(&members[j]) {
                    assert_ne!(
                        assignment.lanes[i], assignment.lanes[j],
                        "events {i} and {j} collide but share a lane"
                    );
                }
            }
        }
    }
}
