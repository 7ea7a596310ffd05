//! Minute-granularity time primitives.
//!
//! Calendar layout works at whole-minute resolution, so timestamps are plain
//! signed minute counts from a caller-chosen epoch (midnight of the rendered
//! day is the usual choice). Integer minutes keep equality and hashing exact,
//! which the layout cache relies on.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A point in time, in whole minutes from a caller-chosen epoch.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from a raw minute count.
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Creates a timestamp at `hour:minute` of the epoch day.
    pub const fn from_hm(hour: i64, minute: i64) -> Self {
        Self(hour * 60 + minute)
    }

    /// Returns the raw minute count.
    pub const fn minutes(self) -> i64 {
        self.0
    }

    /// Returns the later of two timestamps.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Returns the earlier of two timestamps.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.rem_euclid(24 * 60);
        write!(f, "{:02}:{:02}", total / 60, total % 60)
    }
}

impl Sub for Timestamp {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        TimeDelta(self.0 - rhs.0)
    }
}

impl Add<TimeDelta> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: TimeDelta) -> Timestamp {
        Timestamp(self.0 + rhs.0)
    }
}

impl AddAssign<TimeDelta> for Timestamp {
    fn add_assign(&mut self, rhs: TimeDelta) {
        self.0 += rhs.0;
    }
}

impl Sub<TimeDelta> for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: TimeDelta) -> Timestamp {
        Timestamp(self.0 - rhs.0)
    }
}

impl SubAssign<TimeDelta> for Timestamp {
    fn sub_assign(&mut self, rhs: TimeDelta) {
        self.0 -= rhs.0;
    }
}

/// A signed duration between two [`Timestamp`]s, in whole minutes.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeDelta(i64);

impl TimeDelta {
    /// Creates a duration from a raw minute count.
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Returns the raw minute count.
    pub const fn minutes(self) -> i64 {
        self.0
    }

    /// Returns true if the duration is negative.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Clamps negative durations to zero.
    pub fn clamp_non_negative(self) -> Self {
        Self(self.0.max(0))
    }
}

impl Add for TimeDelta {
    type Output = TimeDelta;

    fn add(self, rhs: Self) -> TimeDelta {
        TimeDelta(self.0 + rhs.0)
    }
}

impl Sub for TimeDelta {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        TimeDelta(self.0 - rhs.0)
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}
