//! Gnomon Core Types
//!
//! This crate provides the foundational value types for the Gnomon calendar
//! layout engine:
//!
//! - **Time**: minute-granularity timestamps and durations ([`time`] module)
//! - **Intervals**: calendar events as half-open time spans with the strict
//!   overlap predicate ([`interval`] module)
//! - **Geometry**: the rectangular frames handed to renderers ([`geometry`]
//!   module)
//!
//! Everything here is a plain owned value with no I/O and no policy; the
//! layout algorithms live in the `gnomon` crate.

pub mod geometry;
pub mod interval;
pub mod time;

pub use geometry::Frame;
pub use interval::{EventId, Interval};
pub use time::{TimeDelta, Timestamp};
