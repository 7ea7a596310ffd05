//! Gnomon - an event-overlap layout engine for calendar day views.
//!
//! Given one day's events as `(id, start, end)` intervals, the engine assigns
//! each event a vertical extent along the time axis and a horizontal lane, so
//! that overlapping events render side by side while non-overlapping events
//! reuse the full track width. The computation is pure and stateless: every
//! call recomputes the layout for the full event list from scratch.
//!
//! # Examples
//!
//! ```rust
//! use gnomon::{EventId, Interval, Timestamp, compute_layout};
//!
//! let events = vec![
//!     Interval::new(EventId::new(1), Timestamp::from_hm(9, 0), Timestamp::from_hm(10, 0)),
//!     Interval::new(EventId::new(2), Timestamp::from_hm(9, 30), Timestamp::from_hm(10, 30)),
//! ];
//!
//! // One pixel per minute on a 300-unit-wide track starting at midnight.
//! let layouts = compute_layout(&events, Timestamp::from_hm(0, 0), 1.0, 300.0)
//!     .expect("valid scale and width");
//!
//! assert_eq!(layouts.len(), events.len());
//! assert_ne!(layouts[0].lane_index, layouts[1].lane_index);
//! ```
//!
//! Callers that recompute per scroll frame can wrap the engine in a
//! [`LayoutCache`] to skip recomputation while a day's events are unchanged.

pub mod config;

mod cache;
mod error;
mod layout;

pub use gnomon_core::{EventId, Frame, Interval, TimeDelta, Timestamp};

pub use cache::LayoutCache;
pub use error::LayoutError;
pub use layout::{EventLayout, Track, compute_layout};
