//! `hearth-grid` — the multi-resource calendar layout engine.
//!
//! Turns a flat, unordered list of tagged calendar events into a
//! collision-free grid of (member × day × lane) placements over a rolling
//! N-day window.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`feed`]      | `RawEvent`, `EventTime`, JSON loader                    |
//! | [`tag`]       | `TagParser`, `Targets` — title routing and fan-out      |
//! | [`normalize`] | `normalize_span`, `DayRange` — day-index resolution     |
//! | [`lane`]      | `Span`, `LaneSet`, `pack_lanes` — interval partitioning |
//! | [`assemble`]  | `layout_grid`, `GridLayout`, `Placement`                |
//! | [`error`]     | `GridError`, `GridResult<T>`                            |
//!
//! # Pipeline (summary)
//!
//! ```text
//! raw events ──tag fan-out──▶ per-member candidates
//!            ──normalize───▶ clipped inclusive day ranges
//!            ──pack_lanes──▶ minimal non-overlapping lanes (per member)
//!            ──assemble────▶ GridLayout { window, placements, lane counts }
//! ```
//!
//! The engine is a pure function of `(events, roster, now, n)`; the feed
//! fetch, the admin config screens, and pixel rendering all live outside
//! this crate.

pub mod assemble;
pub mod error;
pub mod feed;
pub mod lane;
pub mod normalize;
pub mod tag;


pub use assemble::{GridLayout, Placement, layout_grid};
pub use error::{GridError, GridResult};
pub use feed::{EventTime, RawEvent, load_events_json, load_events_reader};
pub use lane::{LaneSet, Span, pack_lanes};
pub use normalize::{DayRange, normalize_span};
pub use tag::{TagParser, Tagged, Targets};
