//! Span normalization: raw start/end values → clipped inclusive day ranges.
//!
//! # All-day exclusive ends
//!
//! Calendar providers encode an all-day event's end as the day *after* the
//! last included day.  A two-day event over the 10th and 11th arrives as
//! `start = "2025-01-10", end = "2025-01-12"`.  When the event is all-day
//! and the end value is itself a bare date, one calendar day is subtracted
//! before indexing.  Timed events are never corrected.
//!
//! # Day indexing
//!
//! Every value is reduced to a local `NaiveDate` first and the index is the
//! whole-day date difference to the window's day 0 ([`Window::day_index`]).
//! No millisecond arithmetic — a DST transition cannot shift an index.
//!
//! Anything unparsable yields `None`: a malformed record is excluded, never
//! an error.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime};

use hearth_core::Window;

use crate::feed::EventTime;

/// A clipped, window-relative day range, both ends inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayRange {
    pub start: usize,
    pub end: usize,
    pub all_day: bool,
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

enum Stamp {
    /// A bare `YYYY-MM-DD` value — the event is all-day.
    AllDay(NaiveDate),
    /// A timed instant, reduced to its local calendar date.
    Timed(NaiveDate),
}

impl Stamp {
    fn date(&self) -> NaiveDate {
        match *self {
            Stamp::AllDay(d) | Stamp::Timed(d) => d,
        }
    }
}

fn parse_stamp(s: &str) -> Option<Stamp> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Stamp::AllDay(d));
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(Stamp::Timed(t.with_timezone(&Local).date_naive()));
    }
    // Offset-less datetimes are taken as local wall-clock time.
    if let Ok(t) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Stamp::Timed(t.date()));
    }
    None
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Resolve a raw start/end pair into an inclusive day range clipped to the
/// window.  `None` when the record is unparsable or lies wholly outside the
/// window — both are normal, filtered conditions.
pub fn normalize_span(
    start: &EventTime,
    end: &EventTime,
    window: &Window,
) -> Option<DayRange> {
    let start_stamp = parse_stamp(start.resolve()?)?;
    let all_day = matches!(start_stamp, Stamp::AllDay(_));
    let start_date = start_stamp.date();

    let end_stamp = parse_stamp(end.resolve()?)?;
    let end_date = match (all_day, &end_stamp) {
        // Exclusive all-day end: step back to the last included day.
        (true, Stamp::AllDay(d)) => d.checked_sub_days(Days::new(1))?,
        _ => end_stamp.date(),
    };
    // A degenerate feed record (end not after start) still occupies its
    // start day rather than vanishing with an inverted range.
    let end_date = end_date.max(start_date);

    let start_idx = window.day_index(start_date)?;
    let end_idx = window.day_index(end_date)?;

    let last = window.len() as i64 - 1;
    if end_idx < 0 || start_idx > last {
        return None;
    }
    Some(DayRange {
        start: start_idx.max(0) as usize,
        end: end_idx.min(last) as usize,
        all_day,
    })
}
