//! The display window: N consecutive local calendar days.
//!
//! # Design
//!
//! A day's identity is its local `NaiveDate`, not a millisecond offset.  The
//! day index of any instant is the whole-day difference between local
//! calendar dates:
//!
//! ```text
//! day_index(date) = date − day0       (in whole days)
//! ```
//!
//! Working on dates rather than raw durations means a DST transition inside
//! the window can never shift an index by a fractional day — date arithmetic
//! is exact, the same way the rest of the board's schedule math is integer
//! arithmetic.
//!
//! `now` is always injected by the caller, never read from the system clock
//! here.  The window is immutable; once the local date rolls past `day0` the
//! caller detects it via [`Window::is_stale`] and builds a fresh window.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone};

/// N consecutive local calendar days, day 0 = "today".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// The local dates on display, in order.  Empty when `n == 0`.
    days: Vec<NaiveDate>,
}

impl Window {
    /// Build the window of `n` days starting at `now`'s local calendar date.
    ///
    /// `n == 0` yields an empty window — a valid, renderable nothing, not an
    /// error.
    pub fn new(now: DateTime<Local>, n: usize) -> Self {
        let day0 = now.date_naive();
        let days = (0..n)
            .map_while(|i| day0.checked_add_days(Days::new(i as u64)))
            .collect();
        Self { days }
    }

    /// Number of days on display.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The local dates on display, in order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The first displayed date, or `None` for an empty window.
    pub fn day0(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    /// Signed day index of `date` relative to day 0 (may be negative or past
    /// the window end — clipping is the caller's job).  `None` for an empty
    /// window.
    pub fn day_index(&self, date: NaiveDate) -> Option<i64> {
        let day0 = self.day0()?;
        Some(date.signed_duration_since(day0).num_days())
    }

    /// `true` if the signed index falls inside `[0, len - 1]`.
    pub fn contains(&self, index: i64) -> bool {
        index >= 0 && (index as usize) < self.days.len()
    }

    /// Local-midnight instant of day `i`.
    ///
    /// Returns `None` past the window end, or on the rare transition day
    /// where the local timezone skips midnight entirely.
    pub fn local_midnight(&self, i: usize) -> Option<DateTime<Local>> {
        let date = *self.days.get(i)?;
        Local
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .earliest()
    }

    /// `true` once `now`'s local date differs from day 0 — the caller must
    /// rebuild the window.  An empty window is never stale.
    pub fn is_stale(&self, now: DateTime<Local>) -> bool {
        match self.day0() {
            Some(day0) => now.date_naive() != day0,
            None => false,
        }
    }

    /// ISO weekday number (1 = Monday) of day `i`, for header rendering.
    pub fn weekday_number(&self, i: usize) -> Option<u32> {
        self.days.get(i).map(|d| d.weekday().number_from_monday())
    }
}
