//! Lane packing: greedy interval partitioning of one member's spans.
//!
//! # Algorithm
//!
//! Spans are sorted by `(start, end, title)` — upstream data has no
//! guaranteed ordering and duplicate titles/times do occur, so the total
//! order is what makes lane assignment reproducible.  Each span then goes
//! into the first lane whose most recent span ends strictly before this
//! span starts; if none qualifies, a new lane is opened.
//!
//! # Why the result is minimal
//!
//! Processed in start-ascending order, every lane is "blocked" at the moment
//! a new lane must be opened — each holds a span whose interval contains the
//! new span's start day.  The number of open lanes therefore equals the
//! instantaneous overlap count at that day, which lower-bounds *any* valid
//! partition.  Greedy never opens a lane beyond that bound, so the final
//! lane count equals the peak overlap (the classic interval-graph-coloring
//! argument).
//!
//! Complexity: O(S log S + S·L) for S spans and L lanes — trivially small
//! for a household's events in an N-day window.

use hearth_core::ResourceId;

/// One member's claim on an inclusive day range, with its display title.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub resource: ResourceId,
    /// Inclusive window-relative day indices, already clipped.
    pub start_day: usize,
    pub end_day: usize,
    pub title: String,
}

/// One member's spans partitioned into non-overlapping lanes.
#[derive(Clone, Debug, Default)]
pub struct LaneSet {
    lanes: Vec<Vec<Span>>,
}

impl LaneSet {
    /// Lanes in assignment order; spans within a lane are start-ascending.
    pub fn lanes(&self) -> &[Vec<Span>] {
        &self.lanes
    }

    /// Display rows this member needs.  Floors at 1 so a member with no
    /// events still gets an empty row.
    pub fn lane_count(&self) -> usize {
        self.lanes.len().max(1)
    }

    /// Total spans across all lanes.
    pub fn span_count(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    pub fn into_lanes(self) -> Vec<Vec<Span>> {
        self.lanes
    }
}

/// Partition `spans` into the minimum number of non-overlapping lanes.
///
/// Input must already be clipped to the window; the packer neither validates
/// nor re-clips.  Deterministic: identical input always yields identical
/// lane assignment.
pub fn pack_lanes(mut spans: Vec<Span>) -> LaneSet {
    spans.sort_by(|a, b| {
        a.start_day
            .cmp(&b.start_day)
            .then(a.end_day.cmp(&b.end_day))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut lanes: Vec<Vec<Span>> = Vec::new();
    // Per-lane end index of the most recently assigned span.
    let mut last_end: Vec<usize> = Vec::new();

    for span in spans {
        // First-fit: strict `<` — two spans on adjacent days do not overlap,
        // two spans sharing a day do.
        match last_end.iter().position(|&end| end < span.start_day) {
            Some(i) => {
                last_end[i] = span.end_day;
                lanes[i].push(span);
            }
            None => {
                last_end.push(span.end_day);
                lanes.push(vec![span]);
            }
        }
    }

    LaneSet { lanes }
}
