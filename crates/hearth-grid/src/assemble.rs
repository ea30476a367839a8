//! Grid assembly: the engine entry point.
//!
//! [`layout_grid`] is a pure, synchronous function
//! `(events, roster, now, n) → GridLayout`.  It performs no I/O, keeps no
//! state between invocations, and is idempotent: identical inputs produce
//! identically ordered outputs, so the caller may re-run it on every poll
//! cycle or window-size change.
//!
//! Each roster member is packed independently, in configuration order, and
//! the packer's lane ordering is preserved verbatim — lane/row assignment is
//! stable across renders given unchanged input.  All clipping and
//! validation happened in the normalizer; nothing is re-checked here.

use chrono::{DateTime, Local};

use hearth_core::{ResourceId, Roster, Window};

use crate::feed::RawEvent;
use crate::lane::{Span, pack_lanes};
use crate::normalize::normalize_span;
use crate::tag::{TagParser, Targets};

// ── Output types ──────────────────────────────────────────────────────────────

/// One placed event chip: member, lane (sub-row), inclusive day range, title.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub resource: ResourceId,
    pub lane: usize,
    pub start_day: usize,
    pub end_day: usize,
    pub title: String,
}

/// The computed grid: window, flat placement list, per-member lane counts.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub window: Window,
    /// Placements grouped by member (roster order), then lane, then start.
    pub placements: Vec<Placement>,
    /// Lane count per member, indexed by `ResourceId`.  Never 0 — an
    /// eventless member keeps one reserved empty row.
    lane_counts: Vec<usize>,
}

impl GridLayout {
    /// Display rows needed by `id` (≥ 1).
    pub fn lane_count(&self, id: ResourceId) -> usize {
        self.lane_counts.get(id.index()).copied().unwrap_or(1)
    }

    /// Lane counts in roster order.
    pub fn lane_counts(&self) -> &[usize] {
        &self.lane_counts
    }

    /// Total display rows across all members.
    pub fn total_lanes(&self) -> usize {
        self.lane_counts.iter().sum()
    }

    /// Placements belonging to one member, in lane-then-start order.
    pub fn placements_for(&self, id: ResourceId) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.resource == id)
    }
}

// ── Engine entry point ────────────────────────────────────────────────────────

/// Lay out `events` for `roster` over the `n` local days starting at `now`.
///
/// Malformed, untagged, or out-of-window events are filtered, never raised:
/// any input — including an empty feed — yields a valid window-sized grid.
pub fn layout_grid(
    events: &[RawEvent],
    roster: &Roster,
    now: DateTime<Local>,
    n: usize,
) -> GridLayout {
    let window = Window::new(now, n);
    let parser = TagParser::new(roster);

    // ── Fan events out into per-member span lists ─────────────────────────
    let mut per_member: Vec<Vec<Span>> = vec![Vec::new(); roster.len()];
    for event in events {
        let Some(tagged) = parser.parse(&event.title) else { continue };
        let (Some(start), Some(end)) = (&event.start, &event.end) else { continue };
        let Some(range) = normalize_span(start, end, &window) else { continue };

        match tagged.targets {
            Targets::One(id) => per_member[id.index()].push(Span {
                resource: id,
                start_day: range.start,
                end_day: range.end,
                title: tagged.title,
            }),
            Targets::All => {
                for id in roster.ids() {
                    per_member[id.index()].push(Span {
                        resource: id,
                        start_day: range.start,
                        end_day: range.end,
                        title: tagged.title.clone(),
                    });
                }
            }
        }
    }

    // ── Pack each member independently, in roster order ───────────────────
    let mut placements = Vec::new();
    let mut lane_counts = Vec::with_capacity(roster.len());
    for id in roster.ids() {
        let set = pack_lanes(std::mem::take(&mut per_member[id.index()]));
        lane_counts.push(set.lane_count());
        for (lane, spans) in set.into_lanes().into_iter().enumerate() {
            for span in spans {
                placements.push(Placement {
                    resource: span.resource,
                    lane,
                    start_day: span.start_day,
                    end_day: span.end_day,
                    title: span.title,
                });
            }
        }
    }

    GridLayout { window, placements, lane_counts }
}
