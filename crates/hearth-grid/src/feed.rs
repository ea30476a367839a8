//! Raw feed records and the JSON loader.
//!
//! # Feed format
//!
//! A JSON array of event records as delivered by the calendar-fetch
//! collaborator.  `start`/`end` come in two shapes, both accepted:
//!
//! ```json
//! [
//!   { "id": "e1", "title": "Kari: Tur",      "start": "2025-01-06T09:00:00+01:00",
//!                                            "end":   "2025-01-06T15:00:00+01:00" },
//!   { "id": "e2", "title": "Alle: Julebord", "start": { "date": "2025-01-10" },
//!                                            "end":   { "date": "2025-01-12" } }
//! ]
//! ```
//!
//! Records with a missing or unparsable time are kept here and filtered
//! later by the normalizer — the loader only fails on malformed JSON, never
//! on calendar content it doesn't like.
//!
//! Fetching the feed (network, auth, retry, caching) is the caller's
//! concern; this module is the deserialization seam it hands records
//! through.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{GridError, GridResult};

// ── Feed records ──────────────────────────────────────────────────────────────

/// One raw calendar event as delivered by the upstream feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Missing start ⇒ the event can never produce a span.
    #[serde(default)]
    pub start: Option<EventTime>,

    #[serde(default)]
    pub end: Option<EventTime>,
}

/// A feed timestamp: either a flat ISO string or a `{date?, dateTime?}` pair
/// (the all-day/timed split used by common calendar providers).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    Iso(String),
    Fields {
        #[serde(default)]
        date: Option<String>,
        #[serde(default, rename = "dateTime")]
        date_time: Option<String>,
    },
}

impl EventTime {
    /// The effective timestamp string: `dateTime` wins over `date` when both
    /// are present.  `None` when the pair form carries neither field.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            EventTime::Iso(s) => Some(s),
            EventTime::Fields { date, date_time } => {
                date_time.as_deref().or(date.as_deref())
            }
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load raw events from a JSON file.
pub fn load_events_json(path: &Path) -> GridResult<Vec<RawEvent>> {
    let file = std::fs::File::open(path).map_err(GridError::Io)?;
    load_events_reader(std::io::BufReader::new(file))
}

/// Like [`load_events_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or decoding an HTTP
/// response body.
pub fn load_events_reader<R: Read>(reader: R) -> GridResult<Vec<RawEvent>> {
    serde_json::from_reader(reader).map_err(|e| GridError::Parse(e.to_string()))
}
