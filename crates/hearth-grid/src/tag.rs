//! Title-tag parsing and resource fan-out.
//!
//! Event titles carry their routing in a leading tag: `"Kari: Tannlege"`
//! belongs to the member named Kari, `"Alle: Julebord"` to everyone.  Only
//! the first colon is significant — colons in the remainder are part of the
//! display title.
//!
//! An untagged title, or a tag naming nobody in the roster, yields `None`:
//! such events are not meant for this grid and are dropped silently, never
//! auto-created as new members.

use regex::Regex;

use hearth_core::{ResourceId, Roster};

/// Leading word, colon, remainder.  The tag word is any run of Unicode
/// letters, so member names in any alphabet match.
const TAG_PATTERN: &str = r"^\s*(\p{L}+)\s*:\s*(.+)$";

/// Who a tagged event is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Targets {
    /// Wildcard tag — one assignment per roster member.
    All,
    /// A single named member.
    One(ResourceId),
}

/// A successfully routed title: targets plus the remainder as display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tagged {
    pub targets: Targets,
    pub title: String,
}

/// Matches titles against one roster.  Compile once, parse many.
pub struct TagParser<'r> {
    roster: &'r Roster,
    pattern: Regex,
}

impl<'r> TagParser<'r> {
    pub fn new(roster: &'r Roster) -> Self {
        // The pattern is a compile-time literal; Regex::new cannot fail on it.
        let pattern = Regex::new(TAG_PATTERN).expect("tag pattern is valid");
        Self { roster, pattern }
    }

    /// Route a title.  `None` means the event is not for this grid.
    pub fn parse(&self, title: &str) -> Option<Tagged> {
        let caps = self.pattern.captures(title)?;
        let token = &caps[1];
        let rest = caps[2].trim();
        if rest.is_empty() {
            return None;
        }

        if self.roster.is_wildcard(token) {
            return Some(Tagged { targets: Targets::All, title: rest.to_string() });
        }
        self.roster
            .lookup(token)
            .map(|id| Tagged { targets: Targets::One(id), title: rest.to_string() })
    }
}
