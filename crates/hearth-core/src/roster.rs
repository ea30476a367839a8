//! `Roster` — the fixed, ordered set of household members.
//!
//! The participant set is configuration, not data: events may *reference*
//! members by tag, but can never create one.  Identity is the configured
//! name string; tag matching is case-insensitive while display keeps the
//! configured casing.
//!
//! The roster also owns the wildcard token (default `"alle"`) that fans a
//! single event out to every member.

use rustc_hash::FxHashMap;

use crate::{CoreError, CoreResult, ResourceId};

/// Default wildcard tag token ("everyone").
pub const DEFAULT_WILDCARD: &str = "alle";

/// The configured household members, in display order.
#[derive(Clone, Debug)]
pub struct Roster {
    /// Display names in configuration order, indexed by `ResourceId`.
    names: Vec<String>,
    /// Wildcard token, stored lowercased.
    wildcard: String,
    /// Lowercased name → id, for case-insensitive tag lookup.
    by_lower: FxHashMap<String, ResourceId>,
}

impl Roster {
    /// Build a roster from ordered display names, using [`DEFAULT_WILDCARD`].
    pub fn new<I, S>(names: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_wildcard(names, DEFAULT_WILDCARD)
    }

    /// Build a roster with an explicit wildcard token.
    ///
    /// Validation: at least one member, no empty names, no case-insensitive
    /// duplicates, and the wildcard must not collide with a member name.
    pub fn with_wildcard<I, S>(names: I, wildcard: &str) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(CoreError::Config("roster must have at least one member".into()));
        }
        let wildcard = wildcard.trim().to_lowercase();
        if wildcard.is_empty() {
            return Err(CoreError::Config("wildcard token must not be empty".into()));
        }

        let mut by_lower = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CoreError::Config(format!("member {i} has an empty name")));
            }
            let lower = name.to_lowercase();
            if lower == wildcard {
                return Err(CoreError::Config(format!(
                    "member name {name:?} collides with the wildcard token"
                )));
            }
            let id = ResourceId(i as u16);
            if by_lower.insert(lower, id).is_some() {
                return Err(CoreError::Config(format!("duplicate member name {name:?}")));
            }
        }

        Ok(Self { names, wildcard, by_lower })
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display names in configuration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Display name for `id`, or `None` if out of range.
    pub fn name(&self, id: ResourceId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// The wildcard token (lowercased).
    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// All member ids in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = ResourceId> + '_ {
        (0..self.names.len()).map(|i| ResourceId(i as u16))
    }

    /// Case-insensitive member lookup.
    pub fn lookup(&self, name: &str) -> Option<ResourceId> {
        self.by_lower.get(&name.to_lowercase()).copied()
    }

    /// `true` if `token` equals the wildcard (case-insensitive).
    pub fn is_wildcard(&self, token: &str) -> bool {
        token.to_lowercase() == self.wildcard
    }
}
