//! Core error type.
//!
//! Malformed *feed records* never surface here — the layout engine filters
//! them (an untagged or unparsable event is simply not shown).  `CoreError`
//! covers the things that genuinely are caller mistakes: an invalid roster
//! configuration.

use thiserror::Error;

/// The top-level error type for `hearth-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `hearth-core`.
pub type CoreResult<T> = Result<T, CoreError>;
