//! `hearth-core` — foundational types for the hearth household board.
//!
//! This crate is a dependency of every other `hearth-*` crate.  It has no
//! `hearth-*` dependencies and minimal external ones (`chrono`, `rustc-hash`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `ResourceId`                                        |
//! | [`roster`]   | `Roster` — the fixed, ordered set of household members |
//! | [`window`]   | `Window` — the N local calendar days on display     |
//! | [`error`]    | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public data types. |

pub mod error;
pub mod ids;
pub mod roster;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::ResourceId;
pub use roster::Roster;
pub use window::Window;
