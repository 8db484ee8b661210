//! `pt-core` — foundational types for the pathtrace pathfinding engine.
//!
//! This crate is a dependency of every other `pt-*` crate.  It intentionally
//! has no `pt-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `NodeId` dense index newtype               |
//! | [`geo`]    | `GeoPoint`, haversine distance in km       |
//! | [`cancel`] | `CancelToken` cooperative cancellation     |
//! | [`error`]  | `PtError`, `PtResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cancel;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cancel::CancelToken;
pub use error::{PtError, PtResult};
pub use geo::GeoPoint;
pub use ids::NodeId;
