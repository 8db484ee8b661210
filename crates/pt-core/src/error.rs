//! Engine error type.
//!
//! Deliberately small: expected "not found" conditions (unknown start id,
//! unreachable goal, cancelled search) are ordinary `SearchResult` values,
//! not errors — a map click on a node with no route is normal operation.
//! Only genuinely exceptional input reaches this enum.

use thiserror::Error;

/// The error type shared by all `pt-*` crates.
#[derive(Debug, Error)]
pub enum PtError {
    /// An algorithm name outside `dijkstra | astar | bfs | dfs`.
    #[error("unknown algorithm {0:?} (expected dijkstra, astar, bfs or dfs)")]
    UnknownAlgorithm(String),
}

/// Shorthand result type for all `pt-*` crates.
pub type PtResult<T> = Result<T, PtError>;
