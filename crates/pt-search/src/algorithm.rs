//! Algorithm selection and request dispatch.

use std::fmt;
use std::str::FromStr;

use log::debug;

use pt_core::{CancelToken, NodeId, PtError};
use pt_graph::RouteGraph;

use crate::astar::astar;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::dijkstra::dijkstra;
use crate::result::SearchResult;

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// The four search algorithms, selectable at run time.
///
/// Parses from and serializes to the lowercase names used on the wire
/// (`"dijkstra"`, `"astar"`, `"bfs"`, `"dfs"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 4] = [Self::Dijkstra, Self::AStar, Self::Bfs, Self::Dfs];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar    => "astar",
            Self::Bfs      => "bfs",
            Self::Dfs      => "dfs",
        }
    }

    /// Run this algorithm over `graph` from `start` to `goal`.
    pub fn run(
        self,
        graph: &RouteGraph,
        start: NodeId,
        goal: NodeId,
        cancel: &CancelToken,
    ) -> SearchResult {
        match self {
            Self::Dijkstra => dijkstra(graph, start, goal, cancel),
            Self::AStar    => astar(graph, start, goal, cancel),
            Self::Bfs      => bfs(graph, start, goal, cancel),
            Self::Dfs      => dfs(graph, start, goal, cancel),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = PtError;

    fn from_str(s: &str) -> Result<Self, PtError> {
        match s {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar"    => Ok(Self::AStar),
            "bfs"      => Ok(Self::Bfs),
            "dfs"      => Ok(Self::Dfs),
            other      => Err(PtError::UnknownAlgorithm(other.to_string())),
        }
    }
}

// ── SearchRequest ─────────────────────────────────────────────────────────────

/// A search request as the data layer presents it: an algorithm plus the
/// external ids of the start and end nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchRequest {
    pub algorithm: Algorithm,
    pub start_id:  String,
    pub end_id:    String,
}

/// Resolve a request's external ids against `graph` and run its algorithm.
///
/// An unknown start or end id yields an unreachable result with an empty
/// trace.  "No route from an unknown point" is a normal outcome for a
/// caller presenting a map, not an error.
pub fn run_request(
    graph: &RouteGraph,
    request: &SearchRequest,
    cancel: &CancelToken,
) -> SearchResult {
    let (Some(start), Some(goal)) = (
        graph.resolve(&request.start_id),
        graph.resolve(&request.end_id),
    ) else {
        debug!(
            "request {} -> {} references an unknown node id",
            request.start_id, request.end_id
        );
        return SearchResult::unreachable(Vec::new(), 0.0);
    };
    request.algorithm.run(graph, start, goal, cancel)
}
