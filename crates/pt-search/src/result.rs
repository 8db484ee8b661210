//! Search outcome types shared by all four algorithms.
//!
//! Every algorithm returns the same [`SearchResult`] shape, so route
//! stitching and any downstream consumer can treat them uniformly.  The
//! [`TraceEdge`] list is the exploration history in visit order — the
//! frontend replays it edge by edge to animate the search before drawing
//! the final route.

use pt_core::NodeId;

// ── Status ────────────────────────────────────────────────────────────────────

/// Terminal status of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchStatus {
    /// The goal was reached; `path` holds the route.
    Found,
    /// The frontier emptied without reaching the goal, or an endpoint was
    /// not a node of the graph.  A normal outcome, not an error.
    Unreachable,
    /// Stopped early through a `CancelToken`.  `trace` holds whatever was
    /// explored up to the stop.
    Cancelled,
}

// ── Trace ─────────────────────────────────────────────────────────────────────

/// One step of the exploration: the search expanded `from` and discovered
/// (or improved its estimate of) `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEdge {
    pub from: NodeId,
    pub to:   NodeId,
}

// ── SearchResult ──────────────────────────────────────────────────────────────

/// Outcome of a single start→goal search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Route node sequence from start to goal inclusive.  Empty unless
    /// `status` is [`Found`](SearchStatus::Found).
    pub path: Vec<NodeId>,

    /// Exploration history in visit order.
    pub trace: Vec<TraceEdge>,

    /// Total weight of `path` in kilometres, summed over its edges.
    /// 0 when `path` is empty.
    pub path_km: f64,

    /// Total weight of all traced edges in kilometres.  Preserved even for
    /// unreachable and cancelled outcomes.
    pub explored_km: f64,

    pub status: SearchStatus,
}

impl SearchResult {
    /// Start and goal were the same node: a one-node path, nothing explored.
    pub(crate) fn trivial(node: NodeId) -> Self {
        Self {
            path:        vec![node],
            trace:       Vec::new(),
            path_km:     0.0,
            explored_km: 0.0,
            status:      SearchStatus::Found,
        }
    }

    pub(crate) fn found(
        path: Vec<NodeId>,
        trace: Vec<TraceEdge>,
        path_km: f64,
        explored_km: f64,
    ) -> Self {
        Self { path, trace, path_km, explored_km, status: SearchStatus::Found }
    }

    pub(crate) fn unreachable(trace: Vec<TraceEdge>, explored_km: f64) -> Self {
        Self {
            path: Vec::new(),
            trace,
            path_km: 0.0,
            explored_km,
            status: SearchStatus::Unreachable,
        }
    }

    pub(crate) fn cancelled(trace: Vec<TraceEdge>, explored_km: f64) -> Self {
        Self {
            path: Vec::new(),
            trace,
            path_km: 0.0,
            explored_km,
            status: SearchStatus::Cancelled,
        }
    }

    /// `true` if the search reached its goal.
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Walk predecessor links back from `goal`, reverse into start→goal order,
/// and re-sum the recorded step weights.
///
/// Summing `prev_km` (the weight of the edge that set each predecessor)
/// keeps the reported distance exactly equal to the sum over the returned
/// path's edges, independent of the accumulation order inside the search.
///
/// Caller guarantees the goal was reached, i.e. the `prev` chain from
/// `goal` terminates at `start`.
pub(crate) fn reconstruct(
    prev: &[NodeId],
    prev_km: &[f64],
    start: NodeId,
    goal: NodeId,
) -> (Vec<NodeId>, f64) {
    let mut path = vec![goal];
    let mut km = 0.0;
    let mut cur = goal;
    while cur != start {
        let p = prev[cur.index()];
        debug_assert!(p != NodeId::INVALID, "predecessor chain broken at {cur}");
        km += prev_km[cur.index()];
        path.push(p);
        cur = p;
    }
    path.reverse();
    (path, km)
}
