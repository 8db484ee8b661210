//! Multi-leg route stitching over ordered waypoints.

use pt_core::{CancelToken, GeoPoint, NodeId};
use pt_graph::RouteGraph;

use crate::algorithm::Algorithm;
use crate::result::{SearchStatus, TraceEdge};

/// Aggregate outcome of a waypoint route: every leg's result concatenated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLegResult {
    /// Concatenated route, shared boundary nodes deduplicated.  Empty
    /// unless every leg was found.
    pub path: Vec<NodeId>,

    /// Concatenated exploration history in leg order, so an animation
    /// plays the legs sequentially.
    pub trace: Vec<TraceEdge>,

    /// Sum of leg path distances in kilometres.
    pub path_km: f64,

    /// Sum of leg exploration distances in kilometres.
    pub explored_km: f64,

    /// Number of leg searches that ran (including a failed final one).
    pub legs: usize,

    pub status: SearchStatus,
}

impl MultiLegResult {
    /// `true` if every leg reached its goal.
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    fn unresolved() -> Self {
        Self {
            path:        Vec::new(),
            trace:       Vec::new(),
            path_km:     0.0,
            explored_km: 0.0,
            legs:        0,
            status:      SearchStatus::Unreachable,
        }
    }
}

/// Route through `waypoints` in order, running `algorithm` on each
/// consecutive pair.
///
/// Each waypoint is snapped to its nearest graph node first.  Legs are
/// concatenated without duplicating the shared boundary node; traces are
/// concatenated in leg order; distances are summed.
///
/// A single broken leg invalidates the whole route: stitching stops at the
/// first unreachable (or cancelled) leg and returns an empty aggregate
/// path, keeping the exploration history accumulated so far.  Fewer than
/// two waypoints, or waypoints over an empty graph, resolve to no legs and
/// an unreachable result.
pub fn stitch(
    graph: &RouteGraph,
    algorithm: Algorithm,
    waypoints: &[GeoPoint],
    cancel: &CancelToken,
) -> MultiLegResult {
    if waypoints.len() < 2 {
        return MultiLegResult::unresolved();
    }

    // Snap every waypoint up front; snapping only fails on an empty graph.
    let mut stops: Vec<NodeId> = Vec::with_capacity(waypoints.len());
    for wp in waypoints {
        match graph.nearest_node(*wp) {
            Some(node) => stops.push(node),
            None => return MultiLegResult::unresolved(),
        }
    }

    let mut path: Vec<NodeId> = Vec::new();
    let mut trace: Vec<TraceEdge> = Vec::new();
    let mut path_km = 0.0;
    let mut explored_km = 0.0;
    let mut legs = 0;

    for pair in stops.windows(2) {
        let leg = algorithm.run(graph, pair[0], pair[1], cancel);
        legs += 1;
        trace.extend_from_slice(&leg.trace);
        explored_km += leg.explored_km;

        match leg.status {
            SearchStatus::Found => {
                path_km += leg.path_km;
                // Legs share their boundary node; skip it after the first leg.
                let skip = if path.is_empty() { 0 } else { 1 };
                path.extend_from_slice(&leg.path[skip..]);
            }
            status @ (SearchStatus::Unreachable | SearchStatus::Cancelled) => {
                return MultiLegResult {
                    path: Vec::new(),
                    trace,
                    path_km: 0.0,
                    explored_km,
                    legs,
                    status,
                };
            }
        }
    }

    MultiLegResult {
        path,
        trace,
        path_km,
        explored_km,
        legs,
        status: SearchStatus::Found,
    }
}
