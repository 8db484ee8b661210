//! Distance markers along a rendered route.

use pt_core::{GeoPoint, NodeId};
use pt_graph::RouteGraph;

/// Default marker spacing.
pub const DEFAULT_INTERVAL_KM: f64 = 1.0;

/// A kilometre marker to draw on top of a route polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMarker {
    /// Position of the path node the marker is anchored to.
    pub position: GeoPoint,

    /// Kilometres covered since the previous marker (or the route start).
    /// Always at least the interval; longer when a single segment overshoots.
    pub km: f64,
}

/// Place a marker each time the accumulated distance along `path` crosses
/// `interval_km`, resetting the accumulator after every marker.
///
/// Spacing follows the geographic distance between consecutive path nodes,
/// not edge weight, because the markers annotate the drawn geometry.
/// Markers land on path nodes (the node whose segment crossed the
/// threshold), so actual spacing is quantized to segment boundaries.
///
/// # Panics
/// Debug builds assert `interval_km > 0`.
pub fn distance_markers(
    graph: &RouteGraph,
    path: &[NodeId],
    interval_km: f64,
) -> Vec<DistanceMarker> {
    debug_assert!(interval_km > 0.0, "non-positive marker interval");

    let mut markers = Vec::new();
    let mut acc = 0.0;
    for pair in path.windows(2) {
        let here = graph.position(pair[1]);
        acc += graph.position(pair[0]).distance_km(here);
        if acc >= interval_km {
            markers.push(DistanceMarker { position: here, km: acc });
            acc = 0.0;
        }
    }
    markers
}
