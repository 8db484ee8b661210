//! Dijkstra's algorithm — uninformed weighted shortest path.

use pt_core::{CancelToken, NodeId};
use pt_graph::RouteGraph;

use crate::heap::MinHeap;
use crate::result::{reconstruct, SearchResult, TraceEdge};

/// Shortest weighted path from `start` to `goal`.
///
/// Nodes are finalized in nondecreasing distance order, so the search stops
/// the moment the goal is popped — its distance is already final.  The
/// trace records one edge per relaxation that actually improved a node's
/// distance, in the order the improvements happened.
///
/// Endpoints outside the graph yield an unreachable result with an empty
/// trace.
pub fn dijkstra(
    graph: &RouteGraph,
    start: NodeId,
    goal: NodeId,
    cancel: &CancelToken,
) -> SearchResult {
    if !graph.contains(start) || !graph.contains(goal) {
        return SearchResult::unreachable(Vec::new(), 0.0);
    }
    if start == goal {
        return SearchResult::trivial(start);
    }

    let n = graph.node_count();
    // dist[v] = best known cost (km) to reach v.
    let mut dist      = vec![f64::INFINITY; n];
    // prev[v] / prev_km[v] = predecessor that set dist[v], and the weight
    // of the edge it relaxed.  NodeId::INVALID marks unreached nodes.
    let mut prev      = vec![NodeId::INVALID; n];
    let mut prev_km   = vec![0.0; n];
    let mut finalized = vec![false; n];

    let mut trace: Vec<TraceEdge> = Vec::new();
    let mut explored_km = 0.0;

    dist[start.index()] = 0.0;
    let mut heap = MinHeap::new();
    heap.push(0.0, start);

    while let Some((d, node)) = heap.pop() {
        if cancel.is_cancelled() {
            return SearchResult::cancelled(trace, explored_km);
        }
        // Skip stale heap entries for already-finalized nodes.
        if finalized[node.index()] {
            continue;
        }
        if node == goal {
            let (path, path_km) = reconstruct(&prev, &prev_km, start, goal);
            return SearchResult::found(path, trace, path_km, explored_km);
        }
        finalized[node.index()] = true;

        for (next, km) in graph.neighbors(node) {
            let nd = d + km;
            if nd < dist[next.index()] {
                dist[next.index()]    = nd;
                prev[next.index()]    = node;
                prev_km[next.index()] = km;
                trace.push(TraceEdge { from: node, to: next });
                explored_km += km;
                heap.push(nd, next);
            }
        }
    }

    SearchResult::unreachable(trace, explored_km)
}
