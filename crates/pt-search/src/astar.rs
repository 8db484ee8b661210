//! A* — heuristic weighted shortest path.

use pt_core::{CancelToken, NodeId};
use pt_graph::RouteGraph;

use crate::heap::MinHeap;
use crate::result::{reconstruct, SearchResult, TraceEdge};

/// Shortest weighted path from `start` to `goal`, guided by the haversine
/// distance to the goal.
///
/// Identical to [`dijkstra`](crate::dijkstra) except the heap is keyed by
/// `g(node) + h(node)` with `h` the straight-line distance to the goal.
/// The heuristic never overestimates as long as every edge weight is at
/// least the straight-line distance between its endpoints, which holds for
/// all weights derived from geographic distance.  Callers supplying
/// explicit weights below that bound trade away the optimality guarantee;
/// that contract is documented here, not validated per call.
pub fn astar(
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

    let goal_pos = graph.position(goal);
    let h = |v: NodeId| graph.position(v).distance_km(goal_pos);

    let n = graph.node_count();
    // dist[v] = best known path cost g (km) to reach v; the heap is keyed
    // by g + h so the goal surfaces before equally-distant dead ends.
    let mut dist      = vec![f64::INFINITY; n];
    let mut prev      = vec![NodeId::INVALID; n];
    let mut prev_km   = vec![0.0; n];
    let mut finalized = vec![false; n];

    let mut trace: Vec<TraceEdge> = Vec::new();
    let mut explored_km = 0.0;

    dist[start.index()] = 0.0;
    let mut heap = MinHeap::new();
    heap.push(h(start), start);

    while let Some((_, node)) = heap.pop() {
        if cancel.is_cancelled() {
            return SearchResult::cancelled(trace, explored_km);
        }
        if finalized[node.index()] {
            continue;
        }
        if node == goal {
            let (path, path_km) = reconstruct(&prev, &prev_km, start, goal);
            return SearchResult::found(path, trace, path_km, explored_km);
        }
        finalized[node.index()] = true;

        let g = dist[node.index()];
        for (next, km) in graph.neighbors(node) {
            let ng = g + km;
            if ng < dist[next.index()] {
                dist[next.index()]    = ng;
                prev[next.index()]    = node;
                prev_km[next.index()] = km;
                trace.push(TraceEdge { from: node, to: next });
                explored_km += km;
                heap.push(ng + h(next), next);
            }
        }
    }

    SearchResult::unreachable(trace, explored_km)
}
