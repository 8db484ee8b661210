//! Breadth-first search — fewest-hops traversal.

use std::collections::VecDeque;

use pt_core::{CancelToken, NodeId};
use pt_graph::RouteGraph;

use crate::result::{reconstruct, SearchResult, TraceEdge};

/// Hop-minimal path from `start` to `goal`, ignoring edge weights.
///
/// Explores level by level with a FIFO queue, marking nodes visited on
/// enqueue so each is expanded at most once.  The trace records every
/// `(parent, child)` discovery in expansion order, and the search stops
/// when the goal is dequeued.
///
/// The reported `path_km` sums the real edge weights along the hop-minimal
/// path.  It is a derived statistic, not the search objective: BFS
/// minimizes hops, so `path_km` may exceed the weighted optimum.
pub fn bfs(
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
    let mut visited = vec![false; n];
    let mut prev    = vec![NodeId::INVALID; n];
    let mut prev_km = vec![0.0; n];

    let mut trace: Vec<TraceEdge> = Vec::new();
    let mut explored_km = 0.0;

    let mut queue = VecDeque::new();
    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if cancel.is_cancelled() {
            return SearchResult::cancelled(trace, explored_km);
        }
        if node == goal {
            let (path, path_km) = reconstruct(&prev, &prev_km, start, goal);
            return SearchResult::found(path, trace, path_km, explored_km);
        }

        for (next, km) in graph.neighbors(node) {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            prev[next.index()]    = node;
            prev_km[next.index()] = km;
            trace.push(TraceEdge { from: node, to: next });
            explored_km += km;
            queue.push_back(next);
        }
    }

    SearchResult::unreachable(trace, explored_km)
}
