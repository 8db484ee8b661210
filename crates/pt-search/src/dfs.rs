//! Depth-first search — exhaustive traversal, no optimality guarantee.

use pt_core::{CancelToken, NodeId};
use pt_graph::RouteGraph;

use crate::result::{reconstruct, SearchResult, TraceEdge};

/// Some path from `start` to `goal`, found depth-first.
///
/// Uses an explicit stack rather than recursion so large graphs cannot
/// overflow the call stack.  Nodes are marked visited when first popped;
/// a node may sit on the stack several times (pushed from different
/// parents), and later pops of it are skipped.
///
/// The trace records every push of an unvisited neighbour, so re-discovery
/// of a node through a second parent shows up as its own trace entry.
/// Each push also overwrites the node's predecessor; since only unvisited
/// nodes are pushed and visited nodes' predecessors are final, the chain
/// walked at reconstruction is the branch the search actually committed to.
///
/// DFS guarantees nothing about the returned path — neither fewest hops
/// nor lowest weight.  It answers only whether the goal is reachable and
/// with which exploration history.
pub fn dfs(
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

    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if cancel.is_cancelled() {
            return SearchResult::cancelled(trace, explored_km);
        }
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;

        if node == goal {
            let (path, path_km) = reconstruct(&prev, &prev_km, start, goal);
            return SearchResult::found(path, trace, path_km, explored_km);
        }

        for (next, km) in graph.neighbors(node) {
            if visited[next.index()] {
                continue;
            }
            prev[next.index()]    = node;
            prev_km[next.index()] = km;
            trace.push(TraceEdge { from: node, to: next });
            explored_km += km;
            stack.push(next);
        }
    }

    SearchResult::unreachable(trace, explored_km)
}
