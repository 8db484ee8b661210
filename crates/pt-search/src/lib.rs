//! `pt-search` — pathfinding with visit-order traces.
//!
//! Four algorithms over a [`pt_graph::RouteGraph`], all returning the same
//! [`SearchResult`] shape: the route itself plus the full exploration
//! history, so a frontend can animate how the search spread before drawing
//! the final path.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`heap`]      | `MinHeap` — f64-keyed binary min-heap                   |
//! | [`result`]    | `SearchResult`, `SearchStatus`, `TraceEdge`             |
//! | [`dijkstra`]  | Weighted shortest path, uninformed                      |
//! | [`astar`]     | Weighted shortest path, haversine-guided                |
//! | [`bfs`]       | Fewest-hops traversal                                   |
//! | [`dfs`]       | Depth-first traversal, no optimality guarantee          |
//! | [`algorithm`] | `Algorithm` selector, `SearchRequest` dispatch          |
//! | [`stitch`]    | Multi-leg waypoint routing                              |
//! | [`markers`]   | Kilometre markers along a route                         |
//!
//! # Cancellation
//!
//! Every search takes a [`pt_core::CancelToken`] and checks it once per
//! node expansion.  A cancelled search returns promptly with the partial
//! trace and [`SearchStatus::Cancelled`]; cancellation is an outcome, not
//! an error.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on results and requests.   |

pub mod algorithm;
pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod heap;
pub mod markers;
pub mod result;
pub mod stitch;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use algorithm::{run_request, Algorithm, SearchRequest};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use heap::MinHeap;
pub use markers::{distance_markers, DistanceMarker};
pub use result::{SearchResult, SearchStatus, TraceEdge};
pub use stitch::{stitch, MultiLegResult};
