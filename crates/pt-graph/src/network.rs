//! Route graph representation.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a `NodeId
//! n`, its adjacency entries occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! `edge_to` and `edge_km` are parallel arrays sorted by source node with a
//! **stable** sort, so each node's entries keep the order in which the input
//! edges appeared.  Visit traces replay expansion order, so that order must
//! be deterministic.  Iteration over a node's neighbours is a contiguous
//! memory scan — ideal for the relaxation inner loop.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to snap clicked map positions and dragged waypoints to graph nodes.
//!
//! # External ids
//!
//! Input data identifies nodes by strings.  The build step interns those
//! into dense `NodeId`s and keeps both directions of the mapping; everything
//! past the build boundary speaks `NodeId`.

use std::collections::HashMap;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use pt_core::{GeoPoint, NodeId};

use crate::builder::GraphBuilder;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
pub(crate) struct NodeEntry {
    pub(crate) point: [f64; 2], // [lat, lon]
    pub(crate) id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries within a city (error < 0.1 % at ≤ 60° lat), and
    /// the metric must agree with the point envelopes for the R-tree's
    /// pruning to hold, so no cos-latitude correction here.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Undirected geographic graph in CSR format plus a spatial index for node
/// snapping.
///
/// Immutable once built; searches only read it, so any number of them may
/// run concurrently over a shared graph.  Array fields are `pub` for direct
/// indexed access on hot paths.  Do not construct directly; use
/// [`GraphBuilder`].
pub struct RouteGraph {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    /// Geographic position of each node.
    pub node_pos: Vec<GeoPoint>,

    /// External (input) id of each node.
    pub node_key: Vec<String>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Adjacency entries of node `n` are at positions
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Neighbour reached by each adjacency entry.
    pub edge_to: Vec<NodeId>,

    /// Weight of each adjacency entry in kilometres.
    pub edge_km: Vec<f64>,

    // ── Lookup structures ─────────────────────────────────────────────────
    /// External id → dense index.
    pub(crate) key_index: HashMap<String, NodeId>,

    /// Spatial index over `node_pos`.
    pub(crate) spatial_idx: RTree<NodeEntry>,
}

impl RouteGraph {
    /// Construct an empty graph with no nodes or edges.
    ///
    /// Any search over an empty graph reports its target unreachable, and
    /// [`nearest_node`](Self::nearest_node) returns `None`.
    pub fn empty() -> Self {
        GraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed adjacency entries (two per input edge).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` if `node` is a live index into this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    // ── Node lookups ──────────────────────────────────────────────────────

    /// Resolve an external id to its dense index.
    pub fn resolve(&self, key: &str) -> Option<NodeId> {
        self.key_index.get(key).copied()
    }

    /// External id of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range; gate with
    /// [`contains`](Self::contains) when the id comes from untrusted input.
    #[inline]
    pub fn external_id(&self, node: NodeId) -> &str {
        &self.node_key[node.index()]
    }

    /// Geographic position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn position(&self, node: NodeId) -> GeoPoint {
        self.node_pos[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `(neighbour, weight_km)` adjacency entries of
    /// `node`, in edge-insertion order.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| (self.edge_to[i], self.edge_km[i]))
    }

    /// Degree of `node` (number of adjacency entries).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the graph node nearest to `pos`.
    ///
    /// Returns `None` only if the graph has no nodes.  This is the snapping
    /// step behind map clicks and waypoint drags.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }
}
