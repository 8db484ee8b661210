//! Input records and graph construction.
//!
//! The data layer hands over plain node and edge lists (typically parsed
//! from `nodes.json` / `edges.json`).  [`GraphBuilder`] turns them into a
//! [`RouteGraph`]: it interns string ids into dense [`NodeId`]s, resolves
//! edge weights, inserts both directions of every edge, and lays the result
//! out in CSR form with an R-tree over the node positions.

use std::collections::HashMap;

use log::debug;
use rstar::RTree;

use pt_core::{GeoPoint, NodeId};

use crate::network::{NodeEntry, RouteGraph};

// ── Input records ─────────────────────────────────────────────────────────────

/// A raw input node: an external string id plus a geographic position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:  String,
    pub lat: f64,
    pub lon: f64,
}

/// A raw input edge between two external node ids.
///
/// `weight` is the cost in kilometres.  When it is absent, negative or NaN,
/// the effective weight falls back to the haversine distance between the
/// endpoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] from raw records, then call
/// [`build`](Self::build).
///
/// The builder accepts nodes and edges in any order.  `build()` interns node
/// ids (first occurrence wins on duplicates), drops edges that reference
/// unknown ids, adds each surviving edge in both directions, sorts the
/// adjacency into CSR form, and bulk-loads the R-tree.
///
/// Building is deterministic: the same input lists always produce the same
/// graph, with per-node adjacency in edge-insertion order.
///
/// # Example
///
/// ```
/// use pt_graph::{Edge, GraphBuilder, Node};
///
/// let mut b = GraphBuilder::new();
/// b.add_node(Node { id: "a".into(), lat: 18.52, lon: 73.85 });
/// b.add_node(Node { id: "b".into(), lat: 18.53, lon: 73.86 });
/// b.add_edge(Edge { source: "a".into(), target: "b".into(), weight: None });
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // bidirectional
/// ```
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading parsed files.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// One-shot construction from already-parsed record lists.
    pub fn from_records(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Queue a node record.  Duplicate ids are resolved at build time, first
    /// occurrence wins.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Queue an undirected edge record.  `build()` inserts it in both
    /// directions, or drops it if either endpoint id is unknown.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// Time complexity: O(E log E) for the adjacency sort + O(N log N) for
    /// the R-tree bulk load, where N = nodes, E = edges.
    pub fn build(self) -> RouteGraph {
        // ── Intern node ids (first occurrence wins) ───────────────────────
        let mut node_pos:  Vec<GeoPoint> = Vec::with_capacity(self.nodes.len());
        let mut node_key:  Vec<String>   = Vec::with_capacity(self.nodes.len());
        let mut key_index: HashMap<String, NodeId> = HashMap::with_capacity(self.nodes.len());

        for node in self.nodes {
            if key_index.contains_key(&node.id) {
                debug!("duplicate node id {:?} ignored, keeping first occurrence", node.id);
                continue;
            }
            let id = NodeId(node_pos.len() as u32);
            key_index.insert(node.id.clone(), id);
            node_key.push(node.id);
            node_pos.push(GeoPoint::new(node.lat, node.lon));
        }
        let node_count = node_pos.len();

        // ── Resolve edges, dropping dangling references ───────────────────
        let mut raw: Vec<(NodeId, NodeId, f64)> = Vec::with_capacity(self.edges.len() * 2);
        for edge in &self.edges {
            let (Some(&a), Some(&b)) =
                (key_index.get(&edge.source), key_index.get(&edge.target))
            else {
                debug!(
                    "edge {:?} -> {:?} references an unknown node, dropped",
                    edge.source, edge.target
                );
                continue;
            };
            // NaN and negative weights fail the guard and fall through to
            // the geographic distance.
            let km = match edge.weight {
                Some(w) if w >= 0.0 => w,
                _ => node_pos[a.index()].distance_km(node_pos[b.index()]),
            };
            raw.push((a, b, km));
            raw.push((b, a, km));
        }
        let entry_count = raw.len();

        // Stable sort: entries of equal source keep input order, which fixes
        // each node's adjacency to edge-insertion order.
        raw.sort_by_key(|&(from, _, _)| from.0);

        // ── Build CSR arrays from sorted entries ──────────────────────────
        let edge_to: Vec<NodeId> = raw.iter().map(|&(_, to, _)| to).collect();
        let edge_km: Vec<f64>    = raw.iter().map(|&(_, _, km)| km).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, entry_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = node_pos
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lat, pos.lon],
                id:    NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(
            "built route graph: {} nodes, {} adjacency entries ({} input edges)",
            node_count,
            entry_count,
            self.edges.len()
        );

        RouteGraph {
            node_pos,
            node_key,
            node_out_start,
            edge_to,
            edge_km,
            key_index,
            spatial_idx,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
