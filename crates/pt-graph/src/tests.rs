//! Unit tests for pt-graph.
//!
//! All tests use hand-crafted node/edge lists so they run without any data
//! files.

#[cfg(test)]
mod helpers {
    use pt_core::NodeId;
    use crate::{Edge, GraphBuilder, Node, RouteGraph};

    /// Build a small city graph for testing.
    ///
    /// Nodes (lat, lon):
    ///   a:(0,0)  b:(0,1)  c:(0,2)
    ///   d:(1,0)           e:(1,2)
    ///
    /// Undirected edges (weight in km): a-b 1, b-c 1, c-e 1, a-d 5, d-e 1
    ///
    /// Shortest a→e is a→b→c→e (3 km) vs a→d→e (6 km), so route assertions
    /// are deterministic.
    pub fn city_graph() -> (RouteGraph, [NodeId; 5]) {
        let mut b = GraphBuilder::new();
        for (id, lat, lon) in [
            ("a", 0.0, 0.0),
            ("b", 0.0, 1.0),
            ("c", 0.0, 2.0),
            ("d", 1.0, 0.0),
            ("e", 1.0, 2.0),
        ] {
            b.add_node(Node { id: id.into(), lat, lon });
        }
        for (source, target, km) in [
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("c", "e", 1.0),
            ("a", "d", 5.0),
            ("d", "e", 1.0),
        ] {
            b.add_edge(Edge {
                source: source.into(),
                target: target.into(),
                weight: Some(km),
            });
        }
        let g = b.build();
        let ids = ["a", "b", "c", "d", "e"].map(|k| g.resolve(k).unwrap());
        (g, ids)
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use pt_core::GeoPoint;
    use crate::{Edge, GraphBuilder, Node};

    fn node(id: &str, lat: f64, lon: f64) -> Node {
        Node { id: id.into(), lat, lon }
    }

    fn edge(source: &str, target: &str, weight: Option<f64>) -> Edge {
        Edge { source: source.into(), target: target.into(), weight }
    }

    #[test]
    fn empty_build() {
        let g = GraphBuilder::new().build();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn single_edge_is_bidirectional() {
        let mut b = GraphBuilder::new();
        b.add_node(node("a", 30.0, -88.0));
        b.add_node(node("b", 30.1, -88.0));
        b.add_edge(edge("a", "b", Some(2.0)));
        let g = b.build();

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 2); // one entry per direction

        let (a, b) = (g.resolve("a").unwrap(), g.resolve("b").unwrap());
        assert_eq!(g.neighbors(a).collect::<Vec<_>>(), vec![(b, 2.0)]);
        assert_eq!(g.neighbors(b).collect::<Vec<_>>(), vec![(a, 2.0)]);
    }

    #[test]
    fn csr_degrees() {
        let (g, [a, b, c, d, e]) = super::helpers::city_graph();
        assert_eq!(g.out_degree(a), 2); // b, d
        assert_eq!(g.out_degree(b), 2); // a, c
        assert_eq!(g.out_degree(c), 2); // b, e
        assert_eq!(g.out_degree(d), 2); // a, e
        assert_eq!(g.out_degree(e), 2); // c, d
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let (g, [a, b, c, d, e]) = super::helpers::city_graph();
        // a-b was added before a-d, c-e before d-e.
        let a_out: Vec<_> = g.neighbors(a).map(|(to, _)| to).collect();
        assert_eq!(a_out, vec![b, d]);
        let e_out: Vec<_> = g.neighbors(e).map(|(to, _)| to).collect();
        assert_eq!(e_out, vec![c, d]);
    }

    #[test]
    fn build_is_deterministic() {
        let (g1, _) = super::helpers::city_graph();
        let (g2, _) = super::helpers::city_graph();
        assert_eq!(g1.node_key, g2.node_key);
        assert_eq!(g1.node_out_start, g2.node_out_start);
        assert_eq!(g1.edge_to, g2.edge_to);
        assert_eq!(g1.edge_km, g2.edge_km);
    }

    #[test]
    fn duplicate_node_id_keeps_first() {
        let mut b = GraphBuilder::new();
        b.add_node(node("x", 1.0, 1.0));
        b.add_node(node("x", 9.0, 9.0));
        let g = b.build();

        assert_eq!(g.node_count(), 1);
        let x = g.resolve("x").unwrap();
        assert_eq!(g.position(x), GeoPoint::new(1.0, 1.0));
    }

    #[test]
    fn dangling_edge_dropped() {
        let mut b = GraphBuilder::new();
        b.add_node(node("a", 0.0, 0.0));
        b.add_edge(edge("a", "ghost", Some(1.0)));
        b.add_edge(edge("ghost", "a", Some(1.0)));
        let g = b.build();

        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.out_degree(g.resolve("a").unwrap()), 0);
    }

    #[test]
    fn missing_weight_falls_back_to_distance() {
        let mut b = GraphBuilder::new();
        b.add_node(node("a", 0.0, 0.0));
        b.add_node(node("b", 0.0, 1.0));
        b.add_edge(edge("a", "b", None));
        let g = b.build();

        let expect = GeoPoint::new(0.0, 0.0).distance_km(GeoPoint::new(0.0, 1.0));
        let (_, km) = g.neighbors(g.resolve("a").unwrap()).next().unwrap();
        assert_eq!(km, expect);
    }

    #[test]
    fn invalid_weights_fall_back_to_distance() {
        for bad in [Some(-1.0), Some(f64::NAN)] {
            let mut b = GraphBuilder::new();
            b.add_node(node("a", 0.0, 0.0));
            b.add_node(node("b", 0.0, 1.0));
            b.add_edge(edge("a", "b", bad));
            let g = b.build();

            let expect = GeoPoint::new(0.0, 0.0).distance_km(GeoPoint::new(0.0, 1.0));
            let (_, km) = g.neighbors(g.resolve("a").unwrap()).next().unwrap();
            assert_eq!(km, expect);
        }
    }

    #[test]
    fn zero_weight_is_respected() {
        let mut b = GraphBuilder::new();
        b.add_node(node("a", 0.0, 0.0));
        b.add_node(node("b", 0.0, 1.0));
        b.add_edge(edge("a", "b", Some(0.0)));
        let g = b.build();

        let (_, km) = g.neighbors(g.resolve("a").unwrap()).next().unwrap();
        assert_eq!(km, 0.0);
    }

    #[test]
    fn parallel_edges_kept() {
        let mut b = GraphBuilder::new();
        b.add_node(node("a", 0.0, 0.0));
        b.add_node(node("b", 0.0, 1.0));
        b.add_edge(edge("a", "b", Some(1.0)));
        b.add_edge(edge("a", "b", Some(3.0)));
        let g = b.build();

        assert_eq!(g.edge_count(), 4);
        let a = g.resolve("a").unwrap();
        let weights: Vec<_> = g.neighbors(a).map(|(_, km)| km).collect();
        assert_eq!(weights, vec![1.0, 3.0]);
    }

    #[test]
    fn resolve_and_external_id_roundtrip() {
        let (g, [_, _, c, ..]) = super::helpers::city_graph();
        assert_eq!(g.resolve("c"), Some(c));
        assert_eq!(g.external_id(c), "c");
        assert_eq!(g.resolve("nope"), None);
        assert!(g.contains(c));
        assert!(!g.contains(pt_core::NodeId(99)));
    }

    #[test]
    fn from_records_matches_incremental() {
        let nodes = vec![node("a", 0.0, 0.0), node("b", 0.0, 1.0)];
        let edges = vec![edge("a", "b", Some(1.0))];
        let g = GraphBuilder::from_records(nodes, edges).build();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 2);
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use pt_core::GeoPoint;
    use crate::{GraphBuilder, RouteGraph};

    #[test]
    fn snap_exact_position() {
        let (g, [a, ..]) = super::helpers::city_graph();
        // (0.0, 0.0) is exactly node a.
        let snapped = g.nearest_node(GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(snapped, a);
    }

    #[test]
    fn snap_nearest() {
        let (g, [a, b, ..]) = super::helpers::city_graph();
        // (0.0, 0.4) is closer to a (0,0) than to b (0,1); (0.0, 0.6) flips.
        assert_eq!(g.nearest_node(GeoPoint::new(0.0, 0.4)).unwrap(), a);
        assert_eq!(g.nearest_node(GeoPoint::new(0.0, 0.6)).unwrap(), b);
    }

    #[test]
    fn empty_graph_returns_none() {
        let g = GraphBuilder::new().build();
        assert!(g.nearest_node(GeoPoint::new(0.0, 0.0)).is_none());
        assert!(RouteGraph::empty().nearest_node(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn snap_far_outside_graph() {
        let (g, [_, _, _, _, e]) = super::helpers::city_graph();
        // Way beyond the grid, but still snaps to the closest corner.
        let snapped = g.nearest_node(GeoPoint::new(50.0, 50.0)).unwrap();
        assert_eq!(snapped, e);
    }
}
