//! citygrid — route search comparison over a synthetic city street grid.
//!
//! Builds a jittered street grid around a city centre (or loads
//! `nodes.json` / `edges.json` passed as arguments), runs all four search
//! algorithms between opposite corners of the map, and prints route length
//! against exploration effort for each.  Fixed seed, so the same output on
//! every run.
//!
//! Usage:
//!   citygrid                        synthetic grid
//!   citygrid nodes.json edges.json  data files in the wire format

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pt_core::{CancelToken, GeoPoint};
use pt_graph::{Edge, GraphBuilder, Node};
use pt_search::{distance_markers, stitch, Algorithm};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64   = 42;
const GRID_SIDE:    usize = 24;
const SPACING_DEG:  f64   = 0.004;               // ~445 m between intersections
const AVENUE_COUNT: usize = 30;                  // random cross-grid chords
const CENTER:       (f64, f64) = (18.5204, 73.8567); // Pune
const MARKER_INTERVAL_KM: f64 = 1.0;

// ── Synthetic city ────────────────────────────────────────────────────────────

/// Street grid with jittered intersections, lattice links to the right and
/// down neighbours, and a handful of longer avenue chords between nearby
/// rows.  All weights come from geographic distance.
fn synthetic_city(seed: u64) -> (Vec<Node>, Vec<Edge>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let jitter = SPACING_DEG / 3.0;

    let mut nodes = Vec::with_capacity(GRID_SIDE * GRID_SIDE);
    let mut edges = Vec::new();
    for r in 0..GRID_SIDE {
        for c in 0..GRID_SIDE {
            nodes.push(Node {
                id:  format!("{r}-{c}"),
                lat: CENTER.0 + r as f64 * SPACING_DEG + rng.gen_range(-jitter..jitter),
                lon: CENTER.1 + c as f64 * SPACING_DEG + rng.gen_range(-jitter..jitter),
            });
            if c + 1 < GRID_SIDE {
                edges.push(Edge {
                    source: format!("{r}-{c}"),
                    target: format!("{r}-{}", c + 1),
                    weight: None,
                });
            }
            if r + 1 < GRID_SIDE {
                edges.push(Edge {
                    source: format!("{r}-{c}"),
                    target: format!("{}-{c}", r + 1),
                    weight: None,
                });
            }
        }
    }

    // Avenues: chords between an intersection and another a few index
    // steps away, like the diagonal shortcuts of a real street plan.
    let node_count = nodes.len() as i64;
    let mut added = 0;
    while added < AVENUE_COUNT {
        let source = rng.gen_range(0..node_count);
        let target = (source + rng.gen_range(-10..=10)).clamp(0, node_count - 1);
        if source == target {
            continue;
        }
        edges.push(Edge {
            source: nodes[source as usize].id.clone(),
            target: nodes[target as usize].id.clone(),
            weight: None,
        });
        added += 1;
    }

    (nodes, edges)
}

// ── Data files ────────────────────────────────────────────────────────────────

fn load_files(nodes_path: &str, edges_path: &str) -> Result<(Vec<Node>, Vec<Edge>)> {
    let nodes = serde_json::from_str(
        &fs::read_to_string(nodes_path).with_context(|| format!("reading {nodes_path}"))?,
    )
    .with_context(|| format!("parsing {nodes_path}"))?;
    let edges = serde_json::from_str(
        &fs::read_to_string(edges_path).with_context(|| format!("reading {edges_path}"))?,
    )
    .with_context(|| format!("parsing {edges_path}"))?;
    Ok((nodes, edges))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== citygrid — route search comparison ===");

    // 1. Source the graph records.
    let args: Vec<String> = env::args().collect();
    let (nodes, edges, source) = match args.as_slice() {
        [_, nodes_path, edges_path] => {
            let (n, e) = load_files(nodes_path, edges_path)?;
            (n, e, format!("{nodes_path} + {edges_path}"))
        }
        [_] => {
            let (n, e) = synthetic_city(SEED);
            (n, e, format!("synthetic {GRID_SIDE}×{GRID_SIDE} grid, seed {SEED}"))
        }
        _ => bail!("usage: citygrid [nodes.json edges.json]"),
    };
    println!("Graph source: {source}");

    // 2. Build the graph.
    let t0 = Instant::now();
    let graph = GraphBuilder::from_records(nodes, edges).build();
    println!(
        "Built graph: {} nodes, {} adjacency entries in {:.1} ms",
        graph.node_count(),
        graph.edge_count(),
        t0.elapsed().as_secs_f64() * 1e3
    );
    println!();

    // 3. Snap the south-west and north-east extremes to graph nodes.
    let mut lat = (f64::INFINITY, f64::NEG_INFINITY);
    let mut lon = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &graph.node_pos {
        lat = (lat.0.min(p.lat), lat.1.max(p.lat));
        lon = (lon.0.min(p.lon), lon.1.max(p.lon));
    }
    let sw = GeoPoint::new(lat.0, lon.0);
    let ne = GeoPoint::new(lat.1, lon.1);
    let start = graph.nearest_node(sw).context("graph has no nodes")?;
    let goal  = graph.nearest_node(ne).context("graph has no nodes")?;
    println!(
        "Route: {} {} -> {} {}",
        graph.external_id(start),
        graph.position(start),
        graph.external_id(goal),
        graph.position(goal)
    );
    println!();

    // 4. Run all four algorithms on the same pair.
    let token = CancelToken::new();
    println!(
        "{:<10} {:>6} {:>10} {:>13} {:>13} {:>9}",
        "algorithm", "found", "path km", "explored km", "trace edges", "time ms"
    );
    println!("{}", "-".repeat(66));
    for algorithm in Algorithm::ALL {
        let t = Instant::now();
        let r = algorithm.run(&graph, start, goal, &token);
        let ms = t.elapsed().as_secs_f64() * 1e3;
        println!(
            "{:<10} {:>6} {:>10.3} {:>13.3} {:>13} {:>9.2}",
            algorithm.as_str(),
            if r.is_found() { "yes" } else { "no" },
            r.path_km,
            r.explored_km,
            r.trace.len(),
            ms
        );
    }
    println!();

    // 5. Waypoint route: corner to corner via the city centre.
    let centre = GeoPoint::new((lat.0 + lat.1) / 2.0, (lon.0 + lon.1) / 2.0);
    let multi = stitch(&graph, Algorithm::AStar, &[sw, centre, ne], &token);
    println!(
        "A* via centre: {} legs, {} route nodes, {:.3} km ({:.3} km explored)",
        multi.legs,
        multi.path.len(),
        multi.path_km,
        multi.explored_km
    );
    println!();

    // 6. Kilometre markers along the Dijkstra route.
    let route = Algorithm::Dijkstra.run(&graph, start, goal, &token);
    let markers = distance_markers(&graph, &route.path, MARKER_INTERVAL_KM);
    println!("Dijkstra route markers (every {MARKER_INTERVAL_KM} km):");
    for (i, marker) in markers.iter().enumerate() {
        println!("  #{:<3} +{:.3} km at {}", i + 1, marker.km, marker.position);
    }

    Ok(())
}
