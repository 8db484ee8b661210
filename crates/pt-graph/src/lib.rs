//! `pt-graph` — geographic route graph, construction, and nearest-node
//! snapping.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`builder`] | `Node` / `Edge` input records, `GraphBuilder`               |
//! | [`network`] | `RouteGraph` (CSR adjacency + R-tree snapping)              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the input record types. |

pub mod builder;
pub mod network;

#[cfg(test)]
mod tests;

pub use builder::{Edge, GraphBuilder, Node};
pub use network::RouteGraph;
