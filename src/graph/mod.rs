//! Undirected multigraph topology.
//!
//! The shortest-path solver only reads topology through the [`Topology`]
//! trait, so any graph representation can be plugged in. [`MultiGraph`]
//! is the bundled implementation: dense node ids, parallel edges allowed,
//! self-loops rejected.

mod multigraph;
mod types;

pub use multigraph::MultiGraph;
pub use types::{EdgeId, NodeId, Topology};
