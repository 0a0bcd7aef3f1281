//! Destination-rooted shortest paths over multigraphs with blockable edges.
//!
//! Provides the building blocks for optimization pipelines that re-solve
//! shortest paths many times over a fixed topology with changing costs
//! (e.g. column-generation pricing subproblems):
//!
//! - **Indexed Min-Heap**: binary heap over handles whose records carry
//!   their own heap position, giving O(log n) insert, extract-min,
//!   decrease-key, removal and replacement.
//! - **Graph**: the [`Topology`](graph::Topology) contract consumed by the
//!   solver, and an undirected [`MultiGraph`](graph::MultiGraph) with
//!   parallel edges.
//! - **Dijkstra**: a solver rooted at the destination that collapses
//!   parallel edges to their cheapest member and skips edges whose cost
//!   reaches a forbidden threshold.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! Costs live outside the graph in a plain `&[f64]` indexed by edge id, so
//! blocking an edge for one query is a cost write, not a topology change.
//! No-path outcomes are empty results; only the validated entry points
//! return [`SolverError`].

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod heap;

pub use error::SolverError;
