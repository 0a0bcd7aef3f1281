//! Destination-rooted Dijkstra shortest paths.
//!
//! Answers one `(source, destination)` query at a time over a
//! [`Topology`](crate::graph::Topology) and a caller-owned cost table.
//! Parallel edges are collapsed on the fly to their cheapest member, and
//! any edge whose cost reaches [`FORBIDDEN_LEN`] (or the configured
//! threshold) is treated as absent for that query. The topology itself is
//! never modified, so callers can block and unblock edges between queries
//! by rewriting costs.
//!
//! # Key Components
//!
//! - [`DijkstraSolver`]: the solver, owning reusable scratch storage
//! - [`SolverConfig`]: forbidden-cost threshold and capacity hint
//! - [`SearchStats`]: counters of the last query
//!
//! # References
//!
//! Dijkstra (1959), "A note on two problems in connexion with graphs"

mod config;
mod runner;
mod types;

pub use config::{SolverConfig, FORBIDDEN_LEN};
pub use runner::{path_cost, DijkstraSolver};
pub use types::{SearchStats, WorkingNode};
