//! Error types for graph construction and validated queries.

use crate::graph::NodeId;

/// Errors reported at the validated boundary of the crate.
///
/// The fast query path ([`DijkstraSolver::solve`](crate::dijkstra::DijkstraSolver::solve))
/// never returns these; "no path" is signalled by an empty edge sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// A node id is not in `0..node_count`.
    #[error("node {node} is out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    /// The cost table does not cover every edge of the graph.
    #[error("cost table has {len} entries but the graph has {edge_count} edges")]
    CostTableTooShort { len: usize, edge_count: usize },

    /// Both endpoints of an edge are the same node.
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop { node: NodeId },

    /// The solver configuration failed validation.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}
