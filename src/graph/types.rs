//! Core trait for graph topologies.

/// Dense node identifier in `0..node_count`.
pub type NodeId = usize;

/// Edge identifier in `0..edge_count`, also the index into a cost table.
pub type EdgeId = usize;

/// Read-only view of an undirected multigraph.
///
/// Costs are deliberately not part of the topology: callers keep a
/// separate cost table indexed by [`EdgeId`] and may rewrite it between
/// queries without touching the graph.
pub trait Topology {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges, parallel edges counted individually.
    fn edge_count(&self) -> usize;

    /// Distinct neighbours of `node`.
    ///
    /// A neighbour joined by several parallel edges appears once.
    fn adjacent(&self, node: NodeId) -> &[NodeId];

    /// All edges joining `u` and `v`, in insertion order.
    ///
    /// Symmetric: `parallel_edges(u, v) == parallel_edges(v, u)`.
    fn parallel_edges(&self, u: NodeId, v: NodeId) -> &[EdgeId];

    /// The two endpoints of `edge`.
    fn edge_endpoints(&self, edge: EdgeId) -> (NodeId, NodeId);
}
