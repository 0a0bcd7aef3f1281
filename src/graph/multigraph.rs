//! Adjacency-list multigraph with a parallel-edge index.

use super::types::{EdgeId, NodeId, Topology};
use crate::error::SolverError;
use std::collections::HashMap;

/// An undirected multigraph over dense node ids.
///
/// Edges get consecutive ids in insertion order. Neighbour lists hold each
/// adjacent node once; the edges between a pair are kept in a separate
/// index keyed by the unordered node pair.
///
/// # Examples
///
/// ```
/// use u_shortpath::graph::{MultiGraph, Topology};
///
/// let mut graph = MultiGraph::new(3);
/// let a = graph.add_edge(0, 1).unwrap();
/// let b = graph.add_edge(1, 0).unwrap();
/// graph.add_edge(1, 2).unwrap();
///
/// assert_eq!(graph.adjacent(1), &[0, 2]);
/// assert_eq!(graph.parallel_edges(0, 1), &[a, b]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiGraph {
    adjacency: Vec<Vec<NodeId>>,
    endpoints: Vec<(NodeId, NodeId)>,
    parallel: HashMap<(NodeId, NodeId), Vec<EdgeId>>,
}

/// Unordered pair key.
#[inline]
fn pair(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl MultiGraph {
    /// Creates a graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            endpoints: Vec::new(),
            parallel: HashMap::new(),
        }
    }

    /// Builds a graph from an edge list; edge `i` gets id `i`.
    pub fn from_edges(
        node_count: usize,
        edges: &[(NodeId, NodeId)],
    ) -> Result<Self, SolverError> {
        let mut graph = Self::new(node_count);
        graph.endpoints.reserve(edges.len());
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Appends an isolated node and returns its id.
    pub fn add_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds an edge between `u` and `v` and returns its id.
    ///
    /// Parallel edges are allowed. Self-loops and unknown nodes are
    /// rejected.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId, SolverError> {
        let node_count = self.adjacency.len();
        for node in [u, v] {
            if node >= node_count {
                return Err(SolverError::NodeOutOfRange { node, node_count });
            }
        }
        if u == v {
            return Err(SolverError::SelfLoop { node: u });
        }

        let edge = self.endpoints.len();
        self.endpoints.push((u, v));

        let siblings = self.parallel.entry(pair(u, v)).or_default();
        if siblings.is_empty() {
            self.adjacency[u].push(v);
            self.adjacency[v].push(u);
        }
        siblings.push(edge);
        Ok(edge)
    }

    /// Iterates over `(edge, (u, v))` in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, (NodeId, NodeId))> + '_ {
        self.endpoints.iter().copied().enumerate()
    }

    /// Number of distinct neighbours of `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node].len()
    }
}

impl Topology for MultiGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    fn adjacent(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node]
    }

    fn parallel_edges(&self, u: NodeId, v: NodeId) -> &[EdgeId] {
        self.parallel
            .get(&pair(u, v))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn edge_endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.endpoints[edge]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_edges_symmetric() {
        let graph = MultiGraph::from_edges(3, &[(0, 1), (1, 2), (1, 0), (0, 1)]).unwrap();
        assert_eq!(graph.parallel_edges(0, 1), &[0, 2, 3]);
        assert_eq!(graph.parallel_edges(1, 0), &[0, 2, 3]);
        assert_eq!(graph.parallel_edges(0, 2), &[] as &[EdgeId]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_neighbours_listed_once() {
        let graph = MultiGraph::from_edges(3, &[(0, 1), (0, 1), (0, 2)]).unwrap();
        assert_eq!(graph.adjacent(0), &[1, 2]);
        assert_eq!(graph.adjacent(1), &[0]);
        assert_eq!(graph.degree(0), 2);
    }

    #[test]
    fn test_endpoints_keep_orientation() {
        let graph = MultiGraph::from_edges(2, &[(1, 0)]).unwrap();
        assert_eq!(graph.edge_endpoints(0), (1, 0));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, (1, 0))]);
    }

    #[test]
    fn test_add_node_is_isolated() {
        let mut graph = MultiGraph::from_edges(2, &[(0, 1)]).unwrap();
        let n = graph.add_node();
        assert_eq!(n, 2);
        assert_eq!(graph.node_count(), 3);
        assert!(graph.adjacent(n).is_empty());
    }

    #[test]
    fn test_rejects_bad_edges() {
        let mut graph = MultiGraph::new(2);
        assert_eq!(
            graph.add_edge(0, 5),
            Err(SolverError::NodeOutOfRange {
                node: 5,
                node_count: 2
            })
        );
        assert_eq!(graph.add_edge(1, 1), Err(SolverError::SelfLoop { node: 1 }));
        assert_eq!(graph.edge_count(), 0);
    }
}
