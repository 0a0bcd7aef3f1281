//! Destination-rooted Dijkstra search.
//!
//! # Algorithm
//!
//! 1. Reset the queue and the working-node table
//! 2. Relax every neighbour of the destination (distance 0, never queued)
//! 3. Repeatedly settle the closest queued node:
//!    a. Stop as soon as the source is settled
//!    b. Otherwise relax all its neighbours through their cheapest
//!       usable parallel edge
//! 4. Walk predecessor edges from the source back to the destination
//!
//! Rooting the search at the destination leaves every settled node
//! labelled with its distance *to* the destination, which is what callers
//! re-querying the same destination under changing costs consume.
//!
//! # Reference
//!
//! Dijkstra, E. W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use super::config::SolverConfig;
use super::types::{NodeTable, SearchStats, WorkingNode};
use crate::error::SolverError;
use crate::graph::{EdgeId, NodeId, Topology};
use crate::heap::IndexedMinHeap;
use std::cmp::Ordering;
use tracing::debug;

/// Shortest-path solver bound to one graph topology.
///
/// Scratch storage lives on the instance and is reused by every query, so
/// a solver answers one query at a time; use one instance per thread for
/// concurrent queries.
///
/// # Examples
///
/// ```
/// use u_shortpath::dijkstra::{path_cost, DijkstraSolver, FORBIDDEN_LEN};
/// use u_shortpath::graph::MultiGraph;
///
/// let graph = MultiGraph::from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
/// let mut costs = vec![1.0, 1.0, 5.0, 1.0];
/// let mut solver = DijkstraSolver::new(&graph);
///
/// let path = solver.solve(&costs, 0, 3);
/// assert_eq!(path, vec![0, 1, 3]);
/// assert_eq!(path_cost(&costs, &path), 3.0);
///
/// costs[1] = FORBIDDEN_LEN;
/// assert_eq!(solver.solve(&costs, 0, 3), vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct DijkstraSolver<'g, G> {
    graph: &'g G,
    config: SolverConfig,
    nodes: NodeTable,
    queue: IndexedMinHeap<NodeId>,
    stats: SearchStats,
    last_query: Option<(NodeId, NodeId)>,
}

impl<'g, G: Topology> DijkstraSolver<'g, G> {
    /// Creates a solver with the default configuration.
    pub fn new(graph: &'g G) -> Self {
        Self::build(graph, SolverConfig::default())
    }

    /// Creates a solver with a custom configuration.
    pub fn with_config(graph: &'g G, config: SolverConfig) -> Result<Self, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;
        Ok(Self::build(graph, config))
    }

    fn build(graph: &'g G, config: SolverConfig) -> Self {
        Self {
            graph,
            config,
            nodes: NodeTable::with_capacity(config.capacity_hint),
            queue: IndexedMinHeap::with_capacity(config.capacity_hint),
            stats: SearchStats::default(),
            last_query: None,
        }
    }

    /// Topology the solver runs on.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns a minimum-cost edge sequence from `src` to `dst`.
    ///
    /// `costs[e]` is the cost of edge `e`; edges costing at least
    /// [`forbidden_len`](SolverConfig::forbidden_len) are ignored. Costs
    /// must be non-negative. An empty result means `dst` is unreachable
    /// from `src`, or `src == dst`.
    ///
    /// # Panics
    ///
    /// Panics if `src` or `dst` is not a node of the graph. The cost table
    /// length is only checked by slice indexing; see
    /// [`solve_checked`](Self::solve_checked) for a non-panicking boundary.
    pub fn solve(&mut self, costs: &[f64], src: NodeId, dst: NodeId) -> Vec<EdgeId> {
        let node_count = self.graph.node_count();
        assert!(
            src < node_count && dst < node_count,
            "query ({src}, {dst}) is out of range for a graph with {node_count} nodes"
        );

        self.queue.reset(&mut self.nodes);
        self.nodes.reset(node_count);
        self.stats = SearchStats::default();
        self.last_query = Some((src, dst));

        if src == dst {
            debug!(src, dst, "trivial query, empty path");
            return Vec::new();
        }

        self.relax_neighbours(costs, dst, dst);

        let mut frontier = 0.0;
        while let Some(u) = self.queue.pop(&mut self.nodes) {
            let distance = self.nodes.state(u).distance;
            debug_assert!(distance >= frontier, "settled distances must not decrease");
            frontier = distance;
            self.stats.settled += 1;
            if u == src {
                self.stats.reached = true;
                let path = self.make_path(src, dst);
                debug!(
                    src,
                    dst,
                    edges = path.len(),
                    distance,
                    settled = self.stats.settled,
                    "shortest path found"
                );
                return path;
            }
            self.relax_neighbours(costs, u, dst);
        }

        debug!(src, dst, settled = self.stats.settled, "no path");
        Vec::new()
    }

    /// Like [`solve`](Self::solve), but validates node ids and the cost
    /// table length first.
    pub fn solve_checked(
        &mut self,
        costs: &[f64],
        src: NodeId,
        dst: NodeId,
    ) -> Result<Vec<EdgeId>, SolverError> {
        let node_count = self.graph.node_count();
        for node in [src, dst] {
            if node >= node_count {
                return Err(SolverError::NodeOutOfRange { node, node_count });
            }
        }
        let edge_count = self.graph.edge_count();
        if costs.len() < edge_count {
            return Err(SolverError::CostTableTooShort {
                len: costs.len(),
                edge_count,
            });
        }
        Ok(self.solve(costs, src, dst))
    }

    /// Relaxes every neighbour of the settled node `u`.
    ///
    /// `dst` is the search root and is never queued.
    fn relax_neighbours(&mut self, costs: &[f64], u: NodeId, dst: NodeId) {
        let graph = self.graph;
        let base = self.nodes.state(u).distance;

        for &n in graph.adjacent(u) {
            if n == dst {
                continue;
            }
            let Some((edge, cost)) = cheapest_edge(graph.parallel_edges(u, n), costs) else {
                continue;
            };
            if cost >= self.config.forbidden_len {
                continue;
            }

            let candidate = base + cost;
            let state = self.nodes.state(n);
            if !state.is_discovered() {
                self.nodes.discover(n, edge, candidate);
                self.queue.insert(&mut self.nodes, n);
                self.stats.discovered += 1;
            } else if let Some(slot) = state.slot {
                // Settled nodes are no longer queued and keep their label.
                if candidate < state.distance {
                    self.nodes.set_predecessor(n, edge);
                    self.queue.update(&mut self.nodes, slot, |nodes, h| {
                        nodes.set_distance(h, candidate)
                    });
                    self.stats.decrease_keys += 1;
                }
            }
        }
    }

    /// Follows predecessor edges from `src` until `dst`.
    fn make_path(&self, src: NodeId, dst: NodeId) -> Vec<EdgeId> {
        let mut path = Vec::new();
        let mut node = src;
        while node != dst {
            // Every settled node but the root has a predecessor.
            let Some(edge) = self.nodes.state(node).predecessor_edge else {
                break;
            };
            path.push(edge);
            let (a, b) = self.graph.edge_endpoints(edge);
            node = if node != a { a } else { b };
        }
        path
    }
}

impl<G> DijkstraSolver<'_, G> {
    /// Counters of the last query.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// `(src, dst)` of the last query.
    pub fn last_query(&self) -> Option<(NodeId, NodeId)> {
        self.last_query
    }

    /// Distance from `node` to the destination of the last query.
    ///
    /// `None` if the node was never discovered. The label is final for
    /// settled nodes and the destination itself, an upper bound for nodes
    /// still queued when the search stopped.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        match self.last_query {
            Some((_, dst)) if dst == node => Some(0.0),
            Some(_) => self
                .nodes
                .get(node)
                .filter(|n| n.is_discovered())
                .map(|n| n.distance),
            None => None,
        }
    }

    /// First edge on the best known path from `node` to the destination
    /// of the last query.
    pub fn predecessor_edge(&self, node: NodeId) -> Option<EdgeId> {
        self.nodes.get(node).and_then(|n| n.predecessor_edge)
    }

    /// Raw scratch record of `node` from the last query.
    pub fn working_node(&self, node: NodeId) -> Option<&WorkingNode> {
        self.nodes.get(node)
    }
}

/// Minimum-cost edge among parallel siblings; the first one wins ties.
fn cheapest_edge(edges: &[EdgeId], costs: &[f64]) -> Option<(EdgeId, f64)> {
    edges
        .iter()
        .map(|&e| (e, costs[e]))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
}

/// Total cost of an edge sequence.
pub fn path_cost(costs: &[f64], path: &[EdgeId]) -> f64 {
    path.iter().map(|&e| costs[e]).sum()
}
