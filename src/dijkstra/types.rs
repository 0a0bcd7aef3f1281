//! Per-query scratch state of the solver.

use crate::graph::{EdgeId, NodeId};
use crate::heap::SlotStore;
use std::cmp::Ordering;

/// Search label of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingNode {
    /// Edge leading one step closer to the destination; `None` while the
    /// node is undiscovered.
    pub predecessor_edge: Option<EdgeId>,
    /// Best known distance to the destination. Meaningful once discovered.
    pub distance: f64,
    /// Position in the priority queue, `None` when not queued.
    pub slot: Option<usize>,
}

impl WorkingNode {
    pub const UNDISCOVERED: WorkingNode = WorkingNode {
        predecessor_edge: None,
        distance: 0.0,
        slot: None,
    };

    pub fn is_discovered(&self) -> bool {
        self.predecessor_edge.is_some()
    }
}

/// Counters describing the last query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the queue, the source included.
    pub settled: usize,
    /// Nodes inserted into the queue.
    pub discovered: usize,
    /// Successful key decreases.
    pub decrease_keys: usize,
    /// Whether the source was reached.
    pub reached: bool,
}

/// Arena of working nodes indexed by node id.
///
/// Cleared, not freed, between queries.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeTable {
    nodes: Vec<WorkingNode>,
}

impl NodeTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Resizes to `node_count` undiscovered entries.
    pub(crate) fn reset(&mut self, node_count: usize) {
        self.nodes.clear();
        self.nodes.resize(node_count, WorkingNode::UNDISCOVERED);
    }

    pub(crate) fn get(&self, node: NodeId) -> Option<&WorkingNode> {
        self.nodes.get(node)
    }

    pub(crate) fn state(&self, node: NodeId) -> WorkingNode {
        self.nodes[node]
    }

    pub(crate) fn discover(&mut self, node: NodeId, edge: EdgeId, distance: f64) {
        let entry = &mut self.nodes[node];
        entry.predecessor_edge = Some(edge);
        entry.distance = distance;
    }

    pub(crate) fn set_predecessor(&mut self, node: NodeId, edge: EdgeId) {
        self.nodes[node].predecessor_edge = Some(edge);
    }

    /// Overwrites the distance and returns `old.cmp(new)`.
    pub(crate) fn set_distance(&mut self, node: NodeId, distance: f64) -> Ordering {
        let entry = &mut self.nodes[node];
        let ord = entry
            .distance
            .partial_cmp(&distance)
            .unwrap_or(Ordering::Equal);
        entry.distance = distance;
        ord
    }
}

impl SlotStore for NodeTable {
    type Handle = NodeId;

    fn compare(&self, a: NodeId, b: NodeId) -> Ordering {
        self.nodes[a]
            .distance
            .partial_cmp(&self.nodes[b].distance)
            .unwrap_or(Ordering::Equal)
    }

    fn slot(&self, h: NodeId) -> Option<usize> {
        self.nodes[h].slot
    }

    fn set_slot(&mut self, h: NodeId, slot: Option<usize>) {
        self.nodes[h].slot = slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_reuses_storage() {
        let mut table = NodeTable::with_capacity(8);
        table.reset(4);
        table.discover(2, 7, 3.5);
        assert!(table.state(2).is_discovered());

        table.reset(3);
        assert_eq!(table.get(2), Some(&WorkingNode::UNDISCOVERED));
        assert_eq!(table.get(3), None);
        assert!(table.nodes.capacity() >= 8);
    }

    #[test]
    fn test_set_distance_direction() {
        let mut table = NodeTable::default();
        table.reset(1);
        table.discover(0, 0, 10.0);
        assert_eq!(table.set_distance(0, 4.0), Ordering::Greater);
        assert_eq!(table.set_distance(0, 6.0), Ordering::Less);
        assert_eq!(table.state(0).distance, 6.0);
    }
}
