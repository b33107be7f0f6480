//! Proximity edge between two nodes.

use serde::{Deserialize, Serialize};
use super::NodeId;

/// An undirected edge. `older` was inserted before `newer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub older: NodeId,
    pub newer: NodeId,
}

impl Edge {
    pub fn new(older: NodeId, newer: NodeId) -> Self {
        Self { older, newer }
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.older == id || self.newer == id
    }

    /// The other end of the edge from the given node.
    pub fn other_node(&self, from: NodeId) -> Option<NodeId> {
        if from == self.older { Some(self.newer) }
        else if from == self.newer { Some(self.older) }
        else { None }
    }

    pub fn as_pair(&self) -> (NodeId, NodeId) {
        (self.older, self.newer)
    }
}
