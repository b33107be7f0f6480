//! # Proximity Graph
//!
//! Owns the node sequence and derives adjacency from geometry: two nodes are
//! adjacent iff their distance is strictly below the threshold.
//!
//! Edges are computed once, when the newer endpoint is inserted, by testing it
//! against every earlier node. The result is the all-pairs threshold graph of
//! the final node set. Node positions never change, so edges are never
//! recomputed or removed except by [`ProximityGraph::clear`].

use hashbrown::HashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::model::*;

/// Default adjacency threshold, in placement units.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Per-node neighbor list. Interactive layouts rarely exceed a handful of
/// neighbors, so these stay inline.
pub(crate) type Neighbors = SmallVec<[NodeId; 8]>;

// ============================================================================
// ProximityGraph
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProximityGraph {
    threshold: f64,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Parallel to `nodes`.
    adjacency: Vec<Neighbors>,
    next_node_id: u64,
}

impl ProximityGraph {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            next_node_id: 1,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a node at `position` and connect it to every earlier node
    /// closer than the threshold.
    pub fn insert(&mut self, position: Position) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;

        let mut linked = Neighbors::new();
        for (existing, adj) in self.nodes.iter().zip(self.adjacency.iter_mut()) {
            if distance(&existing.position, &position) < self.threshold {
                self.edges.push(Edge::new(existing.id, id));
                adj.push(id);
                linked.push(existing.id);
            }
        }

        debug!(node = %id, x = position.x, y = position.y, edges = linked.len(), "node inserted");

        self.nodes.push(Node::new(id, position));
        self.adjacency.push(linked);
        id
    }

    /// Remove every node and edge and restart ids at 1.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), edges = self.edges.len(), "graph cleared");
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.next_node_id = 1;
    }

    /// Reset every node's slot and schedule. Mandatory before a coloring pass.
    pub fn reset_assignments(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Nodes in insertion (ascending id) order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of `id` in the node sequence.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        // Ids are dense from 1 until the next clear.
        let idx = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.nodes.get(idx).filter(|n| n.id == id).map(|_| idx)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// All nodes sharing an edge with `id`. Empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> HashSet<NodeId> {
        self.index_of(id)
            .map(|i| self.adjacency[i].iter().copied().collect())
            .unwrap_or_default()
    }

    /// Neighbor list of the node at sequence position `idx`.
    pub(crate) fn adjacent_at(&self, idx: usize) -> &[NodeId] {
        &self.adjacency[idx]
    }

    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.index_of(a)
            .is_some_and(|i| self.adjacency[i].contains(&b))
    }
}

impl Default for ProximityGraph {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

// ============================================================================
// Tests
// ============================================================================
