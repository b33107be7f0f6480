//! Read-only views handed to rendering and table collaborators.

use serde::{Deserialize, Serialize};
use super::{Node, NodeId, Palette, Position};

/// Display format for scheduled starts.
pub const TIME_FORMAT: &str = "%H:%M";

/// An edge as a pair of node ids, older node first.
pub type EdgePair = (NodeId, NodeId);

/// Presentation-boundary view of a node: slots become palette tokens and
/// timestamps become `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub position: Position,
    pub color: Option<String>,
    pub color_index: Option<usize>,
    pub scheduled_start: Option<String>,
}

impl NodeView {
    pub fn from_node(node: &Node, palette: &Palette) -> Self {
        Self {
            id: node.id,
            position: node.position,
            color: node.slot.and_then(|s| palette.token(s)).map(str::to_owned),
            color_index: node.color_index(),
            scheduled_start: node
                .scheduled_start
                .map(|t| t.format(TIME_FORMAT).to_string()),
        }
    }
}

/// Nodes and edges as of the most recent completed operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgePair>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
