//! Node placed on the plane.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use super::{Position, Slot};

/// Sequential node identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed element and its current slot assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
    /// Assigned slot; `None` before a coloring pass or on palette exhaustion.
    pub slot: Option<Slot>,
    /// Start of the node's slot, set only for colored nodes by a scheduling pass.
    pub scheduled_start: Option<NaiveDateTime>,
}

impl Node {
    pub fn new(id: NodeId, position: Position) -> Self {
        Self {
            id,
            position,
            slot: None,
            scheduled_start: None,
        }
    }

    /// 1-based rank of the slot within the palette.
    pub fn color_index(&self) -> Option<usize> {
        self.slot.map(Slot::rank)
    }

    pub fn is_colored(&self) -> bool {
        self.slot.is_some()
    }

    /// Drop the slot and schedule ahead of a new coloring pass.
    pub fn reset(&mut self) {
        self.slot = None;
        self.scheduled_start = None;
    }
}
