//! # Greedy Coloring
//!
//! First-fit slot assignment over a [`ProximityGraph`].
//!
//! Nodes are swept once in ascending id order. Each node takes the first
//! palette slot not already held by one of its colored neighbors; neighbors
//! later in the sweep are still uncolored and impose nothing. When every slot
//! is taken the node stays uncolored and is recorded as exhausted.
//!
//! The pass is deterministic: same graph and palette, same coloring.

use tracing::{info, warn};

use crate::graph::ProximityGraph;
use crate::model::*;

/// Outcome of one coloring pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    /// Nodes left uncolored because all palette slots were taken by neighbors.
    pub exhausted: Vec<NodeId>,
    /// Number of distinct slots assigned.
    pub slots_used: usize,
}

impl Coloring {
    pub fn is_complete(&self) -> bool {
        self.exhausted.is_empty()
    }
}

/// Deterministic first-fit colorer.
#[derive(Debug, Clone, Copy)]
pub struct GreedyColorer<'p> {
    palette: &'p Palette,
}

impl<'p> GreedyColorer<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    /// Color every node of `graph` in place.
    ///
    /// Resets all slot and schedule assignments first, so no node enters the
    /// sweep pre-colored.
    pub fn color(&self, graph: &mut ProximityGraph) -> Coloring {
        graph.reset_assignments();

        let k = self.palette.len();
        let mut taken = vec![false; k];
        let mut used = vec![false; k];
        let mut coloring = Coloring::default();

        for idx in 0..graph.node_count() {
            taken.iter_mut().for_each(|t| *t = false);
            for &neighbor in graph.adjacent_at(idx) {
                let slot = graph.node(neighbor).and_then(|n| n.slot);
                if let Some(slot) = slot {
                    taken[slot.index()] = true;
                }
            }

            let free = taken.iter().position(|t| !t).map(Slot);
            let node = &mut graph.nodes_mut()[idx];
            match free {
                Some(slot) => {
                    node.slot = Some(slot);
                    if !used[slot.index()] {
                        used[slot.index()] = true;
                        coloring.slots_used += 1;
                    }
                }
                None => {
                    warn!(node = %node.id, palette = k, "palette exhausted, node left uncolored");
                    coloring.exhausted.push(node.id);
                }
            }
        }

        info!(
            nodes = graph.node_count(),
            slots_used = coloring.slots_used,
            exhausted = coloring.exhausted.len(),
            "coloring pass complete"
        );
        coloring
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slots(graph: &ProximityGraph) -> Vec<Option<usize>> {
        graph.nodes().iter().map(|n| n.slot.map(Slot::index)).collect()
    }

    #[test]
    fn test_adjacent_pair_takes_first_two_slots() {
        let palette = Palette::new(["A", "B"]);
        let mut graph = ProximityGraph::default();
        graph.insert(Position::new(0.0, 0.0));
        graph.insert(Position::new(10.0, 0.0));

        let coloring = GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(slots(&graph), vec![Some(0), Some(1)]);
        assert!(coloring.is_complete());
        assert_eq!(coloring.slots_used, 2);
    }

    #[test]
    fn test_isolated_nodes_share_first_slot() {
        let palette = Palette::default();
        let mut graph = ProximityGraph::default();
        graph.insert(Position::new(0.0, 0.0));
        graph.insert(Position::new(500.0, 0.0));
        graph.insert(Position::new(1000.0, 0.0));

        let coloring = GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(slots(&graph), vec![Some(0); 3]);
        assert_eq!(coloring.slots_used, 1);
    }

    #[test]
    fn test_path_alternates() {
        // 1 - 2 - 3 - 4, each only touching its predecessor and successor
        let palette = Palette::default();
        let mut graph = ProximityGraph::default();
        for i in 0..4 {
            graph.insert(Position::new(f64::from(i) * 80.0, 0.0));
        }

        GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(slots(&graph), vec![Some(0), Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn test_first_fit_reuses_lowest_free_slot() {
        // 3 touches only 1; 1 holds slot 0, so 3 takes slot 1 even though
        // 2 (not adjacent to 3) also holds slot 1.
        let palette = Palette::default();
        let mut graph = ProximityGraph::default();
        graph.insert(Position::new(0.0, 0.0));
        graph.insert(Position::new(90.0, 0.0));
        graph.insert(Position::new(-90.0, 0.0));

        GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(slots(&graph), vec![Some(0), Some(1), Some(1)]);
    }

    #[test]
    fn test_triangle_with_single_slot_exhausts() {
        let palette = Palette::new(["only"]);
        let mut graph = ProximityGraph::default();
        graph.insert(Position::new(0.0, 0.0));
        graph.insert(Position::new(10.0, 0.0));
        graph.insert(Position::new(5.0, 8.0));

        let coloring = GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(slots(&graph), vec![Some(0), None, None]);
        assert_eq!(coloring.exhausted, vec![NodeId(2), NodeId(3)]);
        assert!(!coloring.is_complete());
    }

    #[test]
    fn test_exhausted_node_does_not_block_later_nodes() {
        // Node 2 is exhausted; node 3 touches only node 2 and still gets slot 0.
        let palette = Palette::new(["only"]);
        let mut graph = ProximityGraph::default();
        graph.insert(Position::new(0.0, 0.0));
        graph.insert(Position::new(0.0, 50.0));
        graph.insert(Position::new(0.0, 140.0));

        let coloring = GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(slots(&graph), vec![Some(0), None, Some(0)]);
        assert_eq!(coloring.exhausted, vec![NodeId(2)]);
    }

    #[test]
    fn test_recolor_discards_previous_assignment() {
        let palette = Palette::default();
        let mut graph = ProximityGraph::default();
        graph.insert(Position::new(0.0, 0.0));
        graph.nodes_mut()[0].slot = Some(Slot(4));

        GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(slots(&graph), vec![Some(0)]);
    }

    #[test]
    fn test_empty_graph() {
        let palette = Palette::default();
        let mut graph = ProximityGraph::default();
        let coloring = GreedyColorer::new(&palette).color(&mut graph);
        assert_eq!(coloring, Coloring::default());
    }
}
