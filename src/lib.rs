//! # runtime-slots — Proximity Coloring and Slot Scheduling
//!
//! Places elements on a plane, connects any two closer than a threshold, and
//! gives each a time slot so that no two connected elements share one.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `ProximityGraph` is the single source of truth for nodes,
//!    edges and assignments; `Scheduler` guards it behind one lock
//! 2. **Slots are indices**: palette tokens appear only in `NodeView`
//! 3. **Full recompute**: every pass resets, colors, then schedules the whole graph
//! 4. **Exhaustion is data**: nodes the palette cannot color are reported, not dropped
//!
//! ## Quick Start
//!
//! ```rust
//! use runtime_slots::Scheduler;
//!
//! # fn example() -> runtime_slots::Result<()> {
//! let scheduler = Scheduler::with_defaults();
//! scheduler.add_node(0.0, 0.0);
//! scheduler.add_node(50.0, 0.0);
//!
//! let outcome = scheduler.color_and_schedule("09:00", "15")?;
//! for node in &outcome.nodes {
//!     println!("{} {:?} {:?}", node.id, node.color, node.scheduled_start);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod coloring;
pub mod schedule;
pub mod config;
pub mod export;

use parking_lot::RwLock;
use tracing::debug;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Node, NodeId, Edge, Position, Palette, Slot,
    NodeView, EdgePair, Snapshot,
};
pub use graph::ProximityGraph;
pub use coloring::{Coloring, GreedyColorer};
pub use schedule::{ScheduleParams, ScheduleMapper, SlotWindow};
pub use config::SchedulerConfig;

// ============================================================================
// Scheduler handle
// ============================================================================

/// The entry point for placement and interaction collaborators.
///
/// All methods take `&self`; the graph sits behind a single-writer lock and
/// [`Scheduler::color_and_schedule`] holds it for the whole reset, color and
/// schedule sequence, so readers never see a half-applied pass.
pub struct Scheduler {
    config: SchedulerConfig,
    state: RwLock<SchedulerState>,
}

struct SchedulerState {
    graph: ProximityGraph,
    /// Parameters of the last successful pass since the last clear.
    params: Option<ScheduleParams>,
}

impl SchedulerState {
    fn new(threshold: f64) -> Self {
        Self { graph: ProximityGraph::new(threshold), params: None }
    }
}

/// Result of a successful [`Scheduler::color_and_schedule`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    /// Every node after the pass, in id order.
    pub nodes: Vec<NodeView>,
    /// Nodes left uncolored by palette exhaustion.
    pub exhausted: Vec<NodeId>,
    /// Distinct slots in use.
    pub slots_used: usize,
    pub params: ScheduleParams,
}

impl ScheduleOutcome {
    pub fn is_complete(&self) -> bool {
        self.exhausted.is_empty()
    }
}

impl Scheduler {
    /// Build a scheduler after validating `config`.
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: RwLock::new(SchedulerState::new(config.threshold_distance)),
            config,
        })
    }

    /// Threshold 100 and the six-color default palette.
    pub fn with_defaults() -> Self {
        let config = SchedulerConfig::default();
        Self {
            state: RwLock::new(SchedulerState::new(config.threshold_distance)),
            config,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Place a node at canvas coordinates `(x, y)`.
    pub fn add_node(&self, x: f64, y: f64) -> NodeId {
        self.state.write().graph.insert(Position::new(x, y))
    }

    /// Drop every node and edge; the next node gets id 1.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.graph.clear();
        state.params = None;
    }

    /// Parse the inputs, then recolor and reschedule the whole graph.
    ///
    /// Assignments are reset before the inputs are validated. On invalid
    /// input every node is left uncolored and unscheduled and the error is
    /// returned; nodes and edges are untouched either way.
    pub fn color_and_schedule(&self, start: &str, slot_minutes: &str) -> Result<ScheduleOutcome> {
        let mut state = self.state.write();
        state.graph.reset_assignments();
        state.params = None;

        let params = ScheduleParams::parse(start, slot_minutes)?;
        self.run_pass(&mut state, params)
    }

    /// Like [`Scheduler::color_and_schedule`] with already parsed inputs.
    pub fn color_and_schedule_with(&self, params: ScheduleParams) -> Result<ScheduleOutcome> {
        let mut state = self.state.write();
        state.params = None;
        self.run_pass(&mut state, params)
    }

    fn run_pass(&self, state: &mut SchedulerState, params: ScheduleParams) -> Result<ScheduleOutcome> {
        let palette = &self.config.palette;
        let graph = &mut state.graph;
        let coloring = GreedyColorer::new(palette).color(graph);
        if let Err(e) = ScheduleMapper::new(palette).apply(graph, &params) {
            graph.reset_assignments();
            return Err(e);
        }
        state.params = Some(params);

        debug!(start = %params.start, slot_minutes = params.slot_minutes, "schedule applied");

        Ok(ScheduleOutcome {
            nodes: Self::views(&state.graph, palette),
            exhausted: coloring.exhausted,
            slots_used: coloring.slots_used,
            params,
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Nodes and edges as of the last completed operation.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read();
        Snapshot {
            nodes: Self::views(&state.graph, &self.config.palette),
            edges: state.graph.edges().iter().map(Edge::as_pair).collect(),
        }
    }

    pub fn node(&self, id: NodeId) -> Result<NodeView> {
        let state = self.state.read();
        state
            .graph
            .node(id)
            .map(|n| NodeView::from_node(n, &self.config.palette))
            .ok_or_else(|| Error::NotFound(format!("Node {id}")))
    }

    /// Neighbors of `id` in ascending id order.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let state = self.state.read();
        if state.graph.node(id).is_none() {
            return Err(Error::NotFound(format!("Node {id}")));
        }
        let mut ids: Vec<NodeId> = state.graph.neighbors(id).into_iter().collect();
        ids.sort();
        Ok(ids)
    }

    pub fn node_count(&self) -> usize {
        self.state.read().graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.state.read().graph.edge_count()
    }

    /// Parameters of the last successful pass, if it has not been cleared since.
    pub fn last_params(&self) -> Option<ScheduleParams> {
        self.state.read().params
    }

    /// Window of every palette slot under the last successful pass.
    pub fn slot_table(&self) -> Result<Vec<SlotWindow>> {
        let params = self
            .last_params()
            .ok_or_else(|| Error::NotFound("No schedule has been computed".into()))?;
        params.slot_table(&self.config.palette)
    }

    fn views(graph: &ProximityGraph, palette: &Palette) -> Vec<NodeView> {
        graph.nodes().iter().map(|n| NodeView::from_node(n, palette)).collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Input error: start time '{input}' is not a valid HH:MM between 00:00 and 23:59")]
    InvalidStartTime { input: String },

    #[error("Input error: slot duration '{input}' is not a non-negative whole number of minutes")]
    InvalidDuration { input: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for rejected user input to a scheduling pass.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidStartTime { .. } | Error::InvalidDuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
