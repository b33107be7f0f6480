//! # Layout Model
//!
//! Plain data shared by the graph, the colorer and the scheduler.
//! No I/O, no locking, no logging here.

pub mod geometry;
pub mod node;
pub mod edge;
pub mod palette;
pub mod view;

pub use geometry::{Position, distance};
pub use node::{Node, NodeId};
pub use edge::Edge;
pub use palette::{Palette, Slot, DEFAULT_TOKENS};
pub use view::{NodeView, EdgePair, Snapshot, TIME_FORMAT};
