//! JSON export of a layout snapshot.
//!
//! ```text
//! Scheduler::snapshot() → export_json() → { "nodes": [...], "edges": [[1, 2], ...] }
//! ```

use std::io::Write;
use crate::model::Snapshot;
use crate::Result;

/// Write `snapshot` as pretty-printed JSON followed by a newline.
pub fn export_json(snapshot: &Snapshot, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, snapshot)?;
    writeln!(writer)?;
    Ok(())
}

/// Render `snapshot` as a JSON string.
pub fn to_json_string(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
