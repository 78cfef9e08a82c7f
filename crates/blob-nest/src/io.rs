//! JSON storage of outline lists.
//!
//! The format is a flat array of outlines with no nesting recorded:
//!
//! ```json
//! [{ "vertices": [[0, 0], [10, 0], [10, 10], [0, 10]] }]
//! ```
//!
//! Reading rebuilds the nesting by containment, so a blob survives a round
//! trip with the same forest shape.

use blob_core::{Outline, Vec2};
use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::error::Result;

/// One outline as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutlineRecord {
    vertices: Vec<[f32; 2]>,
}

/// Read a flat list of outlines, validating each one.
///
/// The returned outlines have no children.
pub fn read_outlines_json(json: &str) -> Result<Vec<Outline>> {
    let records: Vec<OutlineRecord> = serde_json::from_str(json)?;
    let outlines = records
        .into_iter()
        .map(|record| Outline::new(record.vertices.into_iter().map(Vec2::from).collect()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(outlines)
}

/// Read a flat list of outlines and nest them into a blob.
pub fn read_blob_json(json: &str) -> Result<Blob> {
    Ok(Blob::from_outlines(read_outlines_json(json)?))
}

/// Write every outline of a blob, parents before children, as a flat list.
pub fn write_outlines_json(blob: &Blob) -> Result<String> {
    let mut records = Vec::with_capacity(blob.outline_count());
    let mut pending: Vec<&Outline> = blob.outlines().iter().rev().collect();
    while let Some(outline) = pending.pop() {
        records.push(OutlineRecord {
            vertices: outline.vertices().iter().map(|v| v.to_array()).collect(),
        });
        pending.extend(outline.children.iter().rev());
    }
    Ok(serde_json::to_string_pretty(&records)?)
}
