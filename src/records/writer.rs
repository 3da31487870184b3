//! Writer für Polygon-Listen im JSON-Grenzformat.

use super::PolygonRecord;
use anyhow::Result;

/// Schreibt eine Polygon-Liste als formatiertes JSON.
pub fn write_polygon_records(records: &[PolygonRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
