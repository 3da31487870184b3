//! Parser für Polygon-Listen im JSON-Grenzformat.

use super::PolygonRecord;
use anyhow::{Context, Result};

/// Parsed eine geordnete Polygon-Liste aus einem JSON-String.
///
/// Prüft nur die Form; Koordinaten, IDs und Punktanzahl werden beim Laden in
/// den Editor validiert.
pub fn parse_polygon_records(json: &str) -> Result<Vec<PolygonRecord>> {
    let records: Vec<PolygonRecord> =
        serde_json::from_str(json).context("Polygon-Liste ist kein gültiges JSON")?;
    log::debug!("{} Polygon-Records gelesen", records.len());
    Ok(records)
}
