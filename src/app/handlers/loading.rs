//! Handler für das Laden von Polygon-Listen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::records::PolygonRecord;
use anyhow::Context;

/// Ersetzt alle Polygone durch die gelieferte Liste.
pub fn replace_polygons(state: &mut AppState, records: &[PolygonRecord]) -> anyhow::Result<()> {
    use_cases::loading::replace_polygons(state, records)
        .context("Polygon-Liste abgelehnt")?;
    Ok(())
}
