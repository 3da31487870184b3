//! Use-Case: Neues Polygon Punkt für Punkt zeichnen.

use crate::app::commit::CommitEvent;
use crate::app::AppState;
use crate::core::{AllowedAction, Coords2D, Polygon};
use crate::records::PolygonRecord;

/// Legt ein offenes Polygon mit einem ersten Punkt an.
pub fn create_polygon(state: &mut AppState, at: Coords2D) {
    if !state.editor.edit_mode.allows(AllowedAction::SelectionCreation) {
        log::debug!("Polygon-Erstellung im Modus {:?} nicht erlaubt", state.editor.edit_mode);
        return;
    }
    if state.editor.drawing_polygon_id.is_some() {
        log::debug!("Es wird bereits ein Polygon gezeichnet");
        return;
    }

    let id = state.editor.allocate_polygon_id();
    let point = state.editor.new_point(at);
    let label = state.options.default_label(id);
    state
        .editor
        .polygons
        .insert(id, Polygon::new(id, label, vec![point]));
    state.editor.drawing_polygon_id = Some(id);
    state.interaction.cursor = Some(at);

    log::info!("Polygon {} begonnen bei ({}, {})", id, at.x, at.y);
}

/// Hängt einen Punkt an das offene Polygon an.
pub fn append_point(state: &mut AppState, at: Coords2D) {
    let point = state.editor.new_point(at);
    let Some(polygon) = state.editor.open_polygon_mut() else {
        log::debug!("Kein offenes Polygon zum Anhängen");
        return;
    };
    polygon.points.push(point);
    log::debug!("Polygon {}: Punkt {} angehängt", polygon.id, polygon.len());
    state.interaction.cursor = Some(at);
}

/// Schließt das offene Polygon und committet es.
///
/// Benötigt mindestens `options.min_closing_points` Punkte, sonst No-op.
pub fn close_polygon(state: &mut AppState) {
    let min_points = state.options.min_closing_points;
    let Some(polygon) = state.editor.open_polygon() else {
        log::debug!("Kein offenes Polygon zum Schließen");
        return;
    };
    if polygon.len() < min_points {
        log::debug!(
            "Polygon {} hat erst {} Punkte, zum Schließen werden {} benötigt",
            polygon.id,
            polygon.len(),
            min_points
        );
        return;
    }

    let record = PolygonRecord::from_polygon(polygon);
    state.editor.drawing_polygon_id = None;
    state.interaction.cursor = None;
    log::info!("Polygon {} mit {} Punkten geschlossen", record.id, record.points.len());
    state.push_commit(CommitEvent::Upserted { polygon: record });
}

/// Entfernt das offene Polygon ohne Commit und liefert es zurück.
pub fn discard_open_polygon(state: &mut AppState) -> Option<Polygon> {
    let id = state.editor.drawing_polygon_id.take()?;
    state.interaction.cursor = None;
    state.editor.polygons.shift_remove(&id)
}

/// Führt das Gummiband des offenen Polygons dem Cursor nach.
///
/// Ändert nur die Darstellung; das Modell bleibt unberührt.
pub fn update_rubber_band(state: &mut AppState, cursor: Coords2D) {
    if state.editor.drawing_polygon_id.is_none() {
        return;
    }
    state.interaction.cursor = Some(cursor);
    state.overlay.set_rubber_band(cursor);
}
