//! Use-Case: Punkte, Polygone und Labels per Drag verschieben.
//!
//! Während des Drags wird nur die Overlay-Registry gepatcht. Erst beim
//! Drag-Ende wird die Gesamtverschiebung einmalig ins Modell übernommen.

use crate::app::commit::CommitEvent;
use crate::app::state::{ActiveDrag, DragTarget};
use crate::app::AppState;
use crate::core::error::Result;
use crate::core::{
    add_to_point, checked_offset, translate_polygon, AllowedAction, Coords2D, DragSession,
    PointId, PolygonId,
};
use crate::records::PolygonRecord;
use glam::{IVec2, Vec2};

fn target_exists(state: &AppState, target: &DragTarget) -> bool {
    let Some(polygon) = state.editor.polygons.get(&target.polygon_id()) else {
        return false;
    };
    match *target {
        DragTarget::Point { point_id, .. } => polygon.point_index(point_id).is_some(),
        DragTarget::Polygon { .. } | DragTarget::Label { .. } => !polygon.is_empty(),
    }
}

/// Startet eine Drag-Sitzung auf `target`.
///
/// `element_origin` ist die Bildschirmposition des gezogenen Elements; der
/// Abstand zum Zeiger bleibt während des Drags erhalten.
pub fn begin_drag(
    state: &mut AppState,
    target: DragTarget,
    screen_pos: Vec2,
    element_origin: Vec2,
) -> Result<()> {
    if state.interaction.is_dragging() {
        log::debug!("Drag läuft bereits, neuer Press ignoriert");
        return Ok(());
    }
    if !movement_allowed(state) {
        log::debug!("Verschieben im Modus {:?} nicht erlaubt", state.editor.edit_mode);
        return Ok(());
    }
    if !target_exists(state, &target) {
        log::debug!("Drag-Ziel {:?} existiert nicht", target);
        return Ok(());
    }

    let view = &state.view;
    let (session, start) = DragSession::begin(screen_pos, element_origin, |p| view.to_logical(p))?;
    log::debug!("Drag gestartet: {:?} bei ({}, {})", target, start.x, start.y);
    state.interaction.drag = Some(ActiveDrag { target, session });
    Ok(())
}

/// Verarbeitet eine Zeigerbewegung während eines Drags (nur Darstellung).
pub fn update_drag(state: &mut AppState, screen_pos: Vec2) -> Result<()> {
    let view = &state.view;
    let Some(drag) = state.interaction.drag.as_mut() else {
        return Ok(());
    };
    let delta = drag.session.update(screen_pos, |p| view.to_logical(p))?;
    let target = drag.target;
    if delta == IVec2::ZERO {
        return Ok(());
    }

    match target {
        DragTarget::Point { point_id, .. } => state.overlay.move_point(point_id, delta),
        DragTarget::Polygon { polygon_id } => state.overlay.translate_polygon(polygon_id, delta),
        DragTarget::Label { polygon_id } => state.overlay.move_label(polygon_id, delta),
    }
    Ok(())
}

/// Beendet den Drag und übernimmt die Gesamtverschiebung ins Modell.
///
/// Die Sitzung ist danach in jedem Fall freigegeben, auch wenn die
/// Zeigerposition abgelehnt wird. Ist Verschieben inzwischen gesperrt
/// (Modus oder offener Label-Dialog), wird nichts übernommen.
pub fn end_drag(state: &mut AppState, screen_pos: Vec2) -> Result<()> {
    let Some(ActiveDrag { target, session }) = state.interaction.drag.take() else {
        log::debug!("Drag-Ende ohne aktive Sitzung");
        return Ok(());
    };
    if !movement_allowed(state) {
        log::debug!("Drag-Ende verworfen: Verschieben ist gesperrt");
        return Ok(());
    }
    let view = &state.view;
    let total = session.finish(screen_pos, |p| view.to_logical(p))?;
    log::debug!("Drag beendet: {:?} um ({}, {})", target, total.x, total.y);

    match target {
        DragTarget::Point {
            polygon_id,
            point_id,
        } => move_point(state, polygon_id, point_id, total),
        DragTarget::Polygon { polygon_id } => move_polygon(state, polygon_id, total),
        DragTarget::Label { polygon_id } => move_label(state, polygon_id, total),
    }
}

fn movement_allowed(state: &AppState) -> bool {
    state.editor.edit_mode.allows(AllowedAction::SelectionMovement)
        && state.label_editor.is_none()
}

/// Bricht einen laufenden Drag ohne Übernahme ab (z.B. beim Neuladen).
pub fn teardown_drag(state: &mut AppState) -> bool {
    let released = state.interaction.drag.take().is_some();
    if released {
        log::debug!("Laufender Drag verworfen");
    }
    released
}

fn commit_polygon(state: &mut AppState, polygon_id: PolygonId) {
    if state.editor.is_open(polygon_id) {
        return;
    }
    if let Some(polygon) = state.editor.polygons.get(&polygon_id) {
        let record = PolygonRecord::from_polygon(polygon);
        state.push_commit(CommitEvent::Upserted { polygon: record });
    }
}

/// Verschiebt einen einzelnen Punkt und committet das Polygon.
///
/// Verlässt der Punkt den Koordinatenbereich, bleibt das Modell unverändert.
pub fn move_point(
    state: &mut AppState,
    polygon_id: PolygonId,
    point_id: PointId,
    delta: Coords2D,
) -> Result<()> {
    if delta == IVec2::ZERO {
        return Ok(());
    }
    let Some(polygon) = state.editor.polygons.get_mut(&polygon_id) else {
        log::debug!("Punkt-Verschiebung: Polygon {} existiert nicht", polygon_id);
        return Ok(());
    };
    let Some(index) = polygon.point_index(point_id) else {
        log::debug!("Punkt-Verschiebung: Punkt {} existiert nicht", point_id);
        return Ok(());
    };
    polygon.points[index] = add_to_point(&polygon.points[index], delta)?;
    log::info!(
        "Polygon {}: Punkt {} um ({}, {}) verschoben",
        polygon_id,
        index,
        delta.x,
        delta.y
    );
    commit_polygon(state, polygon_id);
    Ok(())
}

/// Verschiebt ein ganzes Polygon und committet es.
///
/// Der Label-Offset bleibt unverändert; das Label folgt über den Anker.
pub fn move_polygon(state: &mut AppState, polygon_id: PolygonId, delta: Coords2D) -> Result<()> {
    if delta == IVec2::ZERO {
        return Ok(());
    }
    let Some(polygon) = state.editor.polygons.get_mut(&polygon_id) else {
        log::debug!("Polygon-Verschiebung: Polygon {} existiert nicht", polygon_id);
        return Ok(());
    };
    *polygon = translate_polygon(polygon, delta)?;
    log::info!("Polygon {} um ({}, {}) verschoben", polygon_id, delta.x, delta.y);
    commit_polygon(state, polygon_id);
    Ok(())
}

/// Verschiebt nur das Label (Label-Offset). Kein Commit, reine Darstellung.
pub fn move_label(state: &mut AppState, polygon_id: PolygonId, delta: Coords2D) -> Result<()> {
    if delta == IVec2::ZERO {
        return Ok(());
    }
    let Some(polygon) = state.editor.polygons.get_mut(&polygon_id) else {
        log::debug!("Label-Verschiebung: Polygon {} existiert nicht", polygon_id);
        return Ok(());
    };
    polygon.label_offset = checked_offset(polygon.label_offset, delta)?;
    log::debug!(
        "Label von Polygon {}: Offset ({}, {})",
        polygon_id,
        polygon.label_offset.x,
        polygon.label_offset.y
    );
    Ok(())
}
