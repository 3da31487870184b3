//! Use-Case: Label eines Polygons im Dialog bearbeiten.

use super::mode::set_edit_mode;
use super::movement::teardown_drag;
use crate::app::commit::CommitEvent;
use crate::app::state::LabelEditorState;
use crate::app::AppState;
use crate::core::{EditMode, PolygonId};
use crate::records::PolygonRecord;

/// Öffnet den Label-Dialog und erzwingt den Default-Modus.
///
/// Ein laufender Drag wird dabei ohne Übernahme abgebrochen.
pub fn open_label_editor(state: &mut AppState, polygon_id: PolygonId) {
    if state.label_editor.is_some() {
        log::debug!("Label-Dialog ist bereits offen");
        return;
    }
    if state.editor.is_open(polygon_id) {
        log::debug!("Label eines offenen Polygons ist nicht editierbar");
        return;
    }
    let Some(draft) = state.editor.polygons.get(&polygon_id).map(|p| p.label.clone()) else {
        log::debug!("Label-Dialog: Polygon {} existiert nicht", polygon_id);
        return;
    };

    teardown_drag(state);
    let previous_mode = state.editor.edit_mode;
    set_edit_mode(state, EditMode::Default);
    state.label_editor = Some(LabelEditorState {
        polygon_id,
        previous_mode,
        draft,
    });
    log::info!("Label-Dialog für Polygon {} geöffnet", polygon_id);
}

/// Übernimmt den neuen Label-Text, schließt den Dialog und stellt den Modus wieder her.
pub fn commit_label(state: &mut AppState, text: String) {
    let Some(dialog) = state.label_editor.take() else {
        log::debug!("Kein Label-Dialog offen");
        return;
    };

    match state.editor.polygons.get_mut(&dialog.polygon_id) {
        Some(polygon) if polygon.label != text => {
            log::info!(
                "Polygon {}: Label '{}' -> '{}'",
                polygon.id,
                polygon.label,
                text
            );
            polygon.label = text;
            let record = PolygonRecord::from_polygon(polygon);
            state.push_commit(CommitEvent::Upserted { polygon: record });
        }
        Some(_) => log::debug!("Label unverändert"),
        None => log::debug!("Label-Dialog: Polygon {} existiert nicht mehr", dialog.polygon_id),
    }

    set_edit_mode(state, dialog.previous_mode);
}

/// Schließt den Dialog ohne Änderung und stellt den Modus wieder her.
pub fn cancel_label_editor(state: &mut AppState) {
    let Some(dialog) = state.label_editor.take() else {
        return;
    };
    log::debug!("Label-Dialog für Polygon {} verworfen", dialog.polygon_id);
    set_edit_mode(state, dialog.previous_mode);
}
