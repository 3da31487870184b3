//! Use-Case: Polygon löschen.

use crate::app::commit::CommitEvent;
use crate::app::AppState;
use crate::core::{AllowedAction, PolygonId};

/// Entfernt ein Polygon und meldet die Löschung an den Kollaborator.
///
/// Reihenfolge und Identität aller anderen Polygone bleiben erhalten.
pub fn delete_polygon(state: &mut AppState, polygon_id: PolygonId) {
    if !state.editor.edit_mode.allows(AllowedAction::SelectionDeletion) {
        log::debug!("Löschen im Modus {:?} nicht erlaubt", state.editor.edit_mode);
        return;
    }
    if state.editor.polygons.shift_remove(&polygon_id).is_none() {
        log::debug!("Polygon {} existiert nicht mehr", polygon_id);
        return;
    }
    log::info!("Polygon {} gelöscht", polygon_id);
    state.push_commit(CommitEvent::Deleted { id: polygon_id });
}
