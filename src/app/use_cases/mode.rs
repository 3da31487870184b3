//! Use-Case: Editier-Modus wechseln.

use super::drawing::discard_open_polygon;
use super::movement::teardown_drag;
use crate::app::AppState;
use crate::core::{AllowedAction, EditMode};

/// Setzt den Editier-Modus.
///
/// Außerhalb von Add kann kein Polygon offen sein: ein offenes Polygon wird
/// beim Wechsel verworfen (nicht committet). Ein laufender Drag überlebt den
/// Wechsel nur, wenn der neue Modus Verschieben erlaubt.
pub fn set_edit_mode(state: &mut AppState, mode: EditMode) {
    let previous = state.editor.edit_mode;
    if !mode.allows(AllowedAction::SelectionMovement) && teardown_drag(state) {
        log::info!("Laufender Drag beim Wechsel nach {:?} abgebrochen", mode);
    }
    if mode != EditMode::Add {
        if let Some(discarded) = discard_open_polygon(state) {
            log::info!(
                "Offenes Polygon {} mit {} Punkten beim Moduswechsel verworfen",
                discarded.id,
                discarded.len()
            );
        }
    }
    state.editor.edit_mode = mode;
    if previous != mode {
        log::info!("Editier-Modus: {:?} -> {:?}", previous, mode);
    }
}
