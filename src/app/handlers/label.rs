//! Handler für den Label-Dialog.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PolygonId;

/// Öffnet den Label-Dialog.
pub fn open(state: &mut AppState, polygon_id: PolygonId) {
    use_cases::label::open_label_editor(state, polygon_id);
}

/// Bestätigt den Label-Dialog.
pub fn commit(state: &mut AppState, text: String) {
    use_cases::label::commit_label(state, text);
}

/// Verwirft den Label-Dialog.
pub fn cancel(state: &mut AppState) {
    use_cases::label::cancel_label_editor(state);
}
