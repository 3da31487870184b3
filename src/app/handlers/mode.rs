//! Handler für den Editier-Modus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EditMode;

/// Setzt den Editier-Modus.
pub fn set_edit_mode(state: &mut AppState, mode: EditMode) {
    use_cases::mode::set_edit_mode(state, mode);
}
