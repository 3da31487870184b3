//! Handler für das Zeichnen neuer Polygone.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Coords2D;

/// Beginnt ein neues offenes Polygon.
pub fn create_polygon(state: &mut AppState, at: Coords2D) {
    use_cases::drawing::create_polygon(state, at);
}

/// Hängt einen Punkt an das offene Polygon an.
pub fn append_point(state: &mut AppState, at: Coords2D) {
    use_cases::drawing::append_point(state, at);
}

/// Schließt das offene Polygon.
pub fn close_polygon(state: &mut AppState) {
    use_cases::drawing::close_polygon(state);
}

/// Führt das Gummiband dem Cursor nach.
pub fn update_rubber_band(state: &mut AppState, cursor: Coords2D) {
    use_cases::drawing::update_rubber_band(state, cursor);
}
