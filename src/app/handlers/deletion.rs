//! Handler für das Löschen von Polygonen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PolygonId;

/// Löscht ein Polygon.
pub fn delete_polygon(state: &mut AppState, polygon_id: PolygonId) {
    use_cases::deletion::delete_polygon(state, polygon_id);
}
