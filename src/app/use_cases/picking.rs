//! Use-Case: Treffer-Test für einen Zeiger-Press.
//!
//! Priorität: Punkt > Körper > Label. Später gezeichnete Polygone liegen
//! oben und gewinnen gegen frühere.

use crate::app::overlay::label_origin;
use crate::app::AppState;
use crate::core::{Coords2D, PointId, Polygon, PolygonId};
use glam::IVec2;

/// Was unter dem Zeiger liegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Punkt-Handle
    Point {
        polygon_id: PolygonId,
        point_id: PointId,
        index: usize,
    },
    /// Kante oder Innenfläche eines abgeschlossenen Polygons
    Body { polygon_id: PolygonId },
    /// Label-Rechteck eines abgeschlossenen Polygons
    Label { polygon_id: PolygonId },
    /// Leere Fläche
    Canvas,
}

/// Ob die Innenfläche eines Polygons als Körper zählt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyHit {
    /// Nur Kanten (Add-Modus: Klicks ins Innere setzen Punkte)
    EdgesOnly,
    /// Kanten und Innenfläche
    EdgesAndInterior,
}

/// Label-Rechteck (min, max) eines Polygons.
pub fn label_rect(state: &AppState, polygon: &Polygon) -> Option<(Coords2D, Coords2D)> {
    let min = label_origin(polygon, &state.options)?;
    let size = IVec2::new(state.options.label_width, state.options.label_height);
    Some((min, min + size))
}

/// Ermittelt das oberste Element unter `pos`.
///
/// Das offene Polygon hat keinen Körper und kein Label: Klicks auf seine
/// Kanten fallen auf die Fläche durch.
pub fn pick(state: &AppState, pos: Coords2D, body_hit: BodyHit) -> PickTarget {
    let editor = &state.editor;
    let options = &state.options;

    for polygon in editor.polygons.values().rev() {
        if let Some(index) = polygon.point_at(pos, options.point_radius) {
            return PickTarget::Point {
                polygon_id: polygon.id,
                point_id: polygon.points[index].id,
                index,
            };
        }
    }

    for polygon in editor.committed().collect::<Vec<_>>().into_iter().rev() {
        let on_edge = polygon.edge_at(pos, options.edge_hit_tolerance).is_some();
        let inside = body_hit == BodyHit::EdgesAndInterior && polygon.contains(pos);
        if on_edge || inside {
            return PickTarget::Body {
                polygon_id: polygon.id,
            };
        }
    }

    for polygon in editor.committed().collect::<Vec<_>>().into_iter().rev() {
        if let Some((min, max)) = label_rect(state, polygon) {
            if pos.cmpge(min).all() && pos.cmple(max).all() {
                return PickTarget::Label {
                    polygon_id: polygon.id,
                };
            }
        }
    }

    PickTarget::Canvas
}
