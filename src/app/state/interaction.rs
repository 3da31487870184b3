use crate::core::{Coords2D, DragSession, PointId, PolygonId};

/// Ziel einer laufenden Drag-Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Einzelner Punkt (formt das Polygon um)
    Point {
        polygon_id: PolygonId,
        point_id: PointId,
    },
    /// Ganzes Polygon (Translation)
    Polygon { polygon_id: PolygonId },
    /// Label (nur Label-Offset)
    Label { polygon_id: PolygonId },
}

impl DragTarget {
    /// Polygon, zu dem das Ziel gehört.
    pub fn polygon_id(&self) -> PolygonId {
        match *self {
            DragTarget::Point { polygon_id, .. }
            | DragTarget::Polygon { polygon_id }
            | DragTarget::Label { polygon_id } => polygon_id,
        }
    }
}

/// Laufende Drag-Sitzung mit ihrem Ziel. Einziger Besitzer der Sitzung.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub target: DragTarget,
    pub session: DragSession,
}

/// Zeiger-bezogener Zustand
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Aktive Drag-Sitzung (höchstens eine, ein Zeigergerät)
    pub drag: Option<ActiveDrag>,
    /// Letzte Cursor-Position (Gummiband des offenen Polygons)
    pub cursor: Option<Coords2D>,
}

impl InteractionState {
    /// Erstellt einen Zustand ohne Drag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
