use crate::core::{EditMode, Point, PointId, Polygon, PolygonId};
use indexmap::IndexMap;

/// Autoritativer Zustand des Selektions-Editors.
///
/// Invariante: höchstens ein Polygon ist offen, und es ist immer das letzte
/// Element von `polygons`.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Polygone in Render-Reihenfolge (Einfügereihenfolge)
    pub polygons: IndexMap<PolygonId, Polygon>,
    /// Aktiver Editier-Modus
    pub edit_mode: EditMode,
    /// Polygon, das gerade gezeichnet wird
    pub drawing_polygon_id: Option<PolygonId>,
    next_polygon_id: PolygonId,
    next_point_id: PointId,
}

impl EditorState {
    /// Erstellt einen leeren Editor im Default-Modus.
    pub fn new() -> Self {
        Self {
            polygons: IndexMap::new(),
            edit_mode: EditMode::Default,
            drawing_polygon_id: None,
            next_polygon_id: 1,
            next_point_id: 1,
        }
    }

    /// Das offene Polygon, falls eines gezeichnet wird.
    pub fn open_polygon(&self) -> Option<&Polygon> {
        self.drawing_polygon_id.and_then(|id| self.polygons.get(&id))
    }

    /// Mutable Variante von [`Self::open_polygon`].
    pub fn open_polygon_mut(&mut self) -> Option<&mut Polygon> {
        let id = self.drawing_polygon_id?;
        self.polygons.get_mut(&id)
    }

    /// Gibt `true` zurück, wenn `id` das offene Polygon ist.
    pub fn is_open(&self, id: PolygonId) -> bool {
        self.drawing_polygon_id == Some(id)
    }

    /// Abgeschlossene Polygone in Reihenfolge.
    pub fn committed(&self) -> impl Iterator<Item = &Polygon> {
        let open = self.drawing_polygon_id;
        self.polygons.values().filter(move |p| Some(p.id) != open)
    }

    /// Anzahl abgeschlossener Polygone.
    pub fn committed_count(&self) -> usize {
        self.committed().count()
    }

    /// Vergibt eine neue Polygon-ID.
    pub fn allocate_polygon_id(&mut self) -> PolygonId {
        let id = self.next_polygon_id;
        self.next_polygon_id += 1;
        id
    }

    /// Vergibt eine neue, editorweit eindeutige Punkt-ID.
    pub fn allocate_point_id(&mut self) -> PointId {
        let id = self.next_point_id;
        self.next_point_id += 1;
        id
    }

    /// Erzeugt einen neuen Punkt mit frischer ID.
    pub fn new_point(&mut self, position: crate::core::Coords2D) -> Point {
        Point::new(self.allocate_point_id(), position)
    }

    /// Ersetzt alle Polygone. Das offene Polygon entfällt; neue IDs werden
    /// oberhalb der größten geladenen ID vergeben.
    pub fn replace_polygons(&mut self, polygons: Vec<Polygon>) {
        self.drawing_polygon_id = None;
        self.polygons = polygons.into_iter().map(|p| (p.id, p)).collect();
        let max_id = self.polygons.keys().copied().max().unwrap_or(0);
        self.next_polygon_id = self.next_polygon_id.max(max_id + 1);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
