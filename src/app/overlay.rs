//! Render-seitige Registry der ziehbaren Geometrie-Anhänge.
//!
//! Hält pro Polygon die aktuell dargestellten Punkt-, Kanten- und
//! Label-Anhänge sowie eine Zuordnung Punkt-ID → eingehende/ausgehende Kante.
//! Während eines Drags werden nur diese Anhänge gepatcht (schneller Pfad);
//! das Modell in `EditorState` ändert sich erst beim Drag-Ende. Nach jeder
//! Modell-Änderung wird die Registry komplett neu aufgebaut, Handles sind
//! außerhalb eines aktiven Drags also nie länger gültig als bis zum
//! nächsten Command.

use super::state::EditorState;
use crate::core::{Attachment, Coords2D, PointId, Polygon, PolygonId, LINE_END, LINE_START};
use crate::shared::EditorOptions;
use glam::IVec2;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Linke obere Ecke des Label-Rechtecks eines Polygons (logisch).
pub fn label_origin(polygon: &Polygon, options: &EditorOptions) -> Option<Coords2D> {
    polygon
        .label_anchor(options.label_anchor_gap())
        .map(|anchor| anchor - IVec2::new(options.label_shift_x, 0))
}

/// Dargestellte Anhänge eines Polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOverlay {
    /// Punkt-Handles in Polygon-Reihenfolge
    pub points: Vec<(PointId, Attachment)>,
    /// Kanten; Kante `i` beginnt bei Punkt `i`
    pub edges: Vec<Attachment>,
    /// Label-Rechteck (nur geschlossene Polygone)
    pub label: Option<Attachment>,
    /// Wird gerade gezeichnet (letzte Kante = Gummiband)
    pub is_open: bool,
}

/// Kanten, die einen Punkt berühren (Indizes in `PolygonOverlay::edges`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeHandles {
    pub polygon_id: PolygonId,
    pub point_index: usize,
    /// Kante, die im Punkt endet (Slot `LINE_END`)
    pub incoming: Option<usize>,
    /// Kante, die im Punkt beginnt (Slot `LINE_START`)
    pub outgoing: Option<usize>,
}

/// Registry aller dargestellten Anhänge.
#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    polygons: IndexMap<PolygonId, PolygonOverlay>,
    point_edges: HashMap<PointId, EdgeHandles>,
}

impl OverlayRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut alle Anhänge aus dem Modell neu auf.
    pub fn rebuild(&mut self, editor: &EditorState, cursor: Option<Coords2D>, options: &EditorOptions) {
        self.polygons.clear();
        self.point_edges.clear();

        for polygon in editor.polygons.values() {
            let is_open = editor.is_open(polygon.id);
            let overlay = self.build_polygon(polygon, is_open, cursor, options);
            self.polygons.insert(polygon.id, overlay);
        }
    }

    fn build_polygon(
        &mut self,
        polygon: &Polygon,
        is_open: bool,
        cursor: Option<Coords2D>,
        options: &EditorOptions,
    ) -> PolygonOverlay {
        let n = polygon.len();
        let rubber_band = if is_open {
            // Ohne Cursor-Position hat das Gummiband Länge null
            cursor.or_else(|| polygon.points.last().map(|p| p.position))
        } else {
            None
        };

        let edges = polygon
            .edges(rubber_band)
            .iter()
            .map(|e| Attachment::line(e.start, e.end))
            .collect();

        let points = polygon
            .points
            .iter()
            .map(|p| (p.id, Attachment::point(p.position)))
            .collect();

        for (i, point) in polygon.points.iter().enumerate() {
            // Im offenen Polygon endet keine Kante im ersten Punkt
            let incoming = if is_open && i == 0 {
                None
            } else {
                Some((i + n - 1) % n)
            };
            self.point_edges.insert(
                point.id,
                EdgeHandles {
                    polygon_id: polygon.id,
                    point_index: i,
                    incoming,
                    outgoing: Some(i),
                },
            );
        }

        let label = if is_open {
            None
        } else {
            label_origin(polygon, options).map(Attachment::label)
        };

        PolygonOverlay {
            points,
            edges,
            label,
            is_open,
        }
    }

    /// Anhänge eines Polygons.
    pub fn polygon(&self, id: PolygonId) -> Option<&PolygonOverlay> {
        self.polygons.get(&id)
    }

    /// Alle Polygone in Render-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&PolygonId, &PolygonOverlay)> {
        self.polygons.iter()
    }

    /// Kanten-Handles eines Punkts.
    pub fn edge_handles(&self, point_id: PointId) -> Option<EdgeHandles> {
        self.point_edges.get(&point_id).copied()
    }

    /// Verschiebt einen Punkt und die Enden seiner beiden Kanten.
    pub fn move_point(&mut self, point_id: PointId, delta: Coords2D) {
        let Some(handles) = self.edge_handles(point_id) else {
            log::debug!("Overlay: Punkt {} nicht registriert", point_id);
            return;
        };
        let Some(overlay) = self.polygons.get_mut(&handles.polygon_id) else {
            return;
        };

        if let Some((_, point)) = overlay.points.get_mut(handles.point_index) {
            point.translate(delta);
        }
        if let Some(edge) = handles.outgoing.and_then(|i| overlay.edges.get_mut(i)) {
            edge.move_slot(LINE_START, delta);
        }
        if let Some(edge) = handles.incoming.and_then(|i| overlay.edges.get_mut(i)) {
            edge.move_slot(LINE_END, delta);
        }
    }

    /// Verschiebt alle Anhänge eines Polygons gemeinsam.
    pub fn translate_polygon(&mut self, polygon_id: PolygonId, delta: Coords2D) {
        let Some(overlay) = self.polygons.get_mut(&polygon_id) else {
            log::debug!("Overlay: Polygon {} nicht registriert", polygon_id);
            return;
        };
        for (_, point) in &mut overlay.points {
            point.translate(delta);
        }
        for edge in &mut overlay.edges {
            edge.translate(delta);
        }
        if let Some(label) = overlay.label.as_mut() {
            label.translate(delta);
        }
    }

    /// Verschiebt nur das Label eines Polygons.
    pub fn move_label(&mut self, polygon_id: PolygonId, delta: Coords2D) {
        match self
            .polygons
            .get_mut(&polygon_id)
            .and_then(|o| o.label.as_mut())
        {
            Some(label) => label.translate(delta),
            None => log::debug!("Overlay: kein Label für Polygon {}", polygon_id),
        }
    }

    /// Setzt das Ende des Gummibands des offenen Polygons.
    pub fn set_rubber_band(&mut self, cursor: Coords2D) {
        let Some(overlay) = self.polygons.values_mut().find(|o| o.is_open) else {
            return;
        };
        if let Some(edge) = overlay.edges.last_mut() {
            edge.set_slot(LINE_END, cursor);
        }
    }
}
