//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use crate::core::{Coords2D, EditMode, PointId, PolygonId};
use glam::Vec2;

/// Punkt-Handle eines Polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct PointHandle {
    pub id: PointId,
    pub position: Coords2D,
    /// Klick schließt das offene Polygon (erster Punkt, genug Punkte)
    pub closes_polygon: bool,
}

/// Gerenderte Kante.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub start: Coords2D,
    pub end: Coords2D,
    /// Letzte Kante des offenen Polygons, folgt dem Cursor
    pub rubber_band: bool,
}

/// Label-Rechteck eines geschlossenen Polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBox {
    pub text: String,
    /// Linke obere Ecke (logisch)
    pub top_left: Coords2D,
    /// Breite und Höhe (logisch)
    pub size: Coords2D,
    /// Linke obere Ecke in Bildschirm-Pixeln (None ohne gültigen Viewport)
    pub screen_top_left: Option<Vec2>,
    /// Doppelklick öffnet den Label-Editor
    pub editable: bool,
}

/// Darstellungsdaten eines Polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonScene {
    pub id: PolygonId,
    /// Wird gerade gezeichnet
    pub is_open: bool,
    /// Punkte/Körper/Label sind im aktuellen Modus ziehbar
    pub movable: bool,
    pub points: Vec<PointHandle>,
    pub edges: Vec<EdgeLine>,
    pub label: Option<LabelBox>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Aktiver Editier-Modus (Toolbar-Hervorhebung)
    pub edit_mode: EditMode,
    /// Polygone werden angezeigt (false im Hide-Modus)
    pub visible: bool,
    /// Radius der Punkt-Handles
    pub point_radius: f32,
    /// Polygone in Render-Reihenfolge
    pub polygons: Vec<PolygonScene>,
    /// Polygon, dessen Label gerade bearbeitet wird
    pub label_editor: Option<PolygonId>,
}

impl RenderScene {
    /// Gibt zurück, ob gerade ein Polygon gezeichnet wird.
    pub fn has_open_polygon(&self) -> bool {
        self.polygons.iter().any(|p| p.is_open)
    }
}
