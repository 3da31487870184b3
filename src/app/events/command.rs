use crate::app::state::DragTarget;
use crate::core::{Coords2D, EditMode, PolygonId, ViewBox, ViewportRect};
use crate::records::PolygonRecord;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Jeder Command ist genau ein atomarer Zustandsübergang.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Editier-Modus setzen (verwirft ein offenes Polygon beim Verlassen von Add)
    SetEditMode { mode: EditMode },
    /// Neues offenes Polygon mit erstem Punkt anlegen
    CreatePolygon { at: Coords2D },
    /// Punkt an das offene Polygon anhängen
    AppendPoint { at: Coords2D },
    /// Offenes Polygon schließen und committen
    ClosePolygon,
    /// Gummiband des offenen Polygons dem Cursor nachführen
    UpdateRubberBand { cursor: Coords2D },
    /// Drag-Sitzung starten
    BeginDrag {
        target: DragTarget,
        screen_pos: Vec2,
        element_origin: Vec2,
    },
    /// Drag-Sitzung: Zeiger bewegt (nur Darstellung)
    UpdateDrag { screen_pos: Vec2 },
    /// Drag-Sitzung beenden und Gesamtverschiebung ins Modell übernehmen
    EndDrag { screen_pos: Vec2 },
    /// Polygon löschen
    DeletePolygon { polygon_id: PolygonId },
    /// Label-Dialog öffnen (erzwingt Default-Modus)
    OpenLabelEditor { polygon_id: PolygonId },
    /// Label-Dialog bestätigen
    CommitLabel { text: String },
    /// Label-Dialog verwerfen
    CancelLabelEditor,
    /// Alle Polygone ersetzen (Neuladen vom Kollaborator)
    ReplacePolygons { records: Vec<PolygonRecord> },
    /// Viewport-Rechteck setzen
    SetViewport { viewport: ViewportRect },
    /// viewBox setzen
    SetViewBox { view_box: ViewBox },
}

impl AppCommand {
    /// Commands, die nur die Darstellung patchen und das Modell nicht ändern.
    pub fn is_live_update(&self) -> bool {
        matches!(
            self,
            AppCommand::UpdateDrag { .. } | AppCommand::UpdateRubberBand { .. }
        )
    }
}
