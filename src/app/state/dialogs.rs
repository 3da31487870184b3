use crate::core::{EditMode, PolygonId};

/// Zustand des Label-Bearbeiten-Dialogs.
///
/// Solange der Dialog offen ist, steht der Editor im Default-Modus; beim
/// Schließen wird `previous_mode` wiederhergestellt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEditorState {
    /// Polygon, dessen Label bearbeitet wird
    pub polygon_id: PolygonId,
    /// Modus vor dem Öffnen
    pub previous_mode: EditMode,
    /// Aktueller Text im Eingabefeld (vorbelegt mit dem Label)
    pub draft: String,
}
