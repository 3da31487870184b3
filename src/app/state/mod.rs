//! Application State: zentrale Datenhaltung.

mod dialogs;
mod editor;
mod interaction;
mod view;

pub use dialogs::LabelEditorState;
pub use editor::EditorState;
pub use interaction::{ActiveDrag, DragTarget, InteractionState};
pub use view::ViewState;

use super::commit::CommitEvent;
use super::overlay::OverlayRegistry;
use super::CommandLog;
use crate::records::PolygonRecord;
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Polygone, Modus und offenes Polygon
    pub editor: EditorState,
    /// Viewport und viewBox
    pub view: ViewState,
    /// Drag-Sitzung und Cursor
    pub interaction: InteractionState,
    /// Offener Label-Dialog
    pub label_editor: Option<LabelEditorState>,
    /// Dargestellte Anhänge (schneller Pfad während Drags)
    pub overlay: OverlayRegistry,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Label-Geometrie)
    pub options: EditorOptions,
    /// Noch nicht ausgelieferte Commit-Ereignisse
    pending_commits: Vec<CommitEvent>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            editor: EditorState::new(),
            view: ViewState::new(),
            interaction: InteractionState::new(),
            label_editor: None,
            overlay: OverlayRegistry::new(),
            command_log: CommandLog::new(),
            options,
            pending_commits: Vec::new(),
        }
    }

    /// Gibt die Anzahl der Polygone zurück (inkl. offenem Polygon)
    pub fn polygon_count(&self) -> usize {
        self.editor.polygons.len()
    }

    /// Alle abgeschlossenen Polygone im Grenzformat, in Reihenfolge.
    pub fn polygon_records(&self) -> Vec<PolygonRecord> {
        self.editor
            .committed()
            .map(PolygonRecord::from_polygon)
            .collect()
    }

    /// Legt ein Commit-Ereignis in den Outbox-Puffer.
    pub fn push_commit(&mut self, event: CommitEvent) {
        self.pending_commits.push(event);
    }

    /// Entnimmt alle noch nicht ausgelieferten Commit-Ereignisse.
    pub fn take_commits(&mut self) -> Vec<CommitEvent> {
        std::mem::take(&mut self.pending_commits)
    }

    /// Baut die Overlay-Registry aus dem Modell neu auf.
    ///
    /// Ein laufender Drag bleibt sichtbar: die bisher gemeldete Verschiebung
    /// wird auf das neu aufgebaute Ziel erneut angewendet.
    pub fn refresh_overlay(&mut self) {
        self.overlay
            .rebuild(&self.editor, self.interaction.cursor, &self.options);

        let Some(drag) = &self.interaction.drag else {
            return;
        };
        let moved = drag.session.moved_so_far();
        match drag.target {
            DragTarget::Point { point_id, .. } => self.overlay.move_point(point_id, moved),
            DragTarget::Polygon { polygon_id } => self.overlay.translate_polygon(polygon_id, moved),
            DragTarget::Label { polygon_id } => self.overlay.move_label(polygon_id, moved),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
