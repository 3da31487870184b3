use crate::core::{EditMode, ViewBox, ViewportRect};
use crate::records::PolygonRecord;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
/// Zeigerpositionen sind Bildschirm-Pixel relativ zur Seite.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Gerendertes Rechteck des Viewports hat sich geändert
    ViewportChanged { viewport: ViewportRect },
    /// Logische viewBox hat sich geändert
    ViewBoxChanged { view_box: ViewBox },
    /// Zeiger gedrückt
    PointerPressed { screen_pos: Vec2 },
    /// Zeiger bewegt (auch außerhalb des Viewports, solange gefangen)
    PointerMoved { screen_pos: Vec2 },
    /// Zeiger losgelassen
    PointerReleased { screen_pos: Vec2 },
    /// Doppelklick
    DoubleClicked { screen_pos: Vec2 },
    /// Toolbar-Button eines Modus geklickt (aktiver Button schaltet zurück)
    ModeButtonClicked { mode: EditMode },
    /// Tastenkürzel gedrückt
    ModeShortcutPressed { key: String },
    /// Modus direkt setzen (setMode-Einstieg für den Host)
    SetModeRequested { mode: EditMode },
    /// Label-Dialog mit Enter bestätigt
    LabelEditConfirmed { text: String },
    /// Label-Dialog mit Escape verworfen
    LabelEditCancelled,
    /// Polygon-Liste vom Kollaborator (initial oder Neuladen)
    PolygonsLoaded { records: Vec<PolygonRecord> },
}
