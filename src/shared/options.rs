//! Zentrale Konfiguration für den Parkplatz-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Punkte & Kanten ─────────────────────────────────────────────────

/// Radius der Punkt-Handles in logischen Einheiten.
pub const POINT_RADIUS: f32 = 7.0;
/// Linienbreite der Kanten in logischen Einheiten.
pub const LINE_STROKE_WIDTH: f32 = 10.0;
/// Trefferabstand zur Kante (halbe Linienbreite).
pub const EDGE_HIT_TOLERANCE: f32 = LINE_STROKE_WIDTH / 2.0;
/// Mindestanzahl Punkte, ab der ein offenes Polygon geschlossen werden darf.
pub const MIN_CLOSING_POINTS: usize = 3;

// ── Labels ──────────────────────────────────────────────────────────

/// Breite des Label-Rechtecks.
pub const LABEL_WIDTH: i32 = 100;
/// Höhe des Label-Rechtecks.
pub const LABEL_HEIGHT: i32 = 30;
/// Abstand zwischen Punkt-Handle und Label.
pub const LABEL_GAP: i32 = 5;
/// Horizontale Verschiebung des Labels nach links, relativ zum Anker.
pub const LABEL_SHIFT_X: i32 = 30;
/// Präfix für automatisch vergebene Labels (`vaga-<id>`).
pub const LABEL_PREFIX: &str = "vaga";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `parking_space_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Treffer ─────────────────────────────────────────────────
    /// Radius der Punkt-Handles (Treffer und Darstellung)
    pub point_radius: f32,
    /// Maximaler Abstand zu einer Kante für einen Treffer
    pub edge_hit_tolerance: f32,
    /// Mindestanzahl Punkte zum Schließen eines Polygons
    pub min_closing_points: usize,

    // ── Labels ──────────────────────────────────────────────────
    /// Breite des Label-Rechtecks
    pub label_width: i32,
    /// Höhe des Label-Rechtecks
    pub label_height: i32,
    /// Abstand zwischen tiefstem Punkt-Handle und Label
    pub label_gap: i32,
    /// Verschiebung der linken Label-Kante relativ zum Anker
    pub label_shift_x: i32,
    /// Präfix für neue Labels
    pub label_prefix: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            edge_hit_tolerance: EDGE_HIT_TOLERANCE,
            min_closing_points: MIN_CLOSING_POINTS,
            label_width: LABEL_WIDTH,
            label_height: LABEL_HEIGHT,
            label_gap: LABEL_GAP,
            label_shift_x: LABEL_SHIFT_X,
            label_prefix: LABEL_PREFIX.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fallback auf Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("parking-space-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("parking_space_editor.toml")
    }

    /// Abstand zwischen tiefstem Punkt und Label-Anker:
    /// Punkt-Radius plus Label-Abstand.
    pub fn label_anchor_gap(&self) -> i32 {
        self.point_radius.round() as i32 + self.label_gap
    }

    /// Label für ein neu erstelltes Polygon, z.B. `vaga-3`.
    pub fn default_label(&self, id: u64) -> String {
        format!("{}-{}", self.label_prefix, id)
    }
}
