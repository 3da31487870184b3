//! Fehlertypen des Editor-Kerns.
//!
//! Nur ungültige Eingaben an der Grenze (Koordinaten, Viewport, Polygon-Listen)
//! sind Fehler. Veraltete Referenzen sind No-ops, inkonsistente interne
//! Geometrie ist ein Programmierfehler und panict.

use thiserror::Error;

/// Abgelehnte Eingaben an der Grenze des Editor-Kerns.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Koordinate ist keine endliche Zahl: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("Koordinate liegt außerhalb von ±{limit}: ({x}, {y})")]
    CoordinateOutOfRange { x: f64, y: f64, limit: i32 },

    #[error("Viewport hat keine gültige Größe: {width} x {height}")]
    DegenerateViewport { width: f32, height: f32 },

    #[error("ungültige viewBox: {0}")]
    InvalidViewBox(String),

    #[error("Polygon-ID {0} ist mehrfach vorhanden")]
    DuplicatePolygonId(u64),

    #[error("Polygon {id} hat {count} Punkte, benötigt werden mindestens {min}")]
    TooFewPoints { id: u64, count: usize, min: usize },
}

/// Result-Alias für Operationen des Editor-Kerns.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Betragsgrenze logischer Koordinaten.
///
/// Summen aus Position, Label-Offset und Drag-Delta bleiben damit im
/// `i32`-Bereich.
pub const COORD_LIMIT: i32 = 1 << 24;

/// Prüft, dass beide Komponenten innerhalb von [`COORD_LIMIT`] liegen.
pub(crate) fn ensure_in_range(x: f64, y: f64) -> Result<()> {
    let limit = f64::from(COORD_LIMIT);
    if x.abs() <= limit && y.abs() <= limit {
        Ok(())
    } else {
        Err(EditorError::CoordinateOutOfRange {
            x,
            y,
            limit: COORD_LIMIT,
        })
    }
}

/// Prüft, dass beide Komponenten endlich sind.
pub(crate) fn ensure_finite(x: f64, y: f64) -> Result<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(EditorError::NonFiniteCoordinate { x, y })
    }
}
