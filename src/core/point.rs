//! Eckpunkt eines Parkplatz-Polygons.

use super::coords::checked_offset;
use super::error::Result;
use super::Coords2D;

/// Eindeutige ID eines Punkts innerhalb des gesamten Editors.
pub type PointId = u64;

/// Ein Polygon-Eckpunkt in logischen Koordinaten.
///
/// Enthält keine Referenzen auf gerenderte Kanten; die Zuordnung Punkt → Kanten
/// ergibt sich aus der Reihenfolge im Polygon (siehe [`super::Polygon::edges`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Stabile ID für die Lebensdauer des Punkts
    pub id: PointId,
    /// Aktuelle Position
    pub position: Coords2D,
    /// Position bei Erstellung
    pub origin: Coords2D,
}

impl Point {
    /// Erstellt einen Punkt, dessen Ursprung der Erstellungsposition entspricht.
    pub fn new(id: PointId, position: Coords2D) -> Self {
        Self {
            id,
            position,
            origin: position,
        }
    }
}

/// Liefert einen neuen Punkt, verschoben um `delta`. ID und Ursprung bleiben erhalten.
///
/// Schlägt fehl, wenn die neue Position den Koordinatenbereich verlässt.
pub fn add_to_point(point: &Point, delta: Coords2D) -> Result<Point> {
    Ok(Point {
        position: checked_offset(point.position, delta)?,
        ..*point
    })
}
