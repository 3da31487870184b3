//! Parkplatz-Polygon (Selektion): geordnete Punktliste, Label und Label-Offset.

use super::error::Result;
use super::point::{add_to_point, Point, PointId};
use super::Coords2D;
use glam::{IVec2, Vec2};

/// Eindeutige ID eines Polygons.
pub type PolygonId = u64;

/// Ein Polygon aus geordneten Punkten. Die Reihenfolge definiert die Kanten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    /// Stabile ID (vom Editor vergeben oder vom Persistenz-Kollaborator geliefert)
    pub id: PolygonId,
    /// Vom Benutzer editierbarer Anzeigename
    pub label: String,
    /// Eckpunkte in Zeichenreihenfolge
    pub points: Vec<Point>,
    /// Verschiebung des Labels relativ zum berechneten Anker
    pub label_offset: Coords2D,
}

/// Zielpunkt einer Kante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Regulärer Polygon-Punkt
    Point(PointId),
    /// Virtueller Cursor-Punkt (Gummiband des offenen Polygons)
    Cursor,
}

/// Abgeleitete Kante zwischen `points[index]` und dem Folgepunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index des Startpunkts im Polygon
    pub index: usize,
    /// ID des Startpunkts
    pub from: PointId,
    /// Ziel der Kante
    pub to: EdgeEnd,
    /// Startposition
    pub start: Coords2D,
    /// Endposition
    pub end: Coords2D,
}

impl Polygon {
    /// Erstellt ein Polygon ohne Label-Offset.
    pub fn new(id: PolygonId, label: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id,
            label: label.into(),
            points,
            label_offset: IVec2::ZERO,
        }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn das Polygon keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index eines Punkts über seine ID.
    pub fn point_index(&self, point_id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == point_id)
    }

    /// Kanten des Polygons (siehe [`edges_of`]).
    pub fn edges(&self, rubber_band: Option<Coords2D>) -> Vec<Edge> {
        edges_of(self, rubber_band)
    }

    /// Achsparallele Bounding-Box (min, max) oder `None` bei leerem Polygon.
    pub fn bounding_box(&self) -> Option<(Coords2D, Coords2D)> {
        let first = self.points.first()?.position;
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (min.min(p.position), max.max(p.position))
        }))
    }

    /// Anker des Labels: horizontal mittig, `gap_below` unter dem tiefsten Punkt,
    /// plus Label-Offset.
    pub fn label_anchor(&self, gap_below: i32) -> Option<Coords2D> {
        let (min, max) = self.bounding_box()?;
        let mid_x = i64::from(min.x) + (i64::from(max.x) - i64::from(min.x)) / 2;
        let x = mid_x + i64::from(self.label_offset.x);
        let y = i64::from(max.y) + i64::from(gap_below) + i64::from(self.label_offset.y);
        Some(IVec2::new(saturate(x), saturate(y)))
    }

    /// Index des ersten Punkts innerhalb von `radius` um `pos` (zuletzt gezeichnete zuerst).
    pub fn point_at(&self, pos: Coords2D, radius: f32) -> Option<usize> {
        let pos = pos.as_vec2();
        self.points
            .iter()
            .enumerate()
            .rev()
            .find(|(_, p)| p.position.as_vec2().distance(pos) <= radius)
            .map(|(i, _)| i)
    }

    /// Index der ersten geschlossenen Kante innerhalb von `tolerance` um `pos`.
    pub fn edge_at(&self, pos: Coords2D, tolerance: f32) -> Option<usize> {
        let pos = pos.as_vec2();
        self.edges(None)
            .iter()
            .find(|e| point_to_segment_distance(pos, e.start.as_vec2(), e.end.as_vec2()) <= tolerance)
            .map(|e| e.index)
    }

    /// Ray-Casting-Test, ob `pos` im Inneren liegt. Weniger als drei Punkte: nie.
    pub fn contains(&self, pos: Coords2D) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let p = pos.as_vec2();
        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let vi = self.points[i].position.as_vec2();
            let vj = self.points[j].position.as_vec2();
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

// Nur für die Label-Darstellung; Modellkoordinaten sind bereichsgeprüft.
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Liefert ein neues Polygon, dessen Punkte alle um `delta` verschoben sind.
/// ID, Label und Label-Offset bleiben erhalten.
///
/// Verlässt ein Punkt den Koordinatenbereich, bleibt das Polygon unverändert
/// und der Fehler wird zurückgegeben.
pub fn translate_polygon(polygon: &Polygon, delta: Coords2D) -> Result<Polygon> {
    let points = polygon
        .points
        .iter()
        .map(|p| add_to_point(p, delta))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon {
        points,
        ..polygon.clone()
    })
}

/// Kanten eines Polygons. Kante `i` beginnt immer bei `points[i]`.
///
/// Geschlossen (`rubber_band == None`): Kante `i` endet bei `points[(i + 1) % n]`.
/// Offen (`Some(cursor)`): die letzte Kante endet am virtuellen Cursor-Punkt.
pub fn edges_of(polygon: &Polygon, rubber_band: Option<Coords2D>) -> Vec<Edge> {
    let n = polygon.points.len();
    polygon
        .points
        .iter()
        .enumerate()
        .map(|(i, from)| {
            let is_last = i + 1 == n;
            match (is_last, rubber_band) {
                (true, Some(cursor)) => Edge {
                    index: i,
                    from: from.id,
                    to: EdgeEnd::Cursor,
                    start: from.position,
                    end: cursor,
                },
                _ => {
                    let next = &polygon.points[(i + 1) % n];
                    Edge {
                        index: i,
                        from: from.id,
                        to: EdgeEnd::Point(next.id),
                        start: from.position,
                        end: next.position,
                    }
                }
            }
        })
        .collect()
}

/// Abstand eines Punkts zu einem Segment.
pub fn point_to_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
