//! Grenzformat für Polygon-Listen (Persistenz-Kollaborator).
//!
//! Eingehend: geordnete Liste `{id, label, points: [{x, y}, ...]}`.
//! Ausgehend: dieselbe Form für Create/Update, nur die ID für Delete.

pub mod parser;
pub mod writer;

pub use parser::parse_polygon_records;
pub use writer::write_polygon_records;

use crate::core::coords::coords_from_f64;
use crate::core::error::{EditorError, Result};
use crate::core::{Point, PointId, Polygon, PolygonId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ein Eckpunkt im Grenzformat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

/// Ein Polygon im Grenzformat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonRecord {
    pub id: PolygonId,
    pub label: String,
    pub points: Vec<PointRecord>,
}

impl PolygonRecord {
    /// Exportiert ein Polygon. Der Label-Offset ist reine Darstellung und wird nicht übertragen.
    pub fn from_polygon(polygon: &Polygon) -> Self {
        Self {
            id: polygon.id,
            label: polygon.label.clone(),
            points: polygon
                .points
                .iter()
                .map(|p| PointRecord {
                    x: f64::from(p.position.x),
                    y: f64::from(p.position.y),
                })
                .collect(),
        }
    }
}

/// Wandelt Grenz-Records in Polygone um.
///
/// Koordinaten werden auf ganze logische Einheiten gerundet. Nicht-endliche
/// oder zu große Koordinaten, doppelte IDs und Polygone mit weniger als `min_points` Punkten
/// werden abgelehnt. Punkt-IDs vergibt `next_point_id`.
pub fn polygons_from_records(
    records: &[PolygonRecord],
    min_points: usize,
    mut next_point_id: impl FnMut() -> PointId,
) -> Result<Vec<Polygon>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut polygons = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id) {
            return Err(EditorError::DuplicatePolygonId(record.id));
        }
        if record.points.len() < min_points {
            return Err(EditorError::TooFewPoints {
                id: record.id,
                count: record.points.len(),
                min: min_points,
            });
        }

        let mut points = Vec::with_capacity(record.points.len());
        for p in &record.points {
            let position = coords_from_f64(p.x, p.y)?;
            points.push(Point::new(next_point_id(), position));
        }
        polygons.push(Polygon::new(record.id, record.label.clone(), points));
    }

    Ok(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn record(id: u64, points: &[(f64, f64)]) -> PolygonRecord {
        PolygonRecord {
            id,
            label: format!("vaga-{id}"),
            points: points.iter().map(|&(x, y)| PointRecord { x, y }).collect(),
        }
    }

    fn counter() -> impl FnMut() -> PointId {
        let mut next = 0;
        move || {
            next += 1;
            next
        }
    }

    #[test]
    fn test_records_become_polygons_with_rounded_points() {
        let records = vec![
            record(4, &[(0.4, 0.6), (10.0, 0.0), (5.5, 8.0)]),
            record(9, &[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)]),
        ];
        let polygons = polygons_from_records(&records, 3, counter()).unwrap();

        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].id, 4);
        assert_eq!(polygons[0].label, "vaga-4");
        assert_eq!(polygons[0].points[0].position, IVec2::new(0, 1));
        assert_eq!(polygons[0].points[2].position, IVec2::new(6, 8));
        // Punkt-IDs eindeutig über alle Polygone
        let ids: Vec<_> = polygons.iter().flat_map(|p| p.points.iter().map(|pt| pt.id)).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_non_finite_coordinate_is_rejected() {
        let records = vec![record(1, &[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 1.0)])];
        let err = polygons_from_records(&records, 3, counter()).unwrap_err();
        assert!(matches!(err, EditorError::NonFiniteCoordinate { .. }));
    }

    #[test]
    fn test_out_of_range_coordinate_is_rejected() {
        let records = vec![record(1, &[(5e12, 0.0), (-5e12, 0.0), (0.0, 10.0)])];
        let err = polygons_from_records(&records, 3, counter()).unwrap_err();
        assert!(matches!(err, EditorError::CoordinateOutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let tri = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let records = vec![record(1, &tri), record(1, &tri)];
        let err = polygons_from_records(&records, 3, counter()).unwrap_err();
        assert_eq!(err, EditorError::DuplicatePolygonId(1));
    }

    #[test]
    fn test_too_few_points_are_rejected() {
        let records = vec![record(2, &[(0.0, 0.0), (1.0, 0.0)])];
        let err = polygons_from_records(&records, 3, counter()).unwrap_err();
        assert_eq!(
            err,
            EditorError::TooFewPoints {
                id: 2,
                count: 2,
                min: 3
            }
        );
    }

    #[test]
    fn test_export_drops_label_offset() {
        let mut polygon = Polygon::new(
            3,
            "A1",
            vec![Point::new(1, IVec2::new(1, 2)), Point::new(2, IVec2::new(3, 4))],
        );
        polygon.label_offset = IVec2::new(50, 50);
        let exported = PolygonRecord::from_polygon(&polygon);
        assert_eq!(exported, record_with_label(3, "A1", &[(1.0, 2.0), (3.0, 4.0)]));
    }

    fn record_with_label(id: u64, label: &str, points: &[(f64, f64)]) -> PolygonRecord {
        PolygonRecord {
            label: label.to_string(),
            ..record(id, points)
        }
    }
}
