//! Use-Case: Polygon-Liste vom Kollaborator laden (initial oder Neuladen).

use super::drawing::discard_open_polygon;
use super::label::cancel_label_editor;
use super::movement::teardown_drag;
use crate::app::AppState;
use crate::core::error::Result;
use crate::records::{polygons_from_records, PolygonRecord};

/// Ersetzt alle Polygone.
///
/// Ungültige Records werden abgelehnt, bevor der Zustand angefasst wird.
/// Offenes Polygon, laufender Drag und Label-Dialog werden verworfen.
pub fn replace_polygons(state: &mut AppState, records: &[PolygonRecord]) -> Result<()> {
    let min_points = state.options.min_closing_points;
    let editor = &mut state.editor;
    let polygons = polygons_from_records(records, min_points, || editor.allocate_point_id())?;

    teardown_drag(state);
    cancel_label_editor(state);
    discard_open_polygon(state);

    state.editor.replace_polygons(polygons);
    log::info!("{} Polygone geladen", state.editor.polygons.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::drawing::create_polygon;
    use crate::app::use_cases::mode::set_edit_mode;
    use crate::core::{EditMode, EditorError};
    use crate::records::PointRecord;
    use glam::IVec2;

    fn triangle(id: u64) -> PolygonRecord {
        PolygonRecord {
            id,
            label: format!("vaga-{id}"),
            points: vec![
                PointRecord { x: 0.0, y: 0.0 },
                PointRecord { x: 10.0, y: 0.0 },
                PointRecord { x: 5.0, y: 8.0 },
            ],
        }
    }

    #[test]
    fn reload_discards_open_polygon() {
        let mut state = AppState::new();
        set_edit_mode(&mut state, EditMode::Add);
        create_polygon(&mut state, IVec2::new(1, 1));

        replace_polygons(&mut state, &[triangle(3), triangle(8)]).unwrap();

        assert!(state.editor.drawing_polygon_id.is_none());
        let ids: Vec<_> = state.editor.polygons.keys().copied().collect();
        assert_eq!(ids, vec![3, 8]);
        assert!(state.take_commits().is_empty());
    }

    #[test]
    fn invalid_records_leave_state_untouched() {
        let mut state = AppState::new();
        replace_polygons(&mut state, &[triangle(1)]).unwrap();

        let err = replace_polygons(&mut state, &[triangle(2), triangle(2)]).unwrap_err();

        assert_eq!(err, EditorError::DuplicatePolygonId(2));
        let ids: Vec<_> = state.editor.polygons.keys().copied().collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn point_ids_are_unique_across_polygons() {
        let mut state = AppState::new();
        replace_polygons(&mut state, &[triangle(1), triangle(2)]).unwrap();

        let mut ids: Vec<_> = state
            .editor
            .polygons
            .values()
            .flat_map(|p| p.points.iter().map(|pt| pt.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
