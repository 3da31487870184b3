//! Builder für Render-Szenen aus dem AppState.
//!
//! Liest die Overlay-Registry statt des Modells, damit ein laufender Drag
//! bereits verschoben dargestellt wird.

use crate::app::AppState;
use crate::core::{AllowedAction, EditMode, LINE_END, LINE_START};
use crate::shared::{EdgeLine, LabelBox, PointHandle, PolygonScene, RenderScene};
use glam::IVec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let mode = state.editor.edit_mode;
    let options = &state.options;

    let polygons = state
        .overlay
        .iter()
        .filter_map(|(id, overlay)| {
            let polygon = state.editor.polygons.get(id)?;
            let can_close = overlay.is_open && polygon.len() >= options.min_closing_points;

            let points = overlay
                .points
                .iter()
                .enumerate()
                .map(|(i, (point_id, handle))| PointHandle {
                    id: *point_id,
                    position: handle.slots()[0],
                    closes_polygon: can_close && i == 0,
                })
                .collect();

            let last_edge = overlay.edges.len().saturating_sub(1);
            let edges = overlay
                .edges
                .iter()
                .enumerate()
                .map(|(i, edge)| EdgeLine {
                    start: edge.slots()[LINE_START],
                    end: edge.slots()[LINE_END],
                    rubber_band: overlay.is_open && i == last_edge,
                })
                .collect();

            let label = overlay.label.as_ref().map(|label| {
                let top_left = label.slots()[0];
                LabelBox {
                    text: polygon.label.clone(),
                    top_left,
                    size: IVec2::new(options.label_width, options.label_height),
                    // Ohne gültigen Viewport gibt es keine Bildschirmposition
                    screen_top_left: state.view.to_screen(top_left).ok(),
                    editable: mode.allows(AllowedAction::View) && state.label_editor.is_none(),
                }
            });

            Some(PolygonScene {
                id: *id,
                is_open: overlay.is_open,
                movable: !overlay.is_open && mode.allows(AllowedAction::SelectionMovement),
                points,
                edges,
                label,
            })
        })
        .collect();

    RenderScene {
        edit_mode: mode,
        visible: mode != EditMode::Hide,
        point_radius: options.point_radius,
        polygons,
        label_editor: state.label_editor.as_ref().map(|dialog| dialog.polygon_id),
    }
}
