//! Mapping von Host-Intents auf mutierende App-Commands.
//!
//! Hier werden Bildschirmpositionen in logische Koordinaten umgerechnet und
//! Zeiger-Presses je nach Modus und Treffer auf Commands abgebildet. Nicht
//! endliche Zeigerpositionen werden abgelehnt.

use super::overlay::label_origin;
use super::state::DragTarget;
use super::use_cases::picking::{pick, BodyHit, PickTarget};
use super::{AppCommand, AppIntent, AppState};
use crate::core::error::Result;
use crate::core::{AllowedAction, Coords2D, EditMode, PointId, PolygonId};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Result<Vec<AppCommand>> {
    let commands = match intent {
        AppIntent::ViewportChanged { viewport } => vec![AppCommand::SetViewport { viewport }],
        AppIntent::ViewBoxChanged { view_box } => vec![AppCommand::SetViewBox { view_box }],

        AppIntent::PointerPressed { screen_pos } => {
            if state.interaction.is_dragging() || state.label_editor.is_some() {
                return Ok(Vec::new());
            }
            let pos = state.view.to_logical(screen_pos)?;
            map_press(state, screen_pos, pos)?
        }
        AppIntent::PointerMoved { screen_pos } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::UpdateDrag { screen_pos }]
            } else if state.editor.drawing_polygon_id.is_some() {
                let cursor = state.view.to_logical(screen_pos)?;
                vec![AppCommand::UpdateRubberBand { cursor }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased { screen_pos } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::EndDrag { screen_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::DoubleClicked { screen_pos } => {
            // Während eines Drags öffnet kein Doppelklick den Dialog
            if state.label_editor.is_some()
                || state.interaction.is_dragging()
                || !state.editor.edit_mode.allows(AllowedAction::View)
            {
                return Ok(Vec::new());
            }
            let pos = state.view.to_logical(screen_pos)?;
            match pick(state, pos, BodyHit::EdgesAndInterior) {
                PickTarget::Label { polygon_id } => {
                    vec![AppCommand::OpenLabelEditor { polygon_id }]
                }
                _ => Vec::new(),
            }
        }

        AppIntent::ModeButtonClicked { mode } => mode_change(state, |current| {
            Some(current.toggled(mode))
        }),
        AppIntent::ModeShortcutPressed { key } => {
            mode_change(state, |_| EditMode::from_shortcut(&key))
        }
        AppIntent::SetModeRequested { mode } => mode_change(state, |_| Some(mode)),

        AppIntent::LabelEditConfirmed { text } => vec![AppCommand::CommitLabel { text }],
        AppIntent::LabelEditCancelled => vec![AppCommand::CancelLabelEditor],
        AppIntent::PolygonsLoaded { records } => vec![AppCommand::ReplacePolygons { records }],
    };
    Ok(commands)
}

/// Moduswechsel sind gesperrt, solange der Label-Dialog offen ist.
fn mode_change(state: &AppState, resolve: impl FnOnce(EditMode) -> Option<EditMode>) -> Vec<AppCommand> {
    if state.label_editor.is_some() {
        log::debug!("Moduswechsel während Label-Dialog ignoriert");
        return Vec::new();
    }
    match resolve(state.editor.edit_mode) {
        Some(mode) => vec![AppCommand::SetEditMode { mode }],
        None => Vec::new(),
    }
}

fn map_press(state: &AppState, screen_pos: Vec2, pos: Coords2D) -> Result<Vec<AppCommand>> {
    let mode = state.editor.edit_mode;
    let commands = match mode {
        EditMode::Add => match pick(state, pos, BodyHit::EdgesOnly) {
            PickTarget::Point {
                polygon_id, index, ..
            } if state.editor.is_open(polygon_id) => {
                let can_close = state
                    .editor
                    .open_polygon()
                    .is_some_and(|p| p.len() >= state.options.min_closing_points);
                if index == 0 && can_close {
                    vec![AppCommand::ClosePolygon]
                } else {
                    Vec::new()
                }
            }
            PickTarget::Point {
                polygon_id,
                point_id,
                index,
            } => vec![begin_point_drag(state, screen_pos, polygon_id, point_id, index)?],
            PickTarget::Label { polygon_id } => vec![begin_label_drag(state, screen_pos, polygon_id)?],
            PickTarget::Body { .. } => Vec::new(),
            PickTarget::Canvas => {
                if state.editor.drawing_polygon_id.is_some() {
                    vec![AppCommand::AppendPoint { at: pos }]
                } else {
                    vec![AppCommand::CreatePolygon { at: pos }]
                }
            }
        },
        EditMode::Edit => match pick(state, pos, BodyHit::EdgesAndInterior) {
            PickTarget::Point {
                polygon_id,
                point_id,
                index,
            } => vec![begin_point_drag(state, screen_pos, polygon_id, point_id, index)?],
            PickTarget::Body { polygon_id } => vec![begin_polygon_drag(state, screen_pos, polygon_id)?],
            PickTarget::Label { polygon_id } => vec![begin_label_drag(state, screen_pos, polygon_id)?],
            PickTarget::Canvas => Vec::new(),
        },
        EditMode::Delete => match pick(state, pos, BodyHit::EdgesAndInterior) {
            PickTarget::Point { polygon_id, .. } | PickTarget::Body { polygon_id } => {
                vec![AppCommand::DeletePolygon { polygon_id }]
            }
            PickTarget::Label { .. } | PickTarget::Canvas => Vec::new(),
        },
        EditMode::Default | EditMode::Hide => Vec::new(),
    };
    Ok(commands)
}

fn begin_drag(state: &AppState, target: DragTarget, screen_pos: Vec2, origin: Coords2D) -> Result<AppCommand> {
    Ok(AppCommand::BeginDrag {
        target,
        screen_pos,
        element_origin: state.view.to_screen(origin)?,
    })
}

fn begin_point_drag(
    state: &AppState,
    screen_pos: Vec2,
    polygon_id: PolygonId,
    point_id: PointId,
    index: usize,
) -> Result<AppCommand> {
    let origin = state.editor.polygons[&polygon_id].points[index].position;
    let target = DragTarget::Point {
        polygon_id,
        point_id,
    };
    begin_drag(state, target, screen_pos, origin)
}

fn begin_polygon_drag(state: &AppState, screen_pos: Vec2, polygon_id: PolygonId) -> Result<AppCommand> {
    let origin = state.editor.polygons[&polygon_id]
        .bounding_box()
        .map_or(Coords2D::ZERO, |(min, _)| min);
    begin_drag(state, DragTarget::Polygon { polygon_id }, screen_pos, origin)
}

fn begin_label_drag(state: &AppState, screen_pos: Vec2, polygon_id: PolygonId) -> Result<AppCommand> {
    let origin = label_origin(&state.editor.polygons[&polygon_id], &state.options)
        .unwrap_or(Coords2D::ZERO);
    begin_drag(state, DragTarget::Label { polygon_id }, screen_pos, origin)
}

#[cfg(test)]
mod tests;
