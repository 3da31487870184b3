use crate::app::state::{DragTarget, LabelEditorState};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{EditMode, EditorError, Point, Polygon, ViewBox, ViewportRect};
use glam::{IVec2, Vec2};

use super::map_intent_to_commands;

fn square(id: u64, first_point_id: u64, origin: IVec2) -> Polygon {
    let corners = [(0, 0), (100, 0), (100, 100), (0, 100)];
    Polygon::new(
        id,
        format!("P{id}"),
        corners
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(first_point_id + i as u64, origin + IVec2::new(x, y)))
            .collect(),
    )
}

fn state_in(mode: EditMode) -> AppState {
    let mut state = AppState::new();
    state.editor.replace_polygons(vec![square(1, 10, IVec2::ZERO)]);
    state.editor.edit_mode = mode;
    state
}

fn press(state: &AppState, x: f32, y: f32) -> Vec<AppCommand> {
    map_intent_to_commands(
        state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(x, y),
        },
    )
    .unwrap()
}

fn with_open_triangle(state: &mut AppState) {
    let id = state.editor.allocate_polygon_id();
    let points = vec![
        state.editor.new_point(IVec2::new(300, 300)),
        state.editor.new_point(IVec2::new(400, 300)),
        state.editor.new_point(IVec2::new(350, 380)),
    ];
    state
        .editor
        .polygons
        .insert(id, Polygon::new(id, "offen", points));
    state.editor.drawing_polygon_id = Some(id);
}

#[test]
fn press_on_canvas_in_add_mode_creates_polygon() {
    let state = state_in(EditMode::Add);
    assert_eq!(
        press(&state, 500.0, 500.0),
        vec![AppCommand::CreatePolygon {
            at: IVec2::new(500, 500)
        }]
    );
}

#[test]
fn press_inside_committed_polygon_in_add_mode_appends() {
    let mut state = state_in(EditMode::Add);
    with_open_triangle(&mut state);
    // Innenfläche zählt im Add-Modus nicht als Körper
    assert_eq!(
        press(&state, 50.0, 50.0),
        vec![AppCommand::AppendPoint {
            at: IVec2::new(50, 50)
        }]
    );
}

#[test]
fn press_on_committed_edge_in_add_mode_is_swallowed() {
    let state = state_in(EditMode::Add);
    assert!(press(&state, 50.0, 2.0).is_empty());
}

#[test]
fn press_on_first_point_closes_when_enough_points() {
    let mut state = state_in(EditMode::Add);
    with_open_triangle(&mut state);
    assert_eq!(press(&state, 302.0, 301.0), vec![AppCommand::ClosePolygon]);
    // Andere Punkte des offenen Polygons sind wirkungslos
    assert!(press(&state, 400.0, 300.0).is_empty());
}

#[test]
fn press_on_first_point_with_too_few_points_is_ignored() {
    let mut state = state_in(EditMode::Add);
    with_open_triangle(&mut state);
    if let Some(open) = state.editor.open_polygon_mut() {
        open.points.truncate(2);
    }
    assert!(press(&state, 300.0, 300.0).is_empty());
}

#[test]
fn press_on_point_in_edit_mode_begins_point_drag() {
    let state = state_in(EditMode::Edit);
    assert_eq!(
        press(&state, 103.0, 98.0),
        vec![AppCommand::BeginDrag {
            target: DragTarget::Point {
                polygon_id: 1,
                point_id: 12
            },
            screen_pos: Vec2::new(103.0, 98.0),
            element_origin: Vec2::new(100.0, 100.0),
        }]
    );
}

#[test]
fn press_on_committed_point_in_add_mode_begins_point_drag() {
    let mut state = state_in(EditMode::Add);
    with_open_triangle(&mut state);
    assert_eq!(
        press(&state, 99.0, 1.0),
        vec![AppCommand::BeginDrag {
            target: DragTarget::Point {
                polygon_id: 1,
                point_id: 11
            },
            screen_pos: Vec2::new(99.0, 1.0),
            element_origin: Vec2::new(100.0, 0.0),
        }]
    );
}

#[test]
fn double_click_on_label_during_drag_is_ignored() {
    use crate::app::state::ActiveDrag;
    use crate::core::DragSession;

    let mut state = state_in(EditMode::Edit);
    let (session, _) =
        DragSession::begin(Vec2::new(40.0, 60.0), Vec2::ZERO, |p| Ok(p.as_ivec2())).unwrap();
    state.interaction.drag = Some(ActiveDrag {
        target: DragTarget::Polygon { polygon_id: 1 },
        session,
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DoubleClicked {
            screen_pos: Vec2::new(60.0, 130.0),
        },
    )
    .unwrap();
    assert!(commands.is_empty());
}

#[test]
fn press_on_body_in_edit_mode_begins_polygon_drag_from_bbox_corner() {
    let state = state_in(EditMode::Edit);
    assert_eq!(
        press(&state, 40.0, 60.0),
        vec![AppCommand::BeginDrag {
            target: DragTarget::Polygon { polygon_id: 1 },
            screen_pos: Vec2::new(40.0, 60.0),
            element_origin: Vec2::ZERO,
        }]
    );
}

#[test]
fn press_on_label_begins_label_drag() {
    let state = state_in(EditMode::Edit);
    // Label-Rechteck (20, 112) bis (120, 142)
    assert_eq!(
        press(&state, 60.0, 130.0),
        vec![AppCommand::BeginDrag {
            target: DragTarget::Label { polygon_id: 1 },
            screen_pos: Vec2::new(60.0, 130.0),
            element_origin: Vec2::new(20.0, 112.0),
        }]
    );
}

#[test]
fn press_in_delete_mode_deletes_hit_polygon() {
    let state = state_in(EditMode::Delete);
    assert_eq!(
        press(&state, 50.0, 50.0),
        vec![AppCommand::DeletePolygon { polygon_id: 1 }]
    );
    assert!(press(&state, 500.0, 500.0).is_empty());
}

#[test]
fn press_in_default_and_hide_does_nothing() {
    for mode in [EditMode::Default, EditMode::Hide] {
        let state = state_in(mode);
        assert!(press(&state, 50.0, 50.0).is_empty());
    }
}

#[test]
fn pointer_moved_updates_rubber_band_only_while_drawing() {
    let mut state = state_in(EditMode::Add);
    let moved = AppIntent::PointerMoved {
        screen_pos: Vec2::new(10.0, 20.0),
    };
    assert!(map_intent_to_commands(&state, moved.clone())
        .unwrap()
        .is_empty());

    with_open_triangle(&mut state);
    assert_eq!(
        map_intent_to_commands(&state, moved).unwrap(),
        vec![AppCommand::UpdateRubberBand {
            cursor: IVec2::new(10, 20)
        }]
    );
}

#[test]
fn release_without_drag_is_ignored() {
    let state = state_in(EditMode::Edit);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            screen_pos: Vec2::ZERO,
        },
    )
    .unwrap();
    assert!(commands.is_empty());
}

#[test]
fn double_click_on_label_opens_editor_unless_hidden() {
    let intent = AppIntent::DoubleClicked {
        screen_pos: Vec2::new(60.0, 130.0),
    };

    let state = state_in(EditMode::Default);
    assert_eq!(
        map_intent_to_commands(&state, intent.clone()).unwrap(),
        vec![AppCommand::OpenLabelEditor { polygon_id: 1 }]
    );

    let hidden = state_in(EditMode::Hide);
    assert!(map_intent_to_commands(&hidden, intent).unwrap().is_empty());
}

#[test]
fn mode_button_toggles_back_to_default() {
    let state = state_in(EditMode::Edit);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ModeButtonClicked {
            mode: EditMode::Edit,
        },
    )
    .unwrap();
    assert_eq!(
        commands,
        vec![AppCommand::SetEditMode {
            mode: EditMode::Default
        }]
    );
}

#[test]
fn shortcuts_map_to_modes_and_unknown_keys_are_ignored() {
    let state = state_in(EditMode::Default);
    let mode_for = |key: &str| {
        map_intent_to_commands(&state, AppIntent::ModeShortcutPressed { key: key.into() }).unwrap()
    };
    assert_eq!(
        mode_for("3"),
        vec![AppCommand::SetEditMode {
            mode: EditMode::Delete
        }]
    );
    assert!(mode_for("x").is_empty());
}

#[test]
fn mode_intents_are_blocked_while_label_dialog_is_open() {
    let mut state = state_in(EditMode::Default);
    state.label_editor = Some(LabelEditorState {
        polygon_id: 1,
        previous_mode: EditMode::Edit,
        draft: "P1".into(),
    });
    let commands = map_intent_to_commands(
        &state,
        AppIntent::SetModeRequested {
            mode: EditMode::Add,
        },
    )
    .unwrap();
    assert!(commands.is_empty());
}

#[test]
fn presses_are_mapped_through_letterboxed_view() {
    let mut state = AppState::new();
    state.editor.edit_mode = EditMode::Add;
    state.view.viewport = ViewportRect::new(0.0, 0.0, 1280.0, 720.0);
    state.view.view_box = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);

    assert_eq!(
        press(&state, 640.0, 360.0),
        vec![AppCommand::CreatePolygon {
            at: IVec2::new(500, 500)
        }]
    );
}

#[test]
fn non_finite_pointer_is_rejected() {
    let state = state_in(EditMode::Add);
    let result = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(f32::NAN, 1.0),
        },
    );
    assert!(matches!(
        result,
        Err(EditorError::NonFiniteCoordinate { .. })
    ));
}
