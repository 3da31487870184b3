//! Handler für den Drag-Lebenszyklus (Start, Bewegung, Ende).

use crate::app::state::DragTarget;
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Startet eine Drag-Sitzung.
pub fn begin(
    state: &mut AppState,
    target: DragTarget,
    screen_pos: Vec2,
    element_origin: Vec2,
) -> anyhow::Result<()> {
    use_cases::movement::begin_drag(state, target, screen_pos, element_origin)?;
    Ok(())
}

/// Verarbeitet eine Zeigerbewegung während des Drags.
pub fn update(state: &mut AppState, screen_pos: Vec2) -> anyhow::Result<()> {
    use_cases::movement::update_drag(state, screen_pos)?;
    Ok(())
}

/// Beendet den Drag und übernimmt die Verschiebung.
pub fn end(state: &mut AppState, screen_pos: Vec2) -> anyhow::Result<()> {
    use_cases::movement::end_drag(state, screen_pos)?;
    Ok(())
}
