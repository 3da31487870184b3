//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use crate::core::error::Result;
use crate::core::{ViewBox, ViewportRect};

/// Aktualisiert das gerenderte Viewport-Rechteck.
pub fn set_viewport(state: &mut AppState, viewport: ViewportRect) -> Result<()> {
    viewport.validate()?;
    state.view.viewport = viewport;
    Ok(())
}

/// Aktualisiert die logische viewBox.
pub fn set_view_box(state: &mut AppState, view_box: ViewBox) -> Result<()> {
    view_box.validate()?;
    state.view.view_box = view_box;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_viewport_updates_rect() {
        let mut state = AppState::new();
        let viewport = ViewportRect::new(0.0, 0.0, 1280.0, 720.0);

        set_viewport(&mut state, viewport).unwrap();

        assert_eq!(state.view.viewport, viewport);
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let mut state = AppState::new();
        let before = state.view.viewport;

        assert!(set_viewport(&mut state, ViewportRect::new(0.0, 0.0, f32::NAN, 720.0)).is_err());
        assert!(set_viewport(&mut state, ViewportRect::new(0.0, 0.0, 0.0, 720.0)).is_err());
        assert_eq!(state.view.viewport, before);
    }

    #[test]
    fn set_view_box_rejects_negative_size() {
        let mut state = AppState::new();
        assert!(set_view_box(&mut state, ViewBox::new(0.0, 0.0, -1.0, 5.0)).is_err());
        set_view_box(&mut state, ViewBox::new(0.0, 0.0, 1000.0, 1000.0)).unwrap();
        assert_eq!(state.view.view_box, ViewBox::new(0.0, 0.0, 1000.0, 1000.0));
    }
}
