//! Handler für Viewport und viewBox.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ViewBox, ViewportRect};

/// Setzt das gerenderte Viewport-Rechteck.
pub fn set_viewport(state: &mut AppState, viewport: ViewportRect) -> anyhow::Result<()> {
    use_cases::viewport::set_viewport(state, viewport)?;
    Ok(())
}

/// Setzt die logische viewBox.
pub fn set_view_box(state: &mut AppState, view_box: ViewBox) -> anyhow::Result<()> {
    use_cases::viewport::set_view_box(state, view_box)?;
    Ok(())
}
