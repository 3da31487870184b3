use crate::core::error::Result;
use crate::core::{to_logical, to_screen, Coords2D, ViewBox, ViewportRect};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Gerendertes Rechteck des Viewports in Bildschirm-Pixeln
    pub viewport: ViewportRect,
    /// Logische viewBox (degeneriert = Pixel-Durchreichmodus)
    pub view_box: ViewBox,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (ohne viewBox).
    pub fn new() -> Self {
        Self {
            viewport: ViewportRect::new(0.0, 0.0, 0.0, 0.0),
            view_box: ViewBox::default(),
        }
    }

    /// Bildschirmpunkt → logische Koordinaten.
    pub fn to_logical(&self, screen: Vec2) -> Result<Coords2D> {
        to_logical(screen, &self.viewport, &self.view_box)
    }

    /// Logische Koordinaten → Bildschirmpunkt.
    pub fn to_screen(&self, logical: Coords2D) -> Result<Vec2> {
        to_screen(logical, &self.viewport, &self.view_box)
    }
}
