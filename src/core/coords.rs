//! Umrechnung zwischen Bildschirm-Pixeln und logischen viewBox-Koordinaten.
//!
//! Bildet die `preserveAspectRatio`-Semantik eines SVG-Viewports nach
//! (zentriert, gleichmäßig skaliert, ohne Beschneiden): Weicht das
//! Seitenverhältnis des gerenderten Elements von dem der viewBox ab, wird
//! entlang einer Achse ein symmetrischer Rand (Letterbox/Pillarbox) addiert.

use super::error::{ensure_finite, ensure_in_range, EditorError, Result};
use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Logische viewBox-Koordinaten. Ganzzahlig per Vertrag.
pub type Coords2D = IVec2;

/// Gerendertes Rechteck des Viewports auf dem Bildschirm (Pixel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    /// Linke obere Ecke relativ zur Seite
    pub origin: Vec2,
    /// Breite und Höhe in Pixeln
    pub size: Vec2,
}

impl ViewportRect {
    /// Erstellt ein Viewport-Rechteck aus Position und Größe.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Prüft auf endliche Werte und positive Größe.
    pub fn validate(&self) -> Result<()> {
        ensure_vec_finite(self.origin)?;
        ensure_vec_finite(self.size)?;
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(EditorError::DegenerateViewport {
                width: self.size.x,
                height: self.size.y,
            });
        }
        Ok(())
    }
}

/// Logisches Rechteck der viewBox (`min-x min-y width height`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    /// Minimum der logischen x/y-Achsen
    pub min: Vec2,
    /// Logische Breite und Höhe
    pub size: Vec2,
}

impl ViewBox {
    /// Erstellt eine viewBox aus Minimum und Ausdehnung.
    pub fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            size: Vec2::new(width, height),
        }
    }

    /// Eine viewBox ohne Breite oder Höhe gilt als nicht gesetzt.
    pub fn is_degenerate(&self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }

    /// Prüft auf endliche Werte und nicht-negative Ausdehnung.
    pub fn validate(&self) -> Result<()> {
        let finite = self.min.is_finite() && self.size.is_finite();
        if !finite || self.size.x < 0.0 || self.size.y < 0.0 {
            return Err(EditorError::InvalidViewBox(format!(
                "{} {} {} {}",
                self.min.x, self.min.y, self.size.x, self.size.y
            )));
        }
        Ok(())
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl FromStr for ViewBox {
    type Err = EditorError;

    /// Parst einen SVG-`viewBox`-String, z.B. `"0 0 1280 720"` oder `"0,0,1280,720"`.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f32>()
                    .map_err(|_| EditorError::InvalidViewBox(s.to_string()))
            })
            .collect::<Result<Vec<f32>>>()?;

        let &[min_x, min_y, width, height] = values.as_slice() else {
            return Err(EditorError::InvalidViewBox(s.to_string()));
        };
        let view_box = Self::new(min_x, min_y, width, height);
        view_box
            .validate()
            .map_err(|_| EditorError::InvalidViewBox(s.to_string()))?;
        Ok(view_box)
    }
}

fn ensure_vec_finite(v: Vec2) -> Result<()> {
    ensure_finite(f64::from(v.x), f64::from(v.y))
}

/// Lineare Abbildung von `n` aus `[in_min, in_max]` nach `[out_min, out_max]`.
pub fn map_range(n: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (n - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Randbreite (logische Einheiten) links/rechts bzw. oben/unten, die durch
/// unterschiedliche Seitenverhältnisse von Element und viewBox entsteht.
fn inner_offset(size: Vec2, view_box: &ViewBox) -> Vec2 {
    let v_ratio = view_box.size.x / view_box.size.y;
    let b_ratio = size.x / size.y;

    if b_ratio > v_ratio {
        let scale = view_box.size.y / size.y;
        Vec2::new((scale * size.x - view_box.size.x) / 2.0, 0.0)
    } else if b_ratio < v_ratio {
        let scale = view_box.size.x / size.x;
        Vec2::new(0.0, (scale * size.y - view_box.size.y) / 2.0)
    } else {
        Vec2::ZERO
    }
}

/// Sichtbarer logischer Bereich inklusive Letterbox-Rand: (Minimum, Maximum).
fn visible_range(size: Vec2, view_box: &ViewBox) -> (Vec2, Vec2) {
    let offset = inner_offset(size, view_box);
    (
        view_box.min - offset,
        view_box.min + view_box.size + offset,
    )
}

/// Rundet auf ganze logische Einheiten. Werte außerhalb von
/// [`super::error::COORD_LIMIT`] werden abgelehnt statt abgeschnitten.
pub(crate) fn coords_from_f64(x: f64, y: f64) -> Result<Coords2D> {
    ensure_finite(x, y)?;
    let (x, y) = (x.round(), y.round());
    ensure_in_range(x, y)?;
    Ok(IVec2::new(x as i32, y as i32))
}

fn round_to_coords(v: Vec2) -> Result<Coords2D> {
    coords_from_f64(f64::from(v.x), f64::from(v.y))
}

/// Verschiebt `base` um `delta` mit Bereichsprüfung.
pub fn checked_offset(base: Coords2D, delta: Coords2D) -> Result<Coords2D> {
    let x = i64::from(base.x) + i64::from(delta.x);
    let y = i64::from(base.y) + i64::from(delta.y);
    ensure_in_range(x as f64, y as f64)?;
    Ok(IVec2::new(x as i32, y as i32))
}

/// Rechnet einen Bildschirmpunkt in logische viewBox-Koordinaten um.
///
/// Bei degenerierter viewBox wird nur der Viewport-Ursprung abgezogen
/// (Pixel-Durchreichmodus). Das Ergebnis wird auf ganze Einheiten gerundet.
pub fn to_logical(screen: Vec2, viewport: &ViewportRect, view_box: &ViewBox) -> Result<Coords2D> {
    ensure_vec_finite(screen)?;
    ensure_vec_finite(viewport.origin)?;
    let local = screen - viewport.origin;

    if view_box.is_degenerate() {
        return round_to_coords(local);
    }
    viewport.validate()?;

    let (min, max) = visible_range(viewport.size, view_box);
    round_to_coords(Vec2::new(
        map_range(local.x, 0.0, viewport.size.x, min.x, max.x),
        map_range(local.y, 0.0, viewport.size.y, min.y, max.y),
    ))
}

/// Exakte Umkehrung von [`to_logical`]: logische Koordinaten in Bildschirm-Pixel.
///
/// Dient zum Positionieren nicht-interaktiver Overlays (z.B. Labels) synchron
/// zum Zoom/Pan des umgebenden Viewports.
pub fn to_screen(logical: Coords2D, viewport: &ViewportRect, view_box: &ViewBox) -> Result<Vec2> {
    ensure_vec_finite(viewport.origin)?;
    let logical = logical.as_vec2();

    if view_box.is_degenerate() {
        return Ok(logical + viewport.origin);
    }
    viewport.validate()?;

    let (min, max) = visible_range(viewport.size, view_box);
    Ok(Vec2::new(
        map_range(logical.x, min.x, max.x, 0.0, viewport.size.x),
        map_range(logical.y, min.y, max.y, 0.0, viewport.size.y),
    ) + viewport.origin)
}

/// Rechnet logische Koordinaten in Pixel des zugrundeliegenden Videobilds um.
///
/// Das Bild füllt den gesamten sichtbaren Bereich inklusive Letterbox-Rand
/// eines Elements mit der Bildgröße `image_size`.
pub fn to_image(logical: Coords2D, view_box: &ViewBox, image_size: Vec2) -> Result<Coords2D> {
    ensure_vec_finite(image_size)?;
    if view_box.is_degenerate() {
        return Err(EditorError::InvalidViewBox(format!(
            "{} {} {} {}",
            view_box.min.x, view_box.min.y, view_box.size.x, view_box.size.y
        )));
    }
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Err(EditorError::DegenerateViewport {
            width: image_size.x,
            height: image_size.y,
        });
    }

    let logical = logical.as_vec2();
    let (min, max) = visible_range(image_size, view_box);
    round_to_coords(Vec2::new(
        map_range(logical.x, min.x, max.x, 0.0, image_size.x),
        map_range(logical.y, min.y, max.y, 0.0, image_size.y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hd_viewport() -> ViewportRect {
        ViewportRect::new(0.0, 0.0, 1280.0, 720.0)
    }

    #[test]
    fn test_center_maps_to_center_with_horizontal_letterbox() {
        let view_box = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);
        let logical = to_logical(Vec2::new(640.0, 360.0), &hd_viewport(), &view_box).unwrap();
        assert_eq!(logical, IVec2::new(500, 500));
    }

    #[test]
    fn test_horizontal_letterbox_extends_x_range() {
        let view_box = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);
        // Linker Rand liegt außerhalb der viewBox: -(1777.78 - 1000) / 2
        let left = to_logical(Vec2::new(0.0, 0.0), &hd_viewport(), &view_box).unwrap();
        assert_eq!(left, IVec2::new(-389, 0));
        let right = to_logical(Vec2::new(1280.0, 720.0), &hd_viewport(), &view_box).unwrap();
        assert_eq!(right, IVec2::new(1389, 1000));
    }

    #[test]
    fn test_vertical_letterbox_extends_y_range() {
        let viewport = ViewportRect::new(0.0, 0.0, 500.0, 1000.0);
        let view_box = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);
        let top = to_logical(Vec2::new(0.0, 0.0), &viewport, &view_box).unwrap();
        assert_eq!(top, IVec2::new(0, -500));
        let center = to_logical(Vec2::new(250.0, 500.0), &viewport, &view_box).unwrap();
        assert_eq!(center, IVec2::new(500, 500));
    }

    #[test]
    fn test_viewport_origin_and_viewbox_min_are_respected() {
        let viewport = ViewportRect::new(100.0, 50.0, 640.0, 360.0);
        let view_box = ViewBox::new(10.0, 20.0, 1280.0, 720.0);
        let logical = to_logical(Vec2::new(100.0, 50.0), &viewport, &view_box).unwrap();
        assert_eq!(logical, IVec2::new(10, 20));
        let logical = to_logical(Vec2::new(420.0, 230.0), &viewport, &view_box).unwrap();
        assert_eq!(logical, IVec2::new(650, 380));
    }

    #[test]
    fn test_degenerate_viewbox_only_subtracts_origin() {
        let viewport = ViewportRect::new(30.0, 40.0, 1280.0, 720.0);
        let logical =
            to_logical(Vec2::new(130.4, 140.6), &viewport, &ViewBox::default()).unwrap();
        assert_eq!(logical, IVec2::new(100, 101));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let view_box = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);
        let err = to_logical(Vec2::new(f32::NAN, 1.0), &hd_viewport(), &view_box).unwrap_err();
        assert!(matches!(err, EditorError::NonFiniteCoordinate { .. }));
        let err =
            to_logical(Vec2::new(1.0, f32::INFINITY), &hd_viewport(), &view_box).unwrap_err();
        assert!(matches!(err, EditorError::NonFiniteCoordinate { .. }));
    }

    #[test]
    fn test_far_away_screen_point_is_rejected_not_clamped() {
        let viewport = ViewportRect::new(0.0, 0.0, 1280.0, 720.0);
        let err = to_logical(Vec2::new(5e12, 10.0), &viewport, &ViewBox::default()).unwrap_err();
        assert!(matches!(err, EditorError::CoordinateOutOfRange { .. }));
    }

    #[test]
    fn test_checked_offset_stops_at_limit() {
        use crate::core::error::COORD_LIMIT;
        let edge = IVec2::new(COORD_LIMIT - 1, 0);
        assert_eq!(
            checked_offset(edge, IVec2::new(1, 5)).unwrap(),
            IVec2::new(COORD_LIMIT, 5)
        );
        let err = checked_offset(edge, IVec2::new(2, 0)).unwrap_err();
        assert!(matches!(err, EditorError::CoordinateOutOfRange { .. }));
        // Kein i32-Überlauf bei extremen Deltas
        assert!(checked_offset(IVec2::new(i32::MAX, 0), IVec2::new(i32::MAX, 0)).is_err());
    }

    #[test]
    fn test_zero_sized_viewport_is_rejected() {
        let viewport = ViewportRect::new(0.0, 0.0, 0.0, 720.0);
        let view_box = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);
        let err = to_logical(Vec2::new(1.0, 1.0), &viewport, &view_box).unwrap_err();
        assert!(matches!(err, EditorError::DegenerateViewport { .. }));
    }

    #[test]
    fn test_round_trip_recovers_screen_point() {
        let viewports = [
            hd_viewport(),
            ViewportRect::new(12.0, 80.0, 800.0, 800.0),
            ViewportRect::new(0.0, 0.0, 400.0, 900.0),
        ];
        let view_box = ViewBox::new(0.0, 0.0, 1920.0, 1080.0);

        for viewport in &viewports {
            for ix in 0..=16 {
                for iy in 0..=16 {
                    let p = viewport.origin
                        + Vec2::new(
                            viewport.size.x * ix as f32 / 16.0,
                            viewport.size.y * iy as f32 / 16.0,
                        );
                    let logical = to_logical(p, viewport, &view_box).unwrap();
                    let back = to_screen(logical, viewport, &view_box).unwrap();
                    assert_relative_eq!(back.x, p.x, epsilon = 1.0);
                    assert_relative_eq!(back.y, p.y, epsilon = 1.0);
                }
            }
        }
    }

    #[test]
    fn test_to_screen_center() {
        let view_box = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);
        let screen = to_screen(IVec2::new(500, 500), &hd_viewport(), &view_box).unwrap();
        assert_relative_eq!(screen.x, 640.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 360.0, epsilon = 1e-3);
    }

    #[test]
    fn test_to_image_scales_into_frame_pixels() {
        let view_box = ViewBox::new(0.0, 0.0, 1280.0, 720.0);
        let image = to_image(IVec2::new(640, 360), &view_box, Vec2::new(1920.0, 1080.0)).unwrap();
        assert_eq!(image, IVec2::new(960, 540));
        let corner = to_image(IVec2::new(1280, 720), &view_box, Vec2::new(1920.0, 1080.0)).unwrap();
        assert_eq!(corner, IVec2::new(1920, 1080));
    }

    #[test]
    fn test_to_image_rejects_degenerate_viewbox() {
        let err = to_image(IVec2::ZERO, &ViewBox::default(), Vec2::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, EditorError::InvalidViewBox(_)));
    }

    #[test]
    fn test_viewbox_parses_svg_syntax() {
        let vb: ViewBox = "0 0 1280 720".parse().unwrap();
        assert_eq!(vb, ViewBox::new(0.0, 0.0, 1280.0, 720.0));
        let vb: ViewBox = "-10,5, 100 50".parse().unwrap();
        assert_eq!(vb, ViewBox::new(-10.0, 5.0, 100.0, 50.0));
    }

    #[test]
    fn test_viewbox_rejects_malformed_input() {
        assert!("0 0 1280".parse::<ViewBox>().is_err());
        assert!("0 0 a 720".parse::<ViewBox>().is_err());
        assert!("0 0 -5 720".parse::<ViewBox>().is_err());
    }
}
