//! Core-Domänentypen: Koordinaten, Punkte, Polygone, Editier-Modi, Drag-Sitzungen.

pub mod attachment;
/// Umrechnung Bildschirm ↔ logische viewBox-Koordinaten
pub mod coords;
pub mod drag;
pub mod edit_mode;
pub mod error;
pub mod point;
/// Polygon-Modell
///
/// - Polygon: geordnete Punktliste mit Label und Label-Offset
/// - Edge: abgeleitete Kante (inkl. Gummiband des offenen Polygons)
pub mod polygon;

pub use attachment::{Attachment, AttachmentKind, LINE_END, LINE_START};
pub use coords::{
    checked_offset, map_range, to_image, to_logical, to_screen, Coords2D, ViewBox, ViewportRect,
};
pub use drag::DragSession;
pub use edit_mode::{AllowedAction, EditMode};
pub use error::{EditorError, COORD_LIMIT};
pub use point::{add_to_point, Point, PointId};
pub use polygon::{
    edges_of, point_to_segment_distance, translate_polygon, Edge, EdgeEnd, Polygon, PolygonId,
};
