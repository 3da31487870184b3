//! Editor-Kern für Parkplatz-Polygone über Kamerabildern.
//! Core-Funktionalität als Library exportiert für Hosts und Tests.

pub mod app;
pub mod core;
pub mod records;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommitEvent, CommitSink};
pub use core::{Coords2D, EditMode, EditorError, Point, Polygon, ViewBox, ViewportRect};
pub use records::{parse_polygon_records, write_polygon_records, PolygonRecord};
pub use shared::{EditorOptions, RenderScene};
