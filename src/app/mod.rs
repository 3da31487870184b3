//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod commit;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod overlay;
pub mod render_scene;
/// Application State
///
/// Hält Polygone, Modus, View, laufende Interaktion und offene Dialoge.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use commit::{CommitEvent, CommitSink};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{
    ActiveDrag, AppState, DragTarget, EditorState, InteractionState, LabelEditorState, ViewState,
};
