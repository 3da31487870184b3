//! Application Controller für zentrale Event-Verarbeitung.

use super::commit::CommitSink;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
///
/// Nach jedem Command wird die Overlay-Registry neu aufgebaut (außer bei
/// Live-Updates, die sie selbst patchen) und aufgelaufene Commit-Ereignisse
/// werden an die registrierte Senke ausgeliefert.
#[derive(Default)]
pub struct AppController {
    sink: Option<Box<dyn CommitSink>>,
}

impl AppController {
    /// Erstellt einen Controller ohne Commit-Senke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller, der Commits an `sink` meldet.
    pub fn with_sink(sink: impl CommitSink + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
        }
    }

    /// Registriert (oder ersetzt) die Commit-Senke.
    pub fn set_commit_sink(&mut self, sink: impl CommitSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent)?;
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        let live_update = command.is_live_update();
        state.command_log.record(command.clone());

        let result = match command {
            // === Modus ===
            AppCommand::SetEditMode { mode } => {
                handlers::mode::set_edit_mode(state, mode);
                Ok(())
            }

            // === Zeichnen ===
            AppCommand::CreatePolygon { at } => {
                handlers::drawing::create_polygon(state, at);
                Ok(())
            }
            AppCommand::AppendPoint { at } => {
                handlers::drawing::append_point(state, at);
                Ok(())
            }
            AppCommand::ClosePolygon => {
                handlers::drawing::close_polygon(state);
                Ok(())
            }
            AppCommand::UpdateRubberBand { cursor } => {
                handlers::drawing::update_rubber_band(state, cursor);
                Ok(())
            }

            // === Drag ===
            AppCommand::BeginDrag {
                target,
                screen_pos,
                element_origin,
            } => handlers::movement::begin(state, target, screen_pos, element_origin),
            AppCommand::UpdateDrag { screen_pos } => handlers::movement::update(state, screen_pos),
            AppCommand::EndDrag { screen_pos } => handlers::movement::end(state, screen_pos),

            // === Löschen ===
            AppCommand::DeletePolygon { polygon_id } => {
                handlers::deletion::delete_polygon(state, polygon_id);
                Ok(())
            }

            // === Label-Dialog ===
            AppCommand::OpenLabelEditor { polygon_id } => {
                handlers::label::open(state, polygon_id);
                Ok(())
            }
            AppCommand::CommitLabel { text } => {
                handlers::label::commit(state, text);
                Ok(())
            }
            AppCommand::CancelLabelEditor => {
                handlers::label::cancel(state);
                Ok(())
            }

            // === Laden ===
            AppCommand::ReplacePolygons { records } => {
                handlers::loading::replace_polygons(state, &records)
            }

            // === Viewport ===
            AppCommand::SetViewport { viewport } => handlers::view::set_viewport(state, viewport),
            AppCommand::SetViewBox { view_box } => handlers::view::set_view_box(state, view_box),
        };

        // Auch nach einem Fehler: bereits erfolgte Änderungen sichtbar machen
        if !live_update {
            state.refresh_overlay();
        }
        self.flush_commits(state);

        result
    }

    /// Ohne Senke bleiben die Ereignisse im Puffer des States.
    fn flush_commits(&mut self, state: &mut AppState) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        for event in state.take_commits() {
            log::debug!("Commit: {:?}", event);
            sink.on_commit(&event);
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
