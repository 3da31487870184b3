//! Commit-Ereignisse an den Persistenz-Kollaborator.
//!
//! Use-Cases legen Ereignisse im Outbox-Puffer des `AppState` ab; der
//! Controller reicht sie nach jedem Command an einen registrierten
//! [`CommitSink`] weiter. Ohne Sink bleiben sie im Puffer, bis der Host sie
//! mit [`crate::app::AppState::take_commits`] abholt.

use crate::core::PolygonId;
use crate::records::PolygonRecord;
use serde::Serialize;

/// Ein autoritativ gewordener Änderungsschritt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommitEvent {
    /// Polygon erstellt oder geändert
    Upserted { polygon: PolygonRecord },
    /// Polygon gelöscht
    Deleted { id: PolygonId },
}

/// Empfänger von Commit-Ereignissen (fire-and-forget).
///
/// Fehler beim Persistieren sind Sache des Empfängers; der Editor-Zustand
/// bleibt davon unberührt.
pub trait CommitSink {
    fn on_commit(&mut self, event: &CommitEvent);
}

impl<F> CommitSink for F
where
    F: FnMut(&CommitEvent),
{
    fn on_commit(&mut self, event: &CommitEvent) {
        self(event)
    }
}
