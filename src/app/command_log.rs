//! Verlauf der ausgeführten Commands.
//!
//! Live-Updates (Drag-Bewegung, Gummiband) werden nicht aufgezeichnet, sonst
//! würde ein einzelner Drag den Verlauf fluten.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    skipped_live_updates: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen ausgeführten Command auf.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird dann verworfen.
    pub fn record(&mut self, command: AppCommand) {
        if command.is_live_update() {
            self.skipped_live_updates += 1;
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Anzahl aufgezeichneter Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn nichts aufgezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt aufgezeichneter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Anzahl übersprungener Live-Updates.
    pub fn skipped_live_updates(&self) -> usize {
        self.skipped_live_updates
    }
}
