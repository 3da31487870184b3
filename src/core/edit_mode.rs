//! Editier-Modi und ihre erlaubten Aktionen.

use serde::{Deserialize, Serialize};

/// Aktiver Editier-Modus des Selektions-Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Nur ansehen, Pan/Zoom des Videos
    #[default]
    Default,
    /// Neue Polygone zeichnen, Punkte verschieben
    Add,
    /// Punkte, Polygone und Labels verschieben
    Edit,
    /// Polygone per Klick löschen
    Delete,
    /// Polygone ausblenden
    Hide,
}

/// Aktion, die ein Modus erlaubt oder sperrt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowedAction {
    /// Polygone werden angezeigt
    View,
    /// Pan/Zoom wird an den Host durchgereicht
    ViewMovement,
    /// Bestehende Punkte/Polygone/Labels dürfen verschoben werden
    SelectionMovement,
    /// Neue Polygone dürfen gezeichnet werden
    SelectionCreation,
    /// Polygone dürfen gelöscht werden
    SelectionDeletion,
}

impl EditMode {
    /// Alle Modi in Toolbar-Reihenfolge.
    pub const ALL: [EditMode; 5] = [
        EditMode::Default,
        EditMode::Add,
        EditMode::Edit,
        EditMode::Delete,
        EditMode::Hide,
    ];

    /// Erlaubte Aktionen dieses Modus.
    pub fn allowed_actions(self) -> &'static [AllowedAction] {
        use AllowedAction::*;
        match self {
            EditMode::Default => &[View, ViewMovement],
            EditMode::Add => &[View, SelectionMovement, SelectionCreation],
            EditMode::Edit => &[View, ViewMovement, SelectionMovement],
            EditMode::Delete => &[View, ViewMovement, SelectionDeletion],
            EditMode::Hide => &[ViewMovement],
        }
    }

    /// Prüft, ob der Modus eine Aktion erlaubt.
    pub fn allows(self, action: AllowedAction) -> bool {
        self.allowed_actions().contains(&action)
    }

    /// Tastenkürzel, die in diesen Modus wechseln.
    pub fn shortcuts(self) -> &'static [&'static str] {
        match self {
            EditMode::Default => &["Escape", "b", "5"],
            EditMode::Add => &["a", "1"],
            EditMode::Edit => &["e", "2"],
            EditMode::Delete => &["d", "3"],
            EditMode::Hide => &["h", "4"],
        }
    }

    /// Modus zu einem Tastenkürzel.
    pub fn from_shortcut(key: &str) -> Option<EditMode> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.shortcuts().contains(&key))
    }

    /// Modus nach Klick auf einen Toolbar-Button: der aktive Button schaltet zurück auf `Default`.
    pub fn toggled(self, clicked: EditMode) -> EditMode {
        if self == clicked {
            EditMode::Default
        } else {
            clicked
        }
    }
}
