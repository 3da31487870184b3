//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod deletion;
pub mod drawing;
pub mod label;
pub mod loading;
pub mod mode;
pub mod movement;
pub mod view;
