//! Use-Cases der Application-Layer-Orchestrierung.

pub mod deletion;
pub mod drawing;
pub mod label;
pub mod loading;
pub mod mode;
pub mod movement;
pub mod picking;
pub mod viewport;
