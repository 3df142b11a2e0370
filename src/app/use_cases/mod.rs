//! Use-Cases der Application-Layer-Orchestrierung.

pub mod band_update;
pub mod drawing;
pub mod line_edit;
