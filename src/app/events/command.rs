use std::path::PathBuf;

use glam::DVec2;

use crate::core::{BandOrientation, LineAppearance};
use crate::shared::PlannerOptions;

/// Mutierende Commands, die vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Linie rastern, validieren, anlegen und belegen
    CommitLine { start: DVec2, end: DVec2 },
    /// Länge aus Rohtext validieren und Linie um ihren Mittelpunkt skalieren
    ChangeLineLength { line_id: String, input: String },
    /// Block-Breite prüfen (Mindestlänge) und übernehmen
    ChangeLineWidth { line_id: String, width: u32 },
    /// Band-Seite übernehmen (No-op, wenn unverändert)
    ChangeBandOrientation {
        line_id: String,
        orientation: BandOrientation,
    },
    /// Linie und alle abgeleiteten Entitäten entfernen
    RemoveLine { line_id: String },
    /// Alle Linien neu belegen
    ReallocateAllLines,
    /// Raster umschalten
    ToggleSnapSize,
    /// Breite für neue Linien setzen
    SetDefaultBlockWidth { width: u32 },
    /// Darstellung für neue Linien setzen
    SetLineAppearance { appearance: LineAppearance },
    /// Optionen übernehmen und Allocator neu bauen
    ApplyOptions { options: PlannerOptions },
    /// Optionen als TOML speichern
    SaveOptions { path: Option<PathBuf> },
    /// Alle Linien und Entitäten verwerfen
    ClearDrawing,
    /// Warnung zurücksetzen
    DismissWarning,
}
