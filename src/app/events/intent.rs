use std::path::PathBuf;

use glam::DVec2;

use crate::core::{BandOrientation, LineAppearance};
use crate::shared::PlannerOptions;

/// Eingaben aus UI/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zweiter Klick beim Zeichnen: Linie von `start` nach `end` übernehmen
    LineDrawCommitted { start: DVec2, end: DVec2 },
    /// Neue Länge im Längen-Popup bestätigt (Rohtext)
    LineLengthSubmitted { line_id: String, input: String },
    /// Block-Breite einer Linie ändern
    LineWidthChangeRequested { line_id: String, width: u32 },
    /// Band-Seite einer Linie ändern
    BandOrientationChangeRequested {
        line_id: String,
        orientation: BandOrientation,
    },
    /// Linie samt abgeleiteter Entitäten entfernen
    LineRemoveRequested { line_id: String },
    /// Alle Linien neu belegen
    AllocateAllRequested,
    /// Zwischen Standard- und feinem Raster umschalten
    SnapToggleRequested,
    /// Breite für neue Linien gewählt
    DefaultBlockWidthChanged { width: u32 },
    /// Farbe/Stil für neue Linien gewählt
    LineAppearanceChanged { appearance: LineAppearance },
    /// Optionen aus dem Optionen-Dialog übernehmen
    OptionsChanged { options: PlannerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
    /// Optionen speichern (None = Standard-Pfad neben der Binary)
    OptionsSaveRequested { path: Option<PathBuf> },
    /// Neue, leere Zeichnung beginnen
    NewDrawingRequested,
    /// Angezeigte Warnung schließen
    WarningDismissed,
}
