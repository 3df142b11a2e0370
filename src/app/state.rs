//! Application State: zentrale Datenhaltung des Editors.

use indexmap::IndexMap;

use super::derived_store::DerivedEntities;
use super::ids::{ClockLineIds, LineIdSource};
use super::CommandLog;
use crate::core::{LineAppearance, LineFailure, ScaffoldLine, WidthTable};
use crate::engine::SpanAllocator;
use crate::shared::PlannerOptions;

/// Warnung, die der Editor feldbezogen anzeigt.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorWarning {
    /// Belegung oder Band einer Linie fehlgeschlagen
    Line(LineFailure),
    /// Ungültige Eingabe (Länge, Breite, Geometrie)
    Input {
        /// Betroffene Linie (None beim Zeichnen einer neuen Linie)
        line_id: Option<String>,
        message: String,
    },
    /// Sammelbelegung mit Fehlschlägen einzelner Linien
    Batch(Vec<LineFailure>),
}

impl EditorWarning {
    /// Erstellt eine Eingabe-Warnung.
    pub fn input(line_id: Option<&str>, message: impl Into<String>) -> Self {
        EditorWarning::Input {
            line_id: line_id.map(str::to_string),
            message: message.into(),
        }
    }

    /// ID der betroffenen Linie, falls genau eine betroffen ist.
    pub fn line_id(&self) -> Option<&str> {
        match self {
            EditorWarning::Line(failure) => Some(&failure.line_id),
            EditorWarning::Input { line_id, .. } => line_id.as_deref(),
            EditorWarning::Batch(_) => None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Linien in Zeichenreihenfolge
    pub lines: IndexMap<String, ScaffoldLine>,
    /// Generierte Marker, Blöcke und Bänder je Linie
    pub derived: DerivedEntities,
    /// Laufzeit-Optionen
    pub options: PlannerOptions,
    /// Aus den Optionen gebauter Allocator
    pub allocator: SpanAllocator,
    /// Breite für neue Linien
    pub default_block_width: u32,
    /// Darstellung für neue Linien
    pub appearance: LineAppearance,
    /// Aktuelles Raster in mm
    pub snap_size: f64,
    /// Letzte Warnung (None = alles in Ordnung)
    pub warning: Option<EditorWarning>,
    /// Letzte Statusmeldung
    pub status_message: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// ID-Vergabe für neue Linien
    pub id_source: Box<dyn LineIdSource>,
}

impl AppState {
    /// Erstellt einen leeren State mit Standard-Optionen und zeitbasierten IDs.
    pub fn new() -> Self {
        Self::with_options(PlannerOptions::default())
    }

    /// Erstellt einen leeren State mit den angegebenen Optionen.
    pub fn with_options(options: PlannerOptions) -> Self {
        let allocator = SpanAllocator::from_options(&options);
        Self {
            lines: IndexMap::new(),
            derived: DerivedEntities::new(),
            default_block_width: allocator.widths().default_width(),
            snap_size: options.snap_size_mm,
            allocator,
            options,
            appearance: LineAppearance::default(),
            warning: None,
            status_message: None,
            command_log: CommandLog::new(),
            id_source: Box::new(ClockLineIds::new()),
        }
    }

    /// Ersetzt die ID-Vergabe (z.B. deterministische IDs in Tests).
    pub fn with_id_source(mut self, source: impl LineIdSource + 'static) -> Self {
        self.id_source = Box::new(source);
        self
    }

    /// Übernimmt neue Optionen und baut den Allocator neu.
    ///
    /// Die Standard-Breite wird auf die neue Breiten-Tabelle geklemmt.
    pub fn set_options(&mut self, options: PlannerOptions) {
        self.allocator = SpanAllocator::from_options(&options);
        self.default_block_width = self.allocator.widths().clamp(self.default_block_width);
        self.snap_size = options.snap_size_mm;
        self.options = options;
    }

    pub fn widths(&self) -> &WidthTable {
        self.allocator.widths()
    }

    pub fn line(&self, line_id: &str) -> Option<&ScaffoldLine> {
        self.lines.get(line_id)
    }

    /// Anzahl der Linien (für UI-Anzeige)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
