//! Breiten-Klassen und Mindestlängen-Regel (`Breite + 150 mm`).

use super::{FailureReason, LineFailure, ScaffoldLine};
use crate::shared::{PlannerOptions, DEFAULT_BLOCK_WIDTH, MINIMUM_SPAN_LENGTH_MM};
use crate::shared::options::SUPPORTED_BLOCK_WIDTHS;

/// Tabelle der unterstützten Block-Breiten.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthTable {
    /// Absteigend sortiert
    widths: Vec<u32>,
    default_width: u32,
}

impl Default for WidthTable {
    fn default() -> Self {
        Self {
            widths: SUPPORTED_BLOCK_WIDTHS.to_vec(),
            default_width: DEFAULT_BLOCK_WIDTH,
        }
    }
}

impl WidthTable {
    /// Baut die Tabelle aus den Laufzeit-Optionen.
    ///
    /// Leere Breiten-Listen fallen auf die Standard-Tabelle zurück.
    pub fn from_options(options: &PlannerOptions) -> Self {
        let mut widths = options.supported_block_widths.clone();
        widths.retain(|&w| w > 0);
        if widths.is_empty() {
            return Self::default();
        }
        widths.sort_unstable_by(|a, b| b.cmp(a));
        widths.dedup();
        let default_width = if widths.contains(&options.default_block_width) {
            options.default_block_width
        } else {
            widths[0]
        };
        Self {
            widths,
            default_width,
        }
    }

    /// Alle unterstützten Breiten (absteigend).
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Standard-Breite für neue Linien.
    pub fn default_width(&self) -> u32 {
        self.default_width
    }

    pub fn is_supported(&self, width: u32) -> bool {
        self.widths.contains(&width)
    }

    /// Unterstützte Werte bleiben; alles bis zur kleinsten Breite wird auf die
    /// kleinste geklemmt, alles andere auf die Standard-Breite.
    pub fn clamp(&self, width: u32) -> u32 {
        if self.is_supported(width) {
            return width;
        }
        match self.widths.last() {
            Some(&smallest) if width <= smallest => smallest,
            _ => self.default_width,
        }
    }

    /// Mindestlänge einer Linie für die angegebene Breite.
    pub fn minimum_length_for(&self, width: u32) -> f64 {
        f64::from(width) + MINIMUM_SPAN_LENGTH_MM
    }

    /// Prüft die Mindestlängen-Regel gegen die gemessene Linienlänge.
    pub fn can_apply(&self, line: &ScaffoldLine, width: u32) -> bool {
        line.measured_length() >= self.minimum_length_for(width)
    }

    /// Wie [`Self::can_apply`], liefert aber den linienbezogenen Fehler.
    pub fn check(&self, line: &ScaffoldLine, width: u32) -> Result<(), LineFailure> {
        if self.can_apply(line, width) {
            Ok(())
        } else {
            Err(LineFailure::new(&line.id, FailureReason::InvalidWidth))
        }
    }
}
