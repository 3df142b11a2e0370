//! Abgeleitete View-Entitäten einer Linie: Spannen, Marker, Blöcke.
//!
//! Sie haben keine eigene Identität; ihre IDs folgen einer Namenskonvention
//! auf Basis der Linien-ID und werden bei jeder Änderung komplett neu erzeugt.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::LineColor;

/// ID einer Spanne: `{lineId}-span-{1-basierter Index}`.
pub fn create_span_id(line_id: &str, index: usize) -> String {
    format!("{line_id}-span-{}", index + 1)
}

/// Eine Spanne auf einer Linie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpan {
    pub id: String,
    pub line_id: String,
    /// 0-basierter, stabiler Index entlang der Linie
    pub index: usize,
    /// Länge in mm (auf 0.001 gerundet)
    pub length: f64,
    pub start: DVec2,
    pub end: DVec2,
}

/// Rolle eines generierten Markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerRole {
    /// Stoß zwischen zwei Spannen
    Boundary,
    /// Linien-Endpunkt
    Corner,
}

/// Generierter Marker an einer Linie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanMarker {
    pub id: String,
    pub line_id: String,
    pub position: DVec2,
    /// Farbe der erzeugenden Linie
    pub color: LineColor,
    pub role: MarkerRole,
}

/// Gesperrter Anzeige-Block für eine Spanne.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanBlock {
    /// Gleich der Spannen-ID
    pub id: String,
    pub source_line_id: String,
    /// Auf ganze mm gerundete Länge
    pub length: u32,
    /// Block-Breite der Linie in mm
    pub width: u32,
    /// Layout-Position (Start der Spanne)
    pub position: DVec2,
    /// Generierte Blöcke sind nie frei verschiebbar
    pub locked: bool,
    /// Zugehöriges Innenband (gesetzt, sobald das Band erzeugt wurde)
    pub band_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_id_is_one_based() {
        assert_eq!(create_span_id("line-3", 0), "line-3-span-1");
        assert_eq!(create_span_id("line-3", 4), "line-3-span-5");
    }
}
