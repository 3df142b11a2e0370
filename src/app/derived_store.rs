//! Abgeleitete Entitäten aller Linien, gruppiert nach Linien-ID.
//!
//! Die Einträge werden nie gepatcht: jede Änderung ersetzt den kompletten
//! Satz einer Linie, jeder Fehlschlag entfernt ihn.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{LineSpan, SpanBlock, SpanMarker};

use super::use_cases::band_update::LineBand;

/// Vollständiger Ersatz-Satz einer Linie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDerived {
    pub spans: Vec<LineSpan>,
    /// Grenz-Marker gefolgt von Eck-Markern
    pub markers: Vec<SpanMarker>,
    pub blocks: Vec<SpanBlock>,
    pub band: LineBand,
    pub checksum: String,
}

/// Speicher aller abgeleiteten Entitäten in Einfügereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct DerivedEntities {
    by_line: IndexMap<String, LineDerived>,
}

impl DerivedEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt den Satz der Linie atomar.
    ///
    /// Gibt `false` zurück, wenn der neue Satz identisch zum alten war.
    pub fn replace_for_line(&mut self, line_id: &str, derived: LineDerived) -> bool {
        match self.by_line.get_mut(line_id) {
            Some(existing) if *existing == derived => false,
            Some(existing) => {
                *existing = derived;
                true
            }
            None => {
                self.by_line.insert(line_id.to_string(), derived);
                true
            }
        }
    }

    /// Entfernt alle generierten Entitäten einer Linie.
    pub fn clear_line(&mut self, line_id: &str) -> Option<LineDerived> {
        self.by_line.shift_remove(line_id)
    }

    /// Entfernt alles.
    pub fn clear(&mut self) {
        self.by_line.clear();
    }

    pub fn get(&self, line_id: &str) -> Option<&LineDerived> {
        self.by_line.get(line_id)
    }

    /// Checksumme der letzten erfolgreichen Belegung einer Linie.
    pub fn checksum(&self, line_id: &str) -> Option<&str> {
        self.by_line.get(line_id).map(|d| d.checksum.as_str())
    }

    pub fn markers(&self) -> impl Iterator<Item = &SpanMarker> {
        self.by_line.values().flat_map(|d| d.markers.iter())
    }

    pub fn blocks(&self) -> impl Iterator<Item = &SpanBlock> {
        self.by_line.values().flat_map(|d| d.blocks.iter())
    }

    pub fn bands(&self) -> impl Iterator<Item = &LineBand> {
        self.by_line.values().map(|d| &d.band)
    }

    /// Anzahl der Linien mit abgeleiteten Entitäten.
    pub fn len(&self) -> usize {
        self.by_line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}
