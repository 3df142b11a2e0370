//! Fehler-Taxonomie für Planung, Projektion und Band-Geometrie.
//!
//! Alle Fehler sind pro Linie behebbar; keiner bricht die Sitzung ab.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Klassifizierter Fehlergrund, wie ihn der Editor für Warnungen anzeigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    /// Linie kürzer als die kleinste Spanne oder keine Kombination passt
    InsufficientLength,
    /// Segmente lassen sich nicht auf die Linie projizieren
    ProjectionFailed,
    /// Breite verletzt die Mindestlängen-Regel der Linie
    InvalidWidth,
    /// Degenerierte Linie ohne Normale
    ZeroLengthNormal,
}

impl FailureReason {
    /// Stabiler Code für Logs und Host-Anbindung.
    pub fn code(self) -> &'static str {
        match self {
            FailureReason::InsufficientLength => "INSUFFICIENT_LENGTH",
            FailureReason::ProjectionFailed => "PROJECTION_FAILED",
            FailureReason::InvalidWidth => "INVALID_WIDTH",
            FailureReason::ZeroLengthNormal => "ZERO_LENGTH_NORMAL",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Fehlschlag für genau eine Linie (für feldbezogene Warnungen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Linie {line_id}: {reason}")]
pub struct LineFailure {
    /// ID der betroffenen Linie
    pub line_id: String,
    /// Klassifizierter Grund
    pub reason: FailureReason,
}

impl LineFailure {
    /// Erstellt einen Fehlschlag für die angegebene Linie.
    pub fn new(line_id: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            line_id: line_id.into(),
            reason,
        }
    }
}

/// Fehler des Spannen-Planers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Länge unter der kleinsten Spanne oder keine Kandidaten-Kombination
    #[error("Länge {length_mm:.3} mm lässt sich nicht in Spannen aufteilen")]
    InsufficientLength { length_mm: f64 },
}

impl From<&PlanError> for FailureReason {
    fn from(_: &PlanError) -> Self {
        FailureReason::InsufficientLength
    }
}

/// Fehler beim Projizieren von Segmentlängen auf eine Linie.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Keine Segmente übergeben")]
    NoSegments,
    #[error("Linienlänge muss positiv sein")]
    NonPositiveLength,
    #[error(
        "Segmentsumme {segment_total:.3} mm weicht von Linienlänge {measured:.3} mm ab"
    )]
    LengthMismatch { measured: f64, segment_total: f64 },
}

/// Fehler der Band-Geometrie.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BandError {
    #[error("Normale für Linie ohne Länge nicht berechenbar")]
    ZeroLengthNormal,
    #[error("Bandbreite muss positiv sein (erhalten: {0})")]
    NonPositiveWidth(f64),
}

impl From<&BandError> for FailureReason {
    fn from(err: &BandError) -> Self {
        match err {
            BandError::ZeroLengthNormal => FailureReason::ZeroLengthNormal,
            BandError::NonPositiveWidth(_) => FailureReason::InvalidWidth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_codes_are_stable() {
        assert_eq!(FailureReason::InsufficientLength.code(), "INSUFFICIENT_LENGTH");
        assert_eq!(FailureReason::ProjectionFailed.to_string(), "PROJECTION_FAILED");
        assert_eq!(FailureReason::InvalidWidth.code(), "INVALID_WIDTH");
        assert_eq!(FailureReason::ZeroLengthNormal.code(), "ZERO_LENGTH_NORMAL");
    }

    #[test]
    fn test_reason_serializes_as_code() {
        let json = serde_json::to_string(&FailureReason::InsufficientLength)
            .expect("Serialisierung erwartet");
        assert_eq!(json, "\"INSUFFICIENT_LENGTH\"");
    }

    #[test]
    fn test_line_failure_message_names_line() {
        let failure = LineFailure::new("line-7", FailureReason::InvalidWidth);
        assert_eq!(failure.to_string(), "Linie line-7: INVALID_WIDTH");
    }
}
