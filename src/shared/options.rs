//! Zentrale Konfiguration für Spannen-Planung und Innenband.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Spannen ─────────────────────────────────────────────────────────

/// Bevorzugte Spannenlänge in mm.
pub const PREFERRED_SPAN_MM: f64 = 1800.0;
/// Ersatz-Spannenlängen in mm, streng absteigend.
pub const FALLBACK_SPANS_MM: [f64; 5] = [1500.0, 1200.0, 900.0, 600.0, 150.0];
/// Kleinste Spanne (mm). Kürzere Linien sind nicht belegbar.
pub const MINIMUM_SPAN_LENGTH_MM: f64 = 150.0;
/// Erlaubte Abweichung zwischen Segmentsumme und Linienlänge (mm).
pub const LENGTH_TOLERANCE_MM: f64 = 1.0;
/// Strafgewichte je Spannenlänge für den Tie-Break (kleiner = bevorzugt).
pub const SPAN_PENALTY_WEIGHTS: [(f64, u32); 6] = [
    (1800.0, 0),
    (1500.0, 1),
    (1200.0, 2),
    (900.0, 3),
    (600.0, 4),
    (150.0, 5),
];
/// Strafgewicht für Längen, die in keiner Tabelle stehen.
pub const UNKNOWN_SPAN_PENALTY: u32 = 10;

// ── Breiten ─────────────────────────────────────────────────────────

/// Unterstützte Block-Breiten (mm), absteigend.
pub const SUPPORTED_BLOCK_WIDTHS: [u32; 2] = [600, 355];
/// Standard-Block-Breite (mm).
pub const DEFAULT_BLOCK_WIDTH: u32 = 600;

// ── Raster ──────────────────────────────────────────────────────────

/// Standard-Rasterweite beim Zeichnen (mm).
pub const DEFAULT_SNAP_SIZE_MM: f64 = 300.0;
/// Feines Raster; gleichzeitig Vielfaches-Regel für Längeneingaben (mm).
pub const SECONDARY_SNAP_SIZE_MM: f64 = 150.0;

// ── Numerik ─────────────────────────────────────────────────────────

/// Schwelle für "achsparallel" bzw. Null-Vektoren.
pub const NEAR_ZERO: f64 = 1e-6;
/// Rundungsraster für Längen in Checksumme und Zusammenfassung.
pub const LENGTH_ROUNDING: f64 = 1e-3;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Strafgewicht einer einzelnen Spannenlänge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PenaltyWeight {
    /// Spannenlänge in mm
    pub span_mm: f64,
    /// Gewicht (0 = bevorzugt)
    pub weight: u32,
}

/// Alle zur Laufzeit änderbaren Planungs-Optionen.
/// Wird als `span_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerOptions {
    // ── Spannen ─────────────────────────────────────────────────
    /// Bevorzugte Spannenlänge in mm
    pub preferred_span_mm: f64,
    /// Ersatz-Spannenlängen in mm (werden absteigend sortiert verwendet)
    pub fallback_spans_mm: Vec<f64>,
    /// Toleranz zwischen Segmentsumme und Linienlänge in mm
    pub length_tolerance_mm: f64,
    /// Strafgewichte für den Tie-Break
    #[serde(default = "default_penalty_weights")]
    pub penalty_weights: Vec<PenaltyWeight>,
    /// Strafgewicht für unbekannte Längen
    #[serde(default = "default_unknown_penalty")]
    pub unknown_span_penalty: u32,

    // ── Breiten ─────────────────────────────────────────────────
    /// Unterstützte Block-Breiten in mm
    pub supported_block_widths: Vec<u32>,
    /// Standard-Block-Breite für neue Linien
    pub default_block_width: u32,

    // ── Raster ──────────────────────────────────────────────────
    /// Rasterweite beim Zeichnen in mm
    #[serde(default = "default_snap_size")]
    pub snap_size_mm: f64,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            preferred_span_mm: PREFERRED_SPAN_MM,
            fallback_spans_mm: FALLBACK_SPANS_MM.to_vec(),
            length_tolerance_mm: LENGTH_TOLERANCE_MM,
            penalty_weights: default_penalty_weights(),
            unknown_span_penalty: UNKNOWN_SPAN_PENALTY,

            supported_block_widths: SUPPORTED_BLOCK_WIDTHS.to_vec(),
            default_block_width: DEFAULT_BLOCK_WIDTH,

            snap_size_mm: DEFAULT_SNAP_SIZE_MM,
        }
    }
}

/// Serde-Default für `penalty_weights` (ältere TOML-Dateien ohne Tabelle).
fn default_penalty_weights() -> Vec<PenaltyWeight> {
    SPAN_PENALTY_WEIGHTS
        .iter()
        .map(|&(span_mm, weight)| PenaltyWeight { span_mm, weight })
        .collect()
}

/// Serde-Default für `unknown_span_penalty`.
fn default_unknown_penalty() -> u32 {
    UNKNOWN_SPAN_PENALTY
}

/// Serde-Default für `snap_size_mm`.
fn default_snap_size() -> f64 {
    DEFAULT_SNAP_SIZE_MM
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("span_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("span_planner.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = PlannerOptions::default();
        assert_eq!(opts.preferred_span_mm, PREFERRED_SPAN_MM);
        assert_eq!(opts.fallback_spans_mm, FALLBACK_SPANS_MM.to_vec());
        assert_eq!(opts.penalty_weights.len(), SPAN_PENALTY_WEIGHTS.len());
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut opts = PlannerOptions::default();
        opts.default_block_width = 355;
        opts.fallback_spans_mm = vec![1200.0, 300.0];

        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: PlannerOptions = toml::from_str(&text).expect("Parsing erwartet");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_missing_optional_fields_fall_back_to_defaults() {
        let text = r#"
            preferred_span_mm = 1800.0
            fallback_spans_mm = [1500.0, 150.0]
            length_tolerance_mm = 1.0
            supported_block_widths = [600]
            default_block_width = 600
        "#;
        let parsed: PlannerOptions = toml::from_str(text).expect("Parsing erwartet");
        assert_eq!(parsed.unknown_span_penalty, UNKNOWN_SPAN_PENALTY);
        assert_eq!(parsed.snap_size_mm, DEFAULT_SNAP_SIZE_MM);
        assert_eq!(parsed.penalty_weights, default_penalty_weights());
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let path = std::env::temp_dir().join("span_planner_gibt_es_nicht.toml");
        let opts = PlannerOptions::load_from_file(&path);
        assert_eq!(opts, PlannerOptions::default());
    }
}
