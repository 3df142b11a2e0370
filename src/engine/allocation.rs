//! Orchestrierung: misst, plant, projiziert und leitet alle View-Entitäten
//! einer Linie als vollständigen Ersatz-Satz ab.

use serde::Serialize;

use super::inner_band::{build_resolved_band, BandGeometry};
use super::line_projection::project_segments_with_tolerance;
use super::span_planner::{span_summary, SpanCatalog};
use super::format_mm;
use crate::core::{
    create_span_id, FailureReason, LineFailure, LineSpan, MarkerRole, ScaffoldLine, SpanBlock,
    SpanMarker, WidthTable,
};
use crate::shared::options::LENGTH_ROUNDING;
use crate::shared::PlannerOptions;

/// Erfolgreiche Belegung einer Linie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    /// Aus den Endpunkten gemessene Länge (auf 0.001 mm gerundet)
    pub measured_length: f64,
    /// Geplante Segmente, Rest ins letzte Segment gefaltet
    pub segments: Vec<f64>,
    pub spans: Vec<LineSpan>,
    /// Ein Marker pro innerem Stoß
    pub markers: Vec<SpanMarker>,
    pub blocks: Vec<SpanBlock>,
    /// z.B. `"1800 × 3, 1500"`
    pub summary: String,
    /// Änderungserkennung, siehe [`compute_span_checksum`]
    pub checksum: String,
    pub band: BandGeometry,
}

/// Rundet auf die Checksummen-Auflösung (0.001 mm).
pub fn round_length(value: f64) -> f64 {
    let scale = LENGTH_ROUNDING.recip();
    (value * scale).round() / scale
}

/// Checksumme `"{id}:{gerundete Länge}:{seg1-seg2-…}"`.
pub fn compute_span_checksum(line_id: &str, measured_length: f64, segments: &[f64]) -> String {
    let signature = segments
        .iter()
        .map(|&segment| format_mm(segment))
        .collect::<Vec<_>>()
        .join("-");
    format!("{line_id}:{}:{signature}", format_mm(measured_length))
}

/// Belegt Linien mit Spannen, Markern, Blöcken und Innenband.
#[derive(Debug, Clone, Default)]
pub struct SpanAllocator {
    catalog: SpanCatalog,
    widths: WidthTable,
}

impl SpanAllocator {
    pub fn new(catalog: SpanCatalog, widths: WidthTable) -> Self {
        Self { catalog, widths }
    }

    /// Baut Katalog und Breiten-Tabelle aus den Laufzeit-Optionen.
    pub fn from_options(options: &PlannerOptions) -> Self {
        Self::new(
            SpanCatalog::from_options(options),
            WidthTable::from_options(options),
        )
    }

    pub fn widths(&self) -> &WidthTable {
        &self.widths
    }

    /// Block-Breite der Linie mit Fallback auf die Standard-Breite der Tabelle.
    pub fn width_for(&self, line: &ScaffoldLine) -> u32 {
        line.block_width.unwrap_or(self.widths.default_width())
    }

    /// Belegt `line` vollständig neu.
    ///
    /// Fehler sind immer linienbezogen; Rohfehler der Projektion werden nie
    /// durchgereicht.
    pub fn allocate(&self, line: &ScaffoldLine) -> Result<Allocation, LineFailure> {
        let fail = |reason: FailureReason| LineFailure::new(&line.id, reason);

        let measured_length = round_length(line.measured_length());

        let plan = self.catalog.plan(measured_length).map_err(|err| {
            log::debug!("Linie {}: {}", line.id, err);
            fail(FailureReason::from(&err))
        })?;
        let segments = plan.folded_segments();

        let projected =
            project_segments_with_tolerance(line, &segments, self.catalog.tolerance()).map_err(
                |err| {
                    log::debug!("Linie {}: Projektion fehlgeschlagen: {}", line.id, err);
                    fail(FailureReason::ProjectionFailed)
                },
            )?;

        let spans: Vec<LineSpan> = projected
            .iter()
            .zip(&segments)
            .enumerate()
            .map(|(index, (segment, &length))| LineSpan {
                id: create_span_id(&line.id, index),
                line_id: line.id.clone(),
                index,
                length: round_length(length),
                start: segment.start,
                end: segment.end,
            })
            .collect();

        let markers = spans
            .iter()
            .take(spans.len().saturating_sub(1))
            .enumerate()
            .map(|(index, span)| SpanMarker {
                id: format!("{}-marker-{}", line.id, index + 1),
                line_id: line.id.clone(),
                position: span.end,
                color: line.color,
                role: MarkerRole::Boundary,
            })
            .collect();

        let width = self.width_for(line);
        let blocks = spans
            .iter()
            .map(|span| SpanBlock {
                id: span.id.clone(),
                source_line_id: line.id.clone(),
                length: span.length.round() as u32,
                width,
                position: span.start,
                locked: true,
                band_id: None,
            })
            .collect();

        let band = build_resolved_band(line, &spans, f64::from(width)).map_err(|err| {
            log::debug!("Linie {}: {}", line.id, err);
            fail(FailureReason::from(&err))
        })?;

        let summary = span_summary(&segments);
        let checksum = compute_span_checksum(&line.id, measured_length, &segments);
        log::debug!("Linie {}: {} ({})", line.id, summary, checksum);

        Ok(Allocation {
            measured_length,
            segments,
            spans,
            markers,
            blocks,
            summary,
            checksum,
            band,
        })
    }
}

/// Belegt eine Linie mit Standard-Katalog und Standard-Breiten.
pub fn allocate_line_resources(line: &ScaffoldLine) -> Result<Allocation, LineFailure> {
    SpanAllocator::default().allocate(line)
}
