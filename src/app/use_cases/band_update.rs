//! Use-Case: Innenband einer Linie (neu) erzeugen und den abgeleiteten
//! Satz im State ersetzen oder entfernen.

use std::collections::HashSet;

use glam::DVec2;
use serde::Serialize;

use crate::app::derived_store::LineDerived;
use crate::app::state::{AppState, EditorWarning};
use crate::core::{
    BandOrientation, BandSettings, LineFailure, MarkerRole, Polarity, ScaffoldLine, SpanBlock,
    SpanMarker,
};
use crate::engine::{SpanAllocator, SpanPolygon};

/// Gespeichertes Innenband einer Linie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineBand {
    /// `{lineId}-inner-band`
    pub id: String,
    pub line_id: String,
    pub width: u32,
    pub outer: [DVec2; 2],
    pub inner: [DVec2; 2],
    pub outline: [DVec2; 4],
    pub span_polygons: Vec<SpanPolygon>,
    pub summary: String,
    pub polarity: Polarity,
    pub orientation: Option<BandOrientation>,
}

/// ID des Innenbands einer Linie.
pub fn inner_band_id(line_id: &str) -> String {
    format!("{line_id}-inner-band")
}

/// Ergebnis von [`generate_band_for_line`].
#[derive(Debug, Clone, PartialEq)]
pub enum BandOutcome {
    /// Linie mit aktualisierter Länge und Band-Einstellungen samt neuem Satz
    Generated {
        line: ScaffoldLine,
        derived: LineDerived,
    },
    /// Linie ohne abgeleitete Daten samt Grund
    Failed {
        line: ScaffoldLine,
        failure: LineFailure,
    },
}

impl BandOutcome {
    pub fn line(&self) -> &ScaffoldLine {
        match self {
            BandOutcome::Generated { line, .. } | BandOutcome::Failed { line, .. } => line,
        }
    }
}

/// Entfernt Marker mit gleicher (auf 0.001 mm gerundeter) Position und Rolle.
fn dedupe_markers(markers: Vec<SpanMarker>) -> Vec<SpanMarker> {
    let mut seen: HashSet<(i64, i64, MarkerRole)> = HashSet::new();
    markers
        .into_iter()
        .filter(|marker| {
            let key = (
                (marker.position.x * 1000.0).round() as i64,
                (marker.position.y * 1000.0).round() as i64,
                marker.role,
            );
            seen.insert(key)
        })
        .collect()
}

fn corner_markers(line: &ScaffoldLine) -> Vec<SpanMarker> {
    [("start", line.start), ("end", line.end)]
        .into_iter()
        .map(|(suffix, position)| SpanMarker {
            id: format!("{}-corner-{suffix}", line.id),
            line_id: line.id.clone(),
            position,
            color: line.color,
            role: MarkerRole::Corner,
        })
        .collect()
}

/// Belegt die Linie und baut Band, Marker und Blöcke als Ersatz-Satz.
pub fn generate_band_for_line(line: &ScaffoldLine, allocator: &SpanAllocator) -> BandOutcome {
    let width = allocator.width_for(line);
    let normalized = line.clone().with_block_width(width);

    let allocation = match allocator.allocate(&normalized) {
        Ok(allocation) => allocation,
        Err(failure) => {
            return BandOutcome::Failed {
                line: normalized,
                failure,
            }
        }
    };

    let band_id = inner_band_id(&normalized.id);
    let geometry = allocation.band;

    let mut markers = allocation.markers;
    markers.extend(dedupe_markers(corner_markers(&normalized)));
    let markers = dedupe_markers(markers);

    let blocks = allocation
        .blocks
        .into_iter()
        .map(|block| SpanBlock {
            band_id: Some(band_id.clone()),
            ..block
        })
        .collect();

    let band = LineBand {
        id: band_id,
        line_id: normalized.id.clone(),
        width,
        outer: geometry.outer,
        inner: geometry.inner,
        outline: geometry.outline,
        span_polygons: geometry.span_polygons,
        summary: allocation.summary,
        polarity: geometry.polarity,
        orientation: geometry.orientation,
    };

    let enriched = ScaffoldLine {
        length: allocation.measured_length,
        band_settings: Some(BandSettings {
            polarity: Some(geometry.polarity),
            orientation: geometry.orientation,
        }),
        ..normalized
    };

    BandOutcome::Generated {
        line: enriched,
        derived: LineDerived {
            spans: allocation.spans,
            markers,
            blocks,
            band,
            checksum: allocation.checksum,
        },
    }
}

/// Übernimmt ein [`BandOutcome`] in den State.
///
/// Die Linie wird eingefügt bzw. an ihrer Position ersetzt. Bei Erfolg wird
/// der abgeleitete Satz getauscht, bei Fehlschlag vollständig entfernt.
/// Mit `record_warning = false` bleibt die Warnung unangetastet (Sammelbelegung).
pub fn apply_band_update(
    state: &mut AppState,
    outcome: BandOutcome,
    record_warning: bool,
) -> Result<String, LineFailure> {
    match outcome {
        BandOutcome::Generated { line, derived } => {
            let summary = derived.band.summary.clone();
            let changed = state.derived.replace_for_line(&line.id, derived);
            if changed {
                log::info!("Innenband für Linie {} aktualisiert: {}", line.id, summary);
            } else {
                log::debug!("Innenband für Linie {} unverändert", line.id);
            }
            state.lines.insert(line.id.clone(), line);
            if record_warning {
                state.warning = None;
            }
            Ok(summary)
        }
        BandOutcome::Failed { line, failure } => {
            log::warn!("{}", failure);
            state.derived.clear_line(&line.id);
            state.lines.insert(line.id.clone(), line);
            if record_warning {
                state.warning = Some(EditorWarning::Line(failure.clone()));
            }
            Err(failure)
        }
    }
}

/// Erzeugt das Band einer Linie mit dem Allocator des States und übernimmt es.
pub fn update_line_band(state: &mut AppState, line: &ScaffoldLine) -> Result<String, LineFailure> {
    let outcome = generate_band_for_line(line, &state.allocator);
    apply_band_update(state, outcome, true)
}
