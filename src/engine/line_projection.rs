//! Projiziert Segmentlängen als Start/End-Punkte auf eine Linie.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::{ProjectionError, ScaffoldLine};
use crate::shared::LENGTH_TOLERANCE_MM;

/// Ein projiziertes Segment in Weltkoordinaten (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSegment {
    pub start: DVec2,
    pub end: DVec2,
}

/// Projiziert `segments` mit der Standard-Toleranz auf `line`.
pub fn project_segments_onto_line(
    line: &ScaffoldLine,
    segments: &[f64],
) -> Result<Vec<ProjectedSegment>, ProjectionError> {
    project_segments_with_tolerance(line, segments, LENGTH_TOLERANCE_MM)
}

/// Projiziert `segments` der Reihe nach von `line.start` aus.
///
/// - Summe und gemessene Länge dürfen höchstens `tolerance` abweichen
/// - das letzte Segment endet exakt auf `line.end`
/// - Koordinaten innerhalb der Toleranz um den Startpunkt werden auf diesen gerastet
pub fn project_segments_with_tolerance(
    line: &ScaffoldLine,
    segments: &[f64],
    tolerance: f64,
) -> Result<Vec<ProjectedSegment>, ProjectionError> {
    if segments.is_empty() {
        return Err(ProjectionError::NoSegments);
    }

    let measured = line.measured_length();
    if measured <= 0.0 || !measured.is_finite() {
        return Err(ProjectionError::NonPositiveLength);
    }

    let segment_total: f64 = segments.iter().sum();
    if (measured - segment_total).abs() > tolerance {
        return Err(ProjectionError::LengthMismatch {
            measured,
            segment_total,
        });
    }

    let direction = line.delta() / measured;
    let at = |distance: f64| snap_near_start(line.start + direction * distance, line.start, tolerance);

    let last = segments.len() - 1;
    let mut travelled = 0.0;
    let projected = segments
        .iter()
        .enumerate()
        .map(|(index, &length)| {
            let start = at(travelled);
            travelled += length;
            // Abweichung liegt hier immer innerhalb der Toleranz
            let end = if index == last {
                line.end
            } else {
                at(travelled)
            };
            ProjectedSegment { start, end }
        })
        .collect();

    Ok(projected)
}

/// Rastet jede Achse auf die Start-Koordinate, wenn sie näher als `tolerance` liegt.
fn snap_near_start(point: DVec2, origin: DVec2, tolerance: f64) -> DVec2 {
    let clamp = |value: f64, base: f64| {
        if (value - base).abs() <= tolerance {
            base
        } else {
            value
        }
    };
    DVec2::new(clamp(point.x, origin.x), clamp(point.y, origin.y))
}
