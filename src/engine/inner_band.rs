//! Innenband-Geometrie: kanonische Innen-Normale, Versatz-Auflösung und
//! Polygone (Umriss + ein Viereck pro Spanne).
//!
//! Alle Polygone nutzen dieselbe Punktreihenfolge:
//! `[außen Start, außen Ende, innen Ende, innen Start]`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::{BandError, BandOrientation, BandSettings, LineSpan, Polarity, ScaffoldLine};
use crate::shared::NEAR_ZERO;

/// Kanonische Innen-Normale einer Linie (Einheitsvektor, Bildschirmkoordinaten).
///
/// - horizontal: `(0, −1)` bei Δx ≥ 0, sonst `(0, +1)`
/// - vertikal: `(+1, 0)` bei Δy < 0, sonst `(−1, 0)`
/// - diagonal: `normalize(−Δy, Δx)`
pub fn compute_inward_normal(line: &ScaffoldLine) -> Result<DVec2, BandError> {
    let delta = line.delta();
    let flat_x = delta.x.abs() < NEAR_ZERO;
    let flat_y = delta.y.abs() < NEAR_ZERO;

    match (flat_x, flat_y) {
        (true, true) => Err(BandError::ZeroLengthNormal),
        (_, true) => Ok(if delta.x >= 0.0 { DVec2::NEG_Y } else { DVec2::Y }),
        (true, false) => Ok(if delta.y < 0.0 { DVec2::X } else { DVec2::NEG_X }),
        (false, false) => DVec2::new(-delta.y, delta.x)
            .try_normalize()
            .ok_or(BandError::ZeroLengthNormal),
    }
}

/// Aufgelöster Band-Versatz einer Linie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOffset {
    /// Versatz mit Betrag exakt `width`
    pub offset: DVec2,
    /// Aus dem Skalarprodukt mit der Normale neu abgeleitet
    pub polarity: Polarity,
    /// Gewählte Seite; `Reverse`, wenn nur die Polarität negativ war
    pub orientation: Option<BandOrientation>,
}

impl ResolvedOffset {
    /// Einstellungen zum Persistieren an der Linie.
    pub fn settings(&self) -> BandSettings {
        BandSettings {
            polarity: Some(self.polarity),
            orientation: self.orientation,
        }
    }
}

fn orientation_vector(choice: BandOrientation, normal: DVec2, width: f64) -> DVec2 {
    match choice {
        BandOrientation::Up => DVec2::new(0.0, -width),
        BandOrientation::Down => DVec2::new(0.0, width),
        BandOrientation::Left => DVec2::new(-width, 0.0),
        BandOrientation::Right => DVec2::new(width, 0.0),
        BandOrientation::Standard => normal * width,
        BandOrientation::Reverse => -normal * width,
    }
}

/// Löst Seite und Polarität zu einem konkreten Versatz-Vektor auf.
///
/// Eine explizite Seite hat immer Vorrang; die Polarität wird danach aus dem
/// Vektor neu bestimmt.
pub fn resolve_offset(
    line: &ScaffoldLine,
    width: f64,
    settings: Option<&BandSettings>,
) -> Result<ResolvedOffset, BandError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(BandError::NonPositiveWidth(width));
    }
    let normal = compute_inward_normal(line)?;
    let chosen = settings.and_then(|s| s.orientation);

    let raw = match (chosen, settings.and_then(|s| s.polarity)) {
        (Some(choice), _) => orientation_vector(choice, normal, width),
        (None, Some(polarity)) => normal * width * polarity.sign(),
        (None, None) => normal * width,
    };

    let polarity = Polarity::from_dot(normal.dot(raw));
    let offset = raw.normalize_or_zero() * width;

    let orientation = match (chosen, polarity) {
        (None, Polarity::Negative) => Some(BandOrientation::Reverse),
        (other, _) => other,
    };

    Ok(ResolvedOffset {
        offset,
        polarity,
        orientation,
    })
}

/// Viereck eines Band-Abschnitts für genau eine Spanne.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanPolygon {
    pub span_id: String,
    pub points: [DVec2; 4],
}

/// Komplette Geometrie eines Innenbands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandGeometry {
    /// Linie selbst: `[start, end]`
    pub outer: [DVec2; 2],
    /// Um `offset` verschobene Linie
    pub inner: [DVec2; 2],
    /// `[outerStart, outerEnd, innerEnd, innerStart]`
    pub outline: [DVec2; 4],
    pub span_polygons: Vec<SpanPolygon>,
    pub offset: DVec2,
    pub polarity: Polarity,
    pub orientation: Option<BandOrientation>,
}

fn quad(start: DVec2, end: DVec2, offset: DVec2) -> [DVec2; 4] {
    [start, end, end + offset, start + offset]
}

/// Baut die Band-Polygone.
///
/// Ohne `offset` (oder bei Null-Vektor) wird `normal · width · polarity`
/// verwendet. Ein übergebener Versatz wird auf `width` skaliert; `polarity`
/// wird unverändert übernommen und muss zur Richtung passen.
pub fn build_band_geometry(
    line: &ScaffoldLine,
    spans: &[LineSpan],
    width: f64,
    polarity: Polarity,
    offset: Option<DVec2>,
) -> Result<BandGeometry, BandError> {
    if width.is_nan() || width <= 0.0 {
        return Err(BandError::NonPositiveWidth(width));
    }
    let offset = match offset.and_then(DVec2::try_normalize) {
        Some(direction) => direction * width,
        None => compute_inward_normal(line)? * width * polarity.sign(),
    };

    let outline = quad(line.start, line.end, offset);
    let span_polygons = spans
        .iter()
        .map(|span| SpanPolygon {
            span_id: span.id.clone(),
            points: quad(span.start, span.end, offset),
        })
        .collect();

    Ok(BandGeometry {
        outer: [line.start, line.end],
        inner: [line.start + offset, line.end + offset],
        outline,
        span_polygons,
        offset,
        polarity,
        orientation: None,
    })
}

/// Löst die Band-Einstellungen der Linie auf und baut die Geometrie.
pub fn build_resolved_band(
    line: &ScaffoldLine,
    spans: &[LineSpan],
    width: f64,
) -> Result<BandGeometry, BandError> {
    let resolved = resolve_offset(line, width, line.band_settings.as_ref())?;
    let geometry = build_band_geometry(line, spans, width, resolved.polarity, Some(resolved.offset))?;
    Ok(BandGeometry {
        orientation: resolved.orientation,
        ..geometry
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line(start: (f64, f64), end: (f64, f64)) -> ScaffoldLine {
        ScaffoldLine::new("b", DVec2::new(start.0, start.1), DVec2::new(end.0, end.1))
    }

    fn settings(
        polarity: Option<Polarity>,
        orientation: Option<BandOrientation>,
    ) -> BandSettings {
        BandSettings {
            polarity,
            orientation,
        }
    }

    #[test]
    fn test_horizontal_normal_depends_on_direction() {
        let ltr = compute_inward_normal(&line((0.0, 0.0), (1800.0, 0.0))).expect("Normale erwartet");
        let rtl = compute_inward_normal(&line((1800.0, 0.0), (0.0, 0.0))).expect("Normale erwartet");
        assert_eq!(ltr, DVec2::new(0.0, -1.0));
        assert_eq!(rtl, DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_vertical_normal_depends_on_direction() {
        let upward = compute_inward_normal(&line((0.0, 1800.0), (0.0, 0.0))).expect("Normale erwartet");
        let downward = compute_inward_normal(&line((0.0, 0.0), (0.0, 1800.0))).expect("Normale erwartet");
        assert_eq!(upward, DVec2::new(1.0, 0.0));
        assert_eq!(downward, DVec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_diagonal_normal_is_rotated_direction() {
        let normal = compute_inward_normal(&line((0.0, 0.0), (300.0, 400.0))).expect("Normale erwartet");
        assert_relative_eq!(normal.x, -0.8, epsilon = 1e-12);
        assert_relative_eq!(normal.y, 0.6, epsilon = 1e-12);
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_line_has_no_normal() {
        assert_eq!(
            compute_inward_normal(&line((5.0, 5.0), (5.0, 5.0))),
            Err(BandError::ZeroLengthNormal)
        );
    }

    #[test]
    fn test_resolve_defaults_to_normal() {
        let resolved = resolve_offset(&line((0.0, 0.0), (3600.0, 0.0)), 600.0, None)
            .expect("Versatz erwartet");
        assert_eq!(resolved.offset, DVec2::new(0.0, -600.0));
        assert_eq!(resolved.polarity, Polarity::Positive);
        assert_eq!(resolved.orientation, None);
    }

    #[test]
    fn test_negative_polarity_records_reverse() {
        let s = settings(Some(Polarity::Negative), None);
        let resolved = resolve_offset(&line((0.0, 0.0), (3600.0, 0.0)), 600.0, Some(&s))
            .expect("Versatz erwartet");
        assert_eq!(resolved.offset, DVec2::new(0.0, 600.0));
        assert_eq!(resolved.polarity, Polarity::Negative);
        assert_eq!(resolved.orientation, Some(BandOrientation::Reverse));
    }

    #[test]
    fn test_orientation_wins_over_polarity() {
        // Seite "oben" bei horizontaler Linie liegt auf der Normalen → positiv
        let s = settings(Some(Polarity::Negative), Some(BandOrientation::Up));
        let resolved = resolve_offset(&line((0.0, 0.0), (3600.0, 0.0)), 355.0, Some(&s))
            .expect("Versatz erwartet");
        assert_eq!(resolved.offset, DVec2::new(0.0, -355.0));
        assert_eq!(resolved.polarity, Polarity::Positive);
        assert_eq!(resolved.orientation, Some(BandOrientation::Up));
    }

    #[test]
    fn test_fixed_sides_ignore_draw_direction() {
        let s = settings(None, Some(BandOrientation::Right));
        let forward = resolve_offset(&line((0.0, 0.0), (0.0, 1800.0)), 600.0, Some(&s))
            .expect("Versatz erwartet");
        let backward = resolve_offset(&line((0.0, 1800.0), (0.0, 0.0)), 600.0, Some(&s))
            .expect("Versatz erwartet");
        assert_eq!(forward.offset, DVec2::new(600.0, 0.0));
        assert_eq!(backward.offset, DVec2::new(600.0, 0.0));
        assert_eq!(forward.polarity, Polarity::Negative);
        assert_eq!(backward.polarity, Polarity::Positive);
        // Explizite Seite bleibt erhalten, auch bei negativer Polarität
        assert_eq!(forward.orientation, Some(BandOrientation::Right));
    }

    #[test]
    fn test_diagonal_offset_has_exact_width() {
        let s = settings(None, Some(BandOrientation::Reverse));
        let resolved = resolve_offset(&line((0.0, 0.0), (1234.0, 987.0)), 600.0, Some(&s))
            .expect("Versatz erwartet");
        assert_relative_eq!(resolved.offset.length(), 600.0, epsilon = 1e-9);
        assert_eq!(resolved.polarity, Polarity::Negative);
    }

    #[test]
    fn test_resolve_rejects_non_positive_width() {
        let l = line((0.0, 0.0), (3600.0, 0.0));
        assert_eq!(resolve_offset(&l, 0.0, None), Err(BandError::NonPositiveWidth(0.0)));
    }

    #[test]
    fn test_bottom_to_top_band_lies_at_positive_x() {
        let l = line((600.0, 1800.0), (600.0, 0.0));
        let band = build_resolved_band(&l, &[], 600.0).expect("Band erwartet");
        assert_eq!(band.inner, [DVec2::new(1200.0, 1800.0), DVec2::new(1200.0, 0.0)]);
    }

    #[test]
    fn test_outline_winding() {
        let l = line((0.0, 0.0), (3600.0, 0.0));
        let band = build_band_geometry(&l, &[], 600.0, Polarity::Positive, None).expect("Band erwartet");
        assert_eq!(
            band.outline,
            [
                DVec2::new(0.0, 0.0),
                DVec2::new(3600.0, 0.0),
                DVec2::new(3600.0, -600.0),
                DVec2::new(0.0, -600.0),
            ]
        );
        assert_eq!(band.outer, [l.start, l.end]);
    }

    #[test]
    fn test_custom_offset_is_scaled_to_width() {
        let l = line((0.0, 0.0), (3600.0, 0.0));
        let band = build_band_geometry(
            &l,
            &[],
            355.0,
            Polarity::Negative,
            Some(DVec2::new(0.0, 2.0)),
        )
        .expect("Band erwartet");
        assert_eq!(band.offset, DVec2::new(0.0, 355.0));
        assert_eq!(band.inner[1], DVec2::new(3600.0, 355.0));

        // Null-Vektor fällt auf die Innen-Normale zurück
        let band = build_band_geometry(&l, &[], 600.0, Polarity::Positive, Some(DVec2::ZERO))
            .expect("Band erwartet");
        assert_eq!(band.offset, DVec2::new(0.0, -600.0));
    }

    #[test]
    fn test_span_polygons_follow_spans() {
        let l = line((0.0, 0.0), (3600.0, 0.0));
        let spans = vec![
            LineSpan {
                id: "b-span-1".into(),
                line_id: "b".into(),
                index: 0,
                length: 1800.0,
                start: DVec2::new(0.0, 0.0),
                end: DVec2::new(1800.0, 0.0),
            },
            LineSpan {
                id: "b-span-2".into(),
                line_id: "b".into(),
                index: 1,
                length: 1800.0,
                start: DVec2::new(1800.0, 0.0),
                end: DVec2::new(3600.0, 0.0),
            },
        ];
        let band = build_band_geometry(&l, &spans, 355.0, Polarity::Negative, None)
            .expect("Band erwartet");
        assert_eq!(band.span_polygons.len(), 2);
        assert_eq!(band.span_polygons[1].span_id, "b-span-2");
        assert_eq!(
            band.span_polygons[1].points,
            [
                DVec2::new(1800.0, 0.0),
                DVec2::new(3600.0, 0.0),
                DVec2::new(3600.0, 355.0),
                DVec2::new(1800.0, 355.0),
            ]
        );
    }

    #[test]
    fn test_build_rejects_non_positive_width() {
        let l = line((0.0, 0.0), (3600.0, 0.0));
        assert_eq!(
            build_band_geometry(&l, &[], -1.0, Polarity::Positive, None),
            Err(BandError::NonPositiveWidth(-1.0))
        );
    }
}
