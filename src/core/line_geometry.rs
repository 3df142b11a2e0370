//! Längenänderung bestehender Linien um ihren Mittelpunkt.

use glam::DVec2;
use thiserror::Error;

use super::validation::{validate_line_length_value, LengthInputError};
use super::{calculate_line_length, infer_orientation, LineOrientation, ScaffoldLine};
use crate::shared::{snap_to_grid, NEAR_ZERO};

/// Fehler beim Neuberechnen einer Linie.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineGeometryError {
    #[error("Linienlänge muss eine positive Zahl sein")]
    NonPositiveLength,
    #[error(transparent)]
    InvalidLength(#[from] LengthInputError),
    #[error("Eingerastete Endpunkte fallen zusammen")]
    Collapsed,
}

/// Skaliert eine Linie symmetrisch um ihren Mittelpunkt auf `next_length_mm`.
///
/// Achsparallele Linien behalten ihre Zeichenrichtung; die Quer-Koordinate
/// wird auf das Raster gerastet. Diagonale Linien werden entlang ihres
/// Einheitsvektors skaliert.
pub fn recalculate_line_with_length(
    line: &ScaffoldLine,
    next_length_mm: f64,
    snap_size: f64,
) -> Result<ScaffoldLine, LineGeometryError> {
    if !next_length_mm.is_finite() || next_length_mm <= 0.0 {
        return Err(LineGeometryError::NonPositiveLength);
    }
    validate_line_length_value(&next_length_mm.round().to_string(), snap_size)?;

    let midpoint = (line.start + line.end) * 0.5;
    let half = next_length_mm / 2.0;

    let (start, end) = match line.orientation {
        LineOrientation::Horizontal => {
            let forward = line.end.x - line.start.x >= 0.0;
            let (lo, hi) = (midpoint.x - half, midpoint.x + half);
            let (sx, ex) = if forward { (lo, hi) } else { (hi, lo) };
            let y = snap_to_grid(midpoint.y, snap_size);
            (DVec2::new(sx, y), DVec2::new(ex, y))
        }
        LineOrientation::Vertical => {
            let forward = line.end.y - line.start.y >= 0.0;
            let (lo, hi) = (midpoint.y - half, midpoint.y + half);
            let (sy, ey) = if forward { (lo, hi) } else { (hi, lo) };
            let x = snap_to_grid(midpoint.x, snap_size);
            (DVec2::new(x, sy), DVec2::new(x, ey))
        }
        LineOrientation::Diagonal => {
            let unit = line
                .delta()
                .try_normalize()
                .ok_or(LineGeometryError::Collapsed)?;
            (midpoint - unit * half, midpoint + unit * half)
        }
    };

    if start.distance(end) <= NEAR_ZERO {
        return Err(LineGeometryError::Collapsed);
    }

    let orientation = match line.orientation {
        LineOrientation::Diagonal => infer_orientation(start, end),
        fixed => fixed,
    };

    Ok(ScaffoldLine {
        start,
        end,
        length: calculate_line_length(start, end).round(),
        orientation,
        ..line.clone()
    })
}
