//! Validierung eingegebener Linienlängen (mm, ganzzahlig, Raster-Vielfache).

use thiserror::Error;

use crate::shared::SECONDARY_SNAP_SIZE_MM;

/// Grund, warum eine Längeneingabe abgelehnt wurde.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LengthInputError {
    #[error("Bitte ein Maß eingeben")]
    Empty,
    #[error("Bitte eine Zahl eingeben")]
    NotANumber,
    #[error("Bitte einen positiven Wert eingeben")]
    NotPositive,
    #[error("Bitte ganze mm eingeben")]
    NotInteger,
    #[error("Mindestmaß ist {minimum} mm")]
    BelowMinimum { minimum: f64 },
    #[error("Bitte ein Vielfaches von {unit} mm eingeben")]
    NotMultiple { unit: f64 },
}

/// Prüft eine Längeneingabe und liefert die Länge in ganzen mm.
///
/// Reihenfolge der Prüfungen: leer, keine Zahl, nicht positiv/endlich,
/// nicht ganzzahlig, kleiner als `snap_size`, kein Vielfaches von 150 mm.
pub fn validate_line_length_value(raw: &str, snap_size: f64) -> Result<u32, LengthInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LengthInputError::Empty);
    }
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| LengthInputError::NotANumber)?;
    if parsed.is_nan() {
        return Err(LengthInputError::NotANumber);
    }
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(LengthInputError::NotPositive);
    }
    if parsed.fract() != 0.0 {
        return Err(LengthInputError::NotInteger);
    }
    if parsed < snap_size {
        return Err(LengthInputError::BelowMinimum { minimum: snap_size });
    }
    if parsed % SECONDARY_SNAP_SIZE_MM != 0.0 {
        return Err(LengthInputError::NotMultiple {
            unit: SECONDARY_SNAP_SIZE_MM,
        });
    }
    if parsed > f64::from(u32::MAX) {
        return Err(LengthInputError::NotPositive);
    }
    Ok(parsed as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_non_numeric() {
        assert_eq!(validate_line_length_value("", 300.0), Err(LengthInputError::Empty));
        assert_eq!(validate_line_length_value("   ", 300.0), Err(LengthInputError::Empty));
        assert_eq!(
            validate_line_length_value("abc", 300.0),
            Err(LengthInputError::NotANumber)
        );
    }

    #[test]
    fn test_rejects_zero_negative_and_fractions() {
        assert_eq!(
            validate_line_length_value("0", 300.0),
            Err(LengthInputError::NotPositive)
        );
        assert_eq!(
            validate_line_length_value("-50", 300.0),
            Err(LengthInputError::NotPositive)
        );
        assert_eq!(
            validate_line_length_value("inf", 300.0),
            Err(LengthInputError::NotPositive)
        );
        assert_eq!(
            validate_line_length_value("12.5", 300.0),
            Err(LengthInputError::NotInteger)
        );
    }

    #[test]
    fn test_enforces_snap_minimum_and_multiple() {
        assert_eq!(
            validate_line_length_value("200", 300.0),
            Err(LengthInputError::BelowMinimum { minimum: 300.0 })
        );
        assert_eq!(
            validate_line_length_value("475", 300.0),
            Err(LengthInputError::NotMultiple { unit: 150.0 })
        );
    }

    #[test]
    fn test_accepts_valid_values() {
        assert_eq!(validate_line_length_value("600", 300.0), Ok(600));
        assert_eq!(validate_line_length_value(" 450 ", 300.0), Ok(450));
    }
}
