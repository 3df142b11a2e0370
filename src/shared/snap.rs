//! Raster-Snapping für gezeichnete Endpunkte (mm).

use glam::DVec2;

/// Rundet einen Wert auf das nächste Vielfache von `snap_size`.
///
/// Bei `snap_size <= 0` oder NaN bleibt der Wert unverändert.
pub fn snap_to_grid(value: f64, snap_size: f64) -> f64 {
    if snap_size.is_nan() || snap_size <= 0.0 {
        return value;
    }
    (value / snap_size).round() * snap_size
}

/// Rastet beide Koordinaten eines Punkts ein.
pub fn snap_point_to_grid(point: DVec2, snap_size: f64) -> DVec2 {
    DVec2::new(
        snap_to_grid(point.x, snap_size),
        snap_to_grid(point.y, snap_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest_multiple() {
        assert_eq!(snap_to_grid(440.0, 300.0), 300.0);
        assert_eq!(snap_to_grid(460.0, 300.0), 600.0);
        assert_eq!(snap_to_grid(-460.0, 300.0), -600.0);
        assert_eq!(snap_to_grid(225.0, 150.0), 300.0);
    }

    #[test]
    fn test_snap_ignores_invalid_size() {
        assert_eq!(snap_to_grid(123.4, 0.0), 123.4);
        assert_eq!(snap_to_grid(123.4, -5.0), 123.4);
        assert_eq!(snap_to_grid(123.4, f64::NAN), 123.4);
    }

    #[test]
    fn test_snap_point() {
        let snapped = snap_point_to_grid(DVec2::new(1790.0, -140.0), 300.0);
        assert_eq!(snapped, DVec2::new(1800.0, -0.0));
    }
}
